pub mod empty;
pub mod github_repo;
pub mod github_user;
