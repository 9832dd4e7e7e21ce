pub mod github_repo_mapper;
pub mod github_user_mapper;
