use crate::lookup::UserResult;
use crate::models;

pub fn to_result(model: &models::github_user::GithubUser) -> UserResult {
    let model_clone = model.clone();
    UserResult {
        login: model_clone.login,
        public_repo_count: model_clone.public_repos,
    }
}
