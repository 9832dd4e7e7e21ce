use crate::lookup::RepoResult;
use crate::models;

pub fn to_result(model: &models::github_repo::GithubRepo) -> RepoResult {
    let model_clone = model.clone();
    RepoResult {
        name: model_clone.name,
        star_count: model_clone.stargazers_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::github_repo::GithubRepo;

    #[test]
    fn renames_fields_without_other_changes() {
        let model = GithubRepo {
            name: "Hello-World".to_string(),
            stargazers_count: 1942,
        };
        let result = to_result(&model);
        assert_eq!(result.name, "Hello-World");
        assert_eq!(result.star_count, 1942);
    }
}
