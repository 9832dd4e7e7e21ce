use serde::Deserialize;

/// Body of `GET /repos/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub stargazers_count: u32,
}
