use serde::Deserialize;

/// Body of `GET /users/{name}`. GitHub sends many more fields; only the
/// ones the page renders are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub public_repos: u32,
}
