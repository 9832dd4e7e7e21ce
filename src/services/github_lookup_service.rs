use reqwest::Client;

use crate::errors::FetchError;
use crate::lookup::{LookupOutcome, Mode};
use crate::mappers::{github_repo_mapper, github_user_mapper};
use crate::models::github_repo::GithubRepo;
use crate::models::github_user::GithubUser;

const BASE_URL: &str = "https://api.github.com";

pub struct GitHubLookupService {
    pub client: Client,
}

impl GitHubLookupService {
    /// Issues the one GET a submission is allowed and decodes the body
    /// for the requested mode. Exactly one request, no retries.
    pub async fn lookup(&self, mode: Mode, name: &str) -> Result<LookupOutcome, FetchError> {
        let url = match mode {
            Mode::User => format!("{}/users/{}", BASE_URL, name),
            Mode::Repo => format!("{}/repos/{}", BASE_URL, name),
        };
        log::info!("Making request to {}...", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", "smol-lookup-form")
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("{:?}", status);
            log::error!("{:?}", response.text().await.unwrap_or_default());
            return Err(FetchError::Status(status));
        }

        let contents = response.text().await?;
        match mode {
            Mode::User => Ok(LookupOutcome::User(decode_user(&contents)?)),
            Mode::Repo => Ok(LookupOutcome::Repo(decode_repo(&contents)?)),
        }
    }
}

fn decode_user(contents: &str) -> Result<crate::lookup::UserResult, FetchError> {
    let user: GithubUser = serde_json::from_str(contents)?;
    Ok(github_user_mapper::to_result(&user))
}

fn decode_repo(contents: &str) -> Result<crate::lookup::RepoResult, FetchError> {
    let repo: GithubRepo = serde_json::from_str(contents)?;
    Ok(github_repo_mapper::to_result(&repo))
}
