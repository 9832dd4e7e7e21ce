use serde::{Deserialize, Serialize};

use crate::errors::FetchError;
use crate::validators;

pub const INPUT_ERROR_MESSAGE: &str = "Please use only Latin letters and digits";

/// Which endpoint a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    User,
    Repo,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::User => "user",
            Mode::Repo => "repo",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Mode::User => "Error fetching user data",
            Mode::Repo => "Error fetching repo data",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub name: String,
    pub mode: Mode,
}

/// A single field update from the form.
#[derive(Debug, Clone)]
pub enum FieldChange {
    Name(String),
    Mode(Mode),
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResult {
    pub login: String,
    pub public_repo_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepoResult {
    pub name: String,
    pub star_count: u32,
}

/// The settled body of one lookup, already mapped for display.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    User(UserResult),
    Repo(RepoResult),
}

/// Handed out by [`LookupState::begin_submit`] and redeemed at settlement.
/// The generation inside it decides whether the outcome still applies.
#[derive(Debug)]
pub struct SubmitTicket {
    pub name: String,
    pub mode: Mode,
    generation: u64,
}

/// All state owned by the lookup controller. Each submission updates at
/// most one of `user`/`repo`; the other keeps whatever it held before.
#[derive(Debug, Default)]
pub struct LookupState {
    pub query: Query,
    input_error: Option<String>,
    loading: bool,
    error: Option<String>,
    user: Option<UserResult>,
    repo: Option<RepoResult>,
    generation: u64,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Name(value) => {
                if validators::is_str_alphanumeric(&value) {
                    self.input_error = None;
                    self.query.name = value;
                } else {
                    self.input_error = Some(INPUT_ERROR_MESSAGE.to_string());
                }
            }
            FieldChange::Mode(mode) => {
                self.query.mode = mode;
            }
        }
    }

    /// Starts a submit cycle: raises `loading`, clears the last error and
    /// empties the stored name, all before any request goes out. The taken
    /// name and mode travel on the ticket.
    pub fn begin_submit(&mut self) -> SubmitTicket {
        self.loading = true;
        self.error = None;
        self.generation += 1;
        SubmitTicket {
            name: std::mem::take(&mut self.query.name),
            mode: self.query.mode,
            generation: self.generation,
        }
    }

    /// Settles the submit cycle the ticket belongs to. A ticket from a
    /// superseded submission is dropped without touching any state, so
    /// the most recent submission always wins.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: Result<LookupOutcome, FetchError>) {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping superseded lookup for '{}' (generation {} < {})",
                ticket.name,
                ticket.generation,
                self.generation
            );
            return;
        }
        match outcome {
            Ok(LookupOutcome::User(user)) => {
                self.user = Some(user);
            }
            Ok(LookupOutcome::Repo(repo)) => {
                self.repo = Some(repo);
            }
            Err(err) => {
                log::error!("Error fetching {} data: {:?}", ticket.mode.as_str(), err);
                self.error = Some(ticket.mode.error_message().to_string());
            }
        }
        self.loading = false;
    }

    pub fn view(&self) -> LookupView {
        LookupView {
            name: self.query.name.clone(),
            mode: self.query.mode.as_str(),
            mode_is_repo: self.query.mode == Mode::Repo,
            input_error: self.input_error.clone(),
            loading: self.loading,
            error: self.error.clone(),
            user: self.user.clone(),
            repo: self.repo.clone(),
        }
    }
}

/// Snapshot of the controller state for template rendering.
#[derive(Debug, Serialize)]
pub struct LookupView {
    pub name: String,
    pub mode: &'static str,
    pub mode_is_repo: bool,
    pub input_error: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub user: Option<UserResult>,
    pub repo: Option<RepoResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn octocat() -> UserResult {
        UserResult {
            login: "octocat".to_string(),
            public_repo_count: 8,
        }
    }

    #[test]
    fn valid_name_is_stored_and_clears_message() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name("abc$".to_string()));
        assert!(state.input_error().is_some());

        state.apply(FieldChange::Name("abc123".to_string()));
        assert_eq!(state.query.name, "abc123");
        assert!(state.input_error().is_none());
    }

    #[test]
    fn empty_name_is_valid() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name(String::new()));
        assert_eq!(state.query.name, "");
        assert!(state.input_error().is_none());
    }

    #[test]
    fn invalid_name_leaves_stored_name_unchanged() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name("octocat".to_string()));
        state.apply(FieldChange::Name("octo cat!".to_string()));
        assert_eq!(state.query.name, "octocat");
        assert_eq!(state.input_error(), Some(INPUT_ERROR_MESSAGE));
    }

    #[test]
    fn mode_change_is_idempotent() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Mode(Mode::Repo));
        state.apply(FieldChange::Mode(Mode::Repo));
        assert_eq!(state.query.mode, Mode::Repo);
        assert_eq!(state.query.name, "");
        assert!(state.input_error().is_none());
    }

    #[test]
    fn begin_submit_resets_name_synchronously() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name("octocat".to_string()));

        let ticket = state.begin_submit();
        assert_eq!(ticket.name, "octocat");
        assert_eq!(state.query.name, "");
        assert!(state.view().loading);
        assert!(state.view().error.is_none());
    }

    #[test]
    fn successful_user_lookup_fills_only_the_user_slot() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name("octocat".to_string()));
        let ticket = state.begin_submit();

        state.complete(ticket, Ok(LookupOutcome::User(octocat())));

        let view = state.view();
        assert!(!view.loading);
        assert!(view.error.is_none());
        assert!(view.repo.is_none());
        let user = view.user.expect("user slot should be filled");
        assert_eq!(user.login, "octocat");
        assert_eq!(user.public_repo_count, 8);
    }

    #[test]
    fn failed_repo_lookup_sets_message_and_keeps_prior_result() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Mode(Mode::Repo));
        state.apply(FieldChange::Name("hello".to_string()));
        let ticket = state.begin_submit();
        state.complete(
            ticket,
            Ok(LookupOutcome::Repo(RepoResult {
                name: "hello".to_string(),
                star_count: 3,
            })),
        );

        state.apply(FieldChange::Name("doesnotexist123".to_string()));
        let ticket = state.begin_submit();
        state.complete(ticket, Err(FetchError::Status(StatusCode::NOT_FOUND)));

        let view = state.view();
        assert!(!view.loading);
        assert_eq!(view.error.as_deref(), Some("Error fetching repo data"));
        let repo = view.repo.expect("prior repo result should survive");
        assert_eq!(repo.name, "hello");
        assert_eq!(repo.star_count, 3);
    }

    #[test]
    fn switching_mode_keeps_the_other_slot_stale() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name("octocat".to_string()));
        let ticket = state.begin_submit();
        state.complete(ticket, Ok(LookupOutcome::User(octocat())));

        state.apply(FieldChange::Mode(Mode::Repo));
        state.apply(FieldChange::Name("hello".to_string()));
        let ticket = state.begin_submit();
        state.complete(
            ticket,
            Ok(LookupOutcome::Repo(RepoResult {
                name: "hello".to_string(),
                star_count: 3,
            })),
        );

        let view = state.view();
        assert!(view.user.is_some());
        assert!(view.repo.is_some());
    }

    #[test]
    fn superseded_ticket_is_dropped_entirely() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name("first".to_string()));
        let stale = state.begin_submit();

        state.apply(FieldChange::Name("second".to_string()));
        let current = state.begin_submit();

        state.complete(stale, Err(FetchError::Status(StatusCode::NOT_FOUND)));
        let view = state.view();
        assert!(view.loading, "stale settlement must not clear loading");
        assert!(view.error.is_none());
        assert!(view.user.is_none());

        state.complete(
            current,
            Ok(LookupOutcome::User(UserResult {
                login: "second".to_string(),
                public_repo_count: 1,
            })),
        );
        let view = state.view();
        assert!(!view.loading);
        assert_eq!(view.user.expect("current result applies").login, "second");
    }

    #[test]
    fn stale_success_does_not_overwrite_newer_result() {
        let mut state = LookupState::new();
        state.apply(FieldChange::Name("first".to_string()));
        let stale = state.begin_submit();

        state.apply(FieldChange::Name("second".to_string()));
        let current = state.begin_submit();

        state.complete(
            current,
            Ok(LookupOutcome::User(UserResult {
                login: "second".to_string(),
                public_repo_count: 2,
            })),
        );
        state.complete(stale, Ok(LookupOutcome::User(octocat())));

        assert_eq!(state.view().user.expect("newer result wins").login, "second");
    }
}
