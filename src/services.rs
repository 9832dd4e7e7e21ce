pub mod github_lookup_service;
