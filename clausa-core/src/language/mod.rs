//! Language profiles
//!
//! Everything language-specific about clause detection lives in data: which
//! dependency labels head clauses, which tokens introduce them and how verbs
//! are recognized. Adding a language means adding a TOML file, not code.

pub mod config;
pub(crate) mod loader;
mod profile;

pub use config::ProfileConfig;
pub use loader::{available_languages, get_profile, load_profile_str};
pub use profile::LanguageProfile;
