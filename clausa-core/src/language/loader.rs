//! Profile registry
//!
//! Built-in profiles are embedded at compile time and parsed once, on first
//! lookup. Custom profiles are parsed from TOML on demand.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::{
    error::{CoreError, Result},
    language::{config::ProfileConfig, profile::LanguageProfile},
};

const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("../../configs/languages/english.toml")),
    ("fr", include_str!("../../configs/languages/french.toml")),
];

struct Registry {
    /// Canonical code -> profile, in embedding order
    profiles: Vec<(String, Arc<LanguageProfile>)>,
    /// Lowercased code or alias -> profile
    lookup: HashMap<String, Arc<LanguageProfile>>,
}

static EMBEDDED: OnceLock<Registry> = OnceLock::new();

fn registry() -> &'static Registry {
    EMBEDDED.get_or_init(|| {
        let mut profiles = Vec::new();
        let mut lookup = HashMap::new();

        for (code, source) in EMBEDDED_SOURCES {
            match load_profile_str(source) {
                Ok(profile) => {
                    let profile = Arc::new(profile);
                    lookup.insert(profile.code().to_lowercase(), profile.clone());
                    for alias in profile.aliases() {
                        lookup.insert(alias.to_lowercase(), profile.clone());
                    }
                    profiles.push((profile.code().to_string(), profile));
                }
                Err(e) => {
                    tracing::warn!(code, error = %e, "failed to load embedded language profile");
                }
            }
        }

        Registry { profiles, lookup }
    })
}

/// Look up a built-in profile by code or alias (case-insensitive)
pub fn get_profile(code: &str) -> Result<Arc<LanguageProfile>> {
    registry()
        .lookup
        .get(&code.trim().to_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::UnknownLanguage {
            code: code.to_string(),
        })
}

/// Codes of all built-in profiles
pub fn available_languages() -> Vec<&'static str> {
    registry()
        .profiles
        .iter()
        .map(|(code, _)| code.as_str())
        .collect()
}

/// Parse and validate a profile from TOML text
pub fn load_profile_str(source: &str) -> Result<LanguageProfile> {
    let config: ProfileConfig = toml::from_str(source)
        .map_err(|e| CoreError::InvalidProfile(format!("Failed to parse profile: {e}")))?;
    LanguageProfile::from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_load() {
        assert_eq!(available_languages(), vec!["en", "fr"]);

        let en = get_profile("en").unwrap();
        assert_eq!(en.name(), "English");
        assert!(en.is_clause_root_label("ROOT"));
        assert!(en.is_clause_root_label("relcl"));
        assert!(!en.is_clause_root_label("xcomp"));

        let fr = get_profile("fr").unwrap();
        assert!(fr.is_clause_root_label("acl:relcl"));
        assert!(!fr.is_clause_root_label("relcl"));
    }

    #[test]
    fn test_aliases_and_case() {
        let en = get_profile("en").unwrap();
        assert!(Arc::ptr_eq(&en, &get_profile("English").unwrap()));
        assert!(Arc::ptr_eq(&en, &get_profile(" EN ").unwrap()));
        assert_eq!(get_profile("french").unwrap().code(), "fr");
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(
            get_profile("tlh").unwrap_err(),
            CoreError::UnknownLanguage {
                code: "tlh".to_string()
            }
        );
    }

    #[test]
    fn test_load_profile_str_errors() {
        assert!(matches!(
            load_profile_str("not toml ["),
            Err(CoreError::InvalidProfile(_))
        ));
    }
}
