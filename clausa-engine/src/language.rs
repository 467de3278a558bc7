//! Profile resolution for the engine
//!
//! Built-in profiles come from the core registry; custom ones are read from
//! TOML files here, keeping file I/O out of the core crate.

use crate::error::{EngineError, Result};
use clausa_core::{get_profile, load_profile_str, CoreError, LanguageProfile};
use std::path::Path;
use std::sync::Arc;

/// Look up a built-in profile by code or alias
pub fn resolve_profile(code: &str) -> Result<Arc<LanguageProfile>> {
    get_profile(code).map_err(|e| match e {
        CoreError::UnknownLanguage { code } => EngineError::UnsupportedLanguage { code },
        other => EngineError::Core(other),
    })
}

/// Load a custom profile from a TOML file
pub fn load_profile_file<P: AsRef<Path>>(path: P) -> Result<Arc<LanguageProfile>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| {
        EngineError::IoError(format!("Failed to read profile {}: {e}", path.display()))
    })?;

    let profile = load_profile_str(&source)?;
    tracing::debug!(code = profile.code(), path = %path.display(), "loaded language profile");
    Ok(Arc::new(profile))
}
