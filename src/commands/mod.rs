//! Subcommand implementations

pub mod format;
pub mod show;

use std::path::Path;

use crate::error::{OrreryError, Result};
use crate::system::{builtin_sol, load_system, BodyId, LoadedSystem, StarSystem};

/// Load the system file, or the built-in Sol system when no path is given.
pub fn load(path: Option<&Path>) -> Result<LoadedSystem> {
    match path {
        Some(path) => load_system(path),
        None => {
            tracing::debug!("No system file given, using built-in Sol");
            builtin_sol()
        }
    }
}

/// Resolve a body key given on the command line.
pub fn resolve_key(system: &StarSystem, key: &str) -> Result<BodyId> {
    system
        .find(key)
        .map(|body| body.id)
        .ok_or_else(|| OrreryError::UnknownBody(key.to_string()))
}
