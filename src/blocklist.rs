//! Common-password blocklist
//!
//! A process-wide list of known-common passwords, loaded once from a newline
//! file and queried case-insensitively. The list is advisory: it never
//! changes a validity verdict, it only flags the password on the combined
//! [`Evaluation`](crate::Evaluation).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("blocklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to read blocklist file: {0}")]
    Read(#[from] std::io::Error),
    #[error("blocklist file is empty")]
    Empty,
}

/// Returns the blocklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_BLOCKLIST`
/// 2. Default path `./assets/common-passwords.txt`
pub fn blocklist_path() -> PathBuf {
    std::env::var("PWD_POLICY_BLOCKLIST")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Loads the blocklist from [`blocklist_path`]. Call once at startup.
///
/// Returns the number of entries loaded. Idempotent: a second call returns
/// the size of the already-loaded list without touching the file.
///
/// # Errors
///
/// [`BlocklistError`] if the file is missing, unreadable, or empty.
pub fn init_blocklist() -> Result<usize, BlocklistError> {
    init_blocklist_from_path(blocklist_path())
}

/// Loads the blocklist from an explicit path instead of the environment.
pub fn init_blocklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlocklistError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(ref list) = *guard {
            return Ok(list.len());
        }
    }

    let path = path.as_ref();
    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("blocklist load failed, file not found: {}", path.display());
        return Err(BlocklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("blocklist load failed, empty file: {}", path.display());
        return Err(BlocklistError::Empty);
    }

    let list: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    let count = list.len();

    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        *guard = Some(list);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("blocklist loaded: {} entries from {}", count, path.display());

    Ok(count)
}

/// Checks a password against the loaded blocklist, case-insensitively.
///
/// Returns `false` when no blocklist has been initialized.
pub fn is_common(password: &str) -> bool {
    let guard = COMMON_PASSWORDS.read().unwrap();
    guard
        .as_ref()
        .map(|list| list.contains(&password.to_lowercase()))
        .unwrap_or(false)
}

/// Clears the loaded blocklist so tests can reload from a fresh file.
#[cfg(test)]
pub fn reset_blocklist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
