//! One-call helpers for working a whole SourceSafe project against a local folder.
//!
//! Each helper attaches to `repository_path`, then runs its command
//! recursively on `project_path` with `local_path` as the working folder.
//! `ss.exe` is asked to report errors only.
//!
//! `local_path` must be valid Unicode, since it is spliced into a flag.

use std::path::Path;

use crate::options::Options;
use crate::{Error, Repository, Result};

fn project_options(local_path: &Path) -> Result<Options> {
    let local_path = local_path.to_str().ok_or_else(|| Error::InvalidOptionValue {
        option: "get_folder".to_string(),
        value: local_path.to_string_lossy().into_owned(),
    })?;

    Ok(Options::new()
        .with("recursive", true)
        .with("get_folder", local_path)
        .with("output", "error"))
}

/// Check out a project into `local_path`. Returns the standard output.
pub fn checkout(
    repository_path: &Path,
    project_path: &str,
    local_path: &Path,
    ss_path: Option<&Path>,
) -> Result<Vec<u8>> {
    let options = project_options(local_path)?;
    Repository::new(repository_path, ss_path).checkout(project_path, &options)
}

/// Undo a checkout of a project from `local_path`. Returns the standard output.
pub fn undo_checkout(
    repository_path: &Path,
    project_path: &str,
    local_path: &Path,
    ss_path: Option<&Path>,
) -> Result<Vec<u8>> {
    let options = project_options(local_path)?;
    Repository::new(repository_path, ss_path).undo_checkout(project_path, &options)
}

/// Check in a project from `local_path` without a comment. Returns the standard output.
pub fn checkin(
    repository_path: &Path,
    project_path: &str,
    local_path: &Path,
    ss_path: Option<&Path>,
) -> Result<Vec<u8>> {
    let options = project_options(local_path)?.with("comment_no_text", true);
    Repository::new(repository_path, ss_path).checkin(project_path, &options)
}
