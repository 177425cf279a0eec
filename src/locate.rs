//! Finds the SourceSafe command-line executable (`ss.exe`).
//!
//! Candidates come from an explicit override, then from the
//! semicolon-delimited `VSS_SS_PATH` environment variable. The older name
//! `VSS_PYTHON_SS_PATH` is read when `VSS_SS_PATH` is unset. When neither
//! is set, the usual installation path is tried instead. Each candidate
//! may name the executable itself or a directory that contains it.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Environment variable holding the search list for `ss.exe`.
pub const SS_PATH_VAR: &str = "VSS_SS_PATH";

/// Older name for [`SS_PATH_VAR`], still honored as a fallback.
pub const LEGACY_SS_PATH_VAR: &str = "VSS_PYTHON_SS_PATH";

/// Search list used when `VSS_SS_PATH` is not set.
pub const DEFAULT_SS_PATH: &str = r"C:\Program Files\Microsoft Visual SourceSafe\ss.exe";

/// File name probed for inside directory candidates.
pub const SS_EXE: &str = "ss.exe";

/// Locate `ss.exe`, honoring `VSS_SS_PATH` (or `VSS_PYTHON_SS_PATH`).
///
/// A search list that is not valid Unicode is read lossily, so entries
/// with unrepresentable bytes will not resolve.
///
/// Returns `None` if no candidate resolves to an existing file. That is not
/// an error in itself; [`Repository`](crate::Repository) reports it as
/// [`Error::ToolNotFound`](crate::Error::ToolNotFound) once a command is run.
pub fn locate(override_path: Option<&Path>) -> Option<PathBuf> {
    let search_list = search_list_from_env();
    locate_in(override_path, &search_list)
}

fn search_list_from_env() -> String {
    match env::var_os(SS_PATH_VAR).or_else(|| env::var_os(LEGACY_SS_PATH_VAR)) {
        Some(list) => lossy(list),
        None => DEFAULT_SS_PATH.to_string(),
    }
}

fn lossy(list: OsString) -> String {
    match list.into_string() {
        Ok(list) => list,
        Err(list) => {
            debug!(search_list = ?list, "search list is not valid Unicode");
            list.to_string_lossy().into_owned()
        }
    }
}

/// Locate `ss.exe` using an explicit search list instead of the environment.
pub fn locate_in(override_path: Option<&Path>, search_list: &str) -> Option<PathBuf> {
    let found = override_path
        .into_iter()
        .map(Path::to_path_buf)
        .chain(
            search_list
                .split(';')
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
        )
        .find_map(|candidate| resolve(&candidate));

    match &found {
        Some(path) => debug!(path = %path.display(), "located ss.exe"),
        None => debug!(search_list, "ss.exe not found"),
    }

    found
}

fn resolve(candidate: &Path) -> Option<PathBuf> {
    trace!(candidate = %candidate.display(), "probing");

    if candidate.is_file() {
        Some(candidate.to_path_buf())
    } else if candidate.is_dir() {
        let exe = candidate.join(SS_EXE);
        if exe.is_file() {
            Some(exe)
        } else {
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::fs;

    use serial_test::serial;

    use super::*;

    #[test]
    fn override_file() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("custom-ss");
        fs::write(&exe, b"").unwrap();

        assert_eq!(locate_in(Some(&exe), ""), Some(exe));
    }

    #[test]
    fn override_directory_is_probed() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join(SS_EXE);
        fs::write(&exe, b"").unwrap();

        assert_eq!(locate_in(Some(dir.path()), ""), Some(exe));
    }

    #[test]
    fn override_directory_without_exe() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(locate_in(Some(dir.path()), ""), None);
    }

    #[test]
    fn missing_override_falls_back_to_search_list() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join(SS_EXE);
        fs::write(&exe, b"").unwrap();

        let missing = dir.path().join("nope").join(SS_EXE);
        let search_list = dir.path().to_str().unwrap();

        assert_eq!(locate_in(Some(&missing), search_list), Some(exe));
    }

    #[test]
    fn search_list_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let second_exe = second.path().join(SS_EXE);
        fs::write(&second_exe, b"").unwrap();

        let search_list = format!(
            "{};;{}",
            first.path().display(),
            second.path().display()
        );
        assert_eq!(locate_in(None, &search_list), Some(second_exe.clone()));

        let first_exe = first.path().join(SS_EXE);
        fs::write(&first_exe, b"").unwrap();
        assert_eq!(locate_in(None, &search_list), Some(first_exe));
    }

    #[test]
    fn nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let search_list = missing.to_str().unwrap();

        assert_eq!(locate_in(None, search_list), None);
        assert_eq!(locate_in(None, ""), None);
    }

    // Runs `f` with both search-list variables set as given, restoring them after.
    fn with_env<T>(current: Option<&OsStr>, legacy: Option<&OsStr>, f: impl FnOnce() -> T) -> T {
        let saved: Vec<_> = [SS_PATH_VAR, LEGACY_SS_PATH_VAR]
            .iter()
            .map(|var| (*var, env::var_os(var)))
            .collect();

        for (var, value) in [(SS_PATH_VAR, current), (LEGACY_SS_PATH_VAR, legacy)].iter() {
            match value {
                Some(value) => env::set_var(var, value),
                None => env::remove_var(var),
            }
        }

        let result = f();

        for (var, old) in saved {
            match old {
                Some(old) => env::set_var(var, old),
                None => env::remove_var(var),
            }
        }

        result
    }

    #[test]
    #[serial]
    fn reads_search_list_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join(SS_EXE);
        fs::write(&exe, b"").unwrap();

        let found = with_env(Some(dir.path().as_os_str()), None, || locate(None));
        assert_eq!(found, Some(exe));
    }

    #[test]
    #[serial]
    fn legacy_variable_is_a_fallback() {
        let current = tempfile::tempdir().unwrap();
        let legacy = tempfile::tempdir().unwrap();
        let legacy_exe = legacy.path().join(SS_EXE);
        fs::write(&legacy_exe, b"").unwrap();

        let found = with_env(None, Some(legacy.path().as_os_str()), || locate(None));
        assert_eq!(found, Some(legacy_exe));

        // The current name wins even when nothing on it resolves.
        let found = with_env(
            Some(current.path().as_os_str()),
            Some(legacy.path().as_os_str()),
            || locate(None),
        );
        assert_eq!(found, None);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn unset_uses_default_path() {
        assert_eq!(with_env(None, None, search_list_from_env), DEFAULT_SS_PATH);

        // The Windows default never exists here.
        assert_eq!(with_env(None, None, || locate(None)), None);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn non_unicode_search_list_is_not_ignored() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join(SS_EXE);
        fs::write(&exe, b"").unwrap();

        let mut list = OsStr::from_bytes(b"/nonexistent/\xff;").to_os_string();
        list.push(dir.path());

        let found = with_env(Some(&list), None, || locate(None));
        assert_eq!(found, Some(exe));
    }
}
