use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

/// A `FakeSs` writes a tiny shell script named `ss.exe` into a temporary
/// directory. The script prints each argument on its own line, then
/// `SSDIR=<value>`, and exits with a chosen status.
///
/// Because this struct is intended for testing, its functions
/// panic instead of returning Result structs.
///
/// Any test that runs a `FakeSs` should be marked #[serial]. A script
/// executed while another test thread is mid-fork can fail with
/// "text file busy".
pub(crate) struct FakeSs {
    tempdir: tempfile::TempDir,
    path: PathBuf,
}

impl FakeSs {
    // Create a script that succeeds.
    pub fn new() -> FakeSs {
        FakeSs::exiting_with(0)
    }

    // Create a script that exits with `code`, writing a line to stderr
    // first when `code` is non-zero.
    pub fn exiting_with(code: i32) -> FakeSs {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join(crate::locate::SS_EXE);

        let stderr = if code == 0 {
            ""
        } else {
            "printf 'fake ss.exe failure\\n' >&2\n"
        };

        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do\n  printf '%s\\n' \"$arg\"\ndone\nprintf 'SSDIR=%s\\n' \"$SSDIR\"\n{}exit {}\n",
            stderr, code
        );

        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        FakeSs { tempdir, path }
    }

    // Path of the `ss.exe` script.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Directory holding the script.
    pub fn dir(&self) -> &Path {
        self.tempdir.path()
    }
}

// Split captured stdout into lines.
pub(crate) fn stdout_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(String::from)
        .collect()
}
