use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

// A fake `ss.exe`: a shell script that prints each argument on its own
// line, then `SSDIR=<value>`, and exits with the requested status.
//
// Any test that runs one should be marked #[serial].
pub struct FakeSs {
    tempdir: tempfile::TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl FakeSs {
    pub fn new() -> FakeSs {
        FakeSs::exiting_with(0)
    }

    pub fn exiting_with(code: i32) -> FakeSs {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("ss.exe");

        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do\n  printf '%s\\n' \"$arg\"\ndone\nprintf 'SSDIR=%s\\n' \"$SSDIR\"\nexit {}\n",
            code
        );

        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        FakeSs { tempdir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.tempdir.path()
    }
}

#[allow(dead_code)]
pub fn lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(String::from)
        .collect()
}
