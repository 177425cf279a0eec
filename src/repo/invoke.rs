use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::{Error, Result};

/// Environment variable through which `ss.exe` learns the repository location.
pub const REPOSITORY_VAR: &str = "SSDIR";

/// One fully encoded `ss.exe` command, ready to run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invocation {
    pub verb: String,
    pub items: Vec<OsString>,
    pub flags: Vec<String>,
}

impl Invocation {
    /// The argument vector: `[ss_path, verb, items.., flags..]`.
    pub fn argv(&self, ss_path: &Path) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(2 + self.items.len() + self.flags.len());
        argv.push(ss_path.as_os_str().to_os_string());
        argv.push(OsString::from(&self.verb));
        argv.extend(self.items.iter().cloned());
        argv.extend(self.flags.iter().map(OsString::from));
        argv
    }

    /// Run `ss.exe` against `repository_path` and return its standard output.
    ///
    /// `SSDIR` is set on the child process only. The child gets an empty
    /// stdin, so a prompt from `ss.exe` sees end-of-file rather than waiting.
    pub fn run(&self, ss_path: &Path, repository_path: &Path) -> Result<Vec<u8>> {
        let argv = self.argv(ss_path);
        debug!(argv = ?argv, ssdir = %repository_path.display(), "running ss.exe");

        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .env(REPOSITORY_VAR, repository_path)
            .output()?;

        debug!(status = %output.status, "ss.exe exited");

        if !output.status.success() {
            return Err(Error::CommandFailed {
                code: output.status.code(),
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        Ok(output.stdout)
    }
}
