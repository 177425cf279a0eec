//! A handle on one SourceSafe repository.
//!
//! [`Repository`] pairs a repository location (the value `ss.exe` reads
//! from `SSDIR`) with the resolved path of `ss.exe` itself. Every
//! operation spawns a single `ss.exe` process, waits for it, and returns
//! its standard output unparsed.
//!
//! A handle is immutable once built. Calls sharing one handle from several
//! threads are only as safe as `std::process::Command` and `ss.exe`'s own
//! locking.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::locate;
use crate::options::Options;
use crate::{Error, Result};

mod invoke;
pub use invoke::{Invocation, REPOSITORY_VAR};

mod items;
pub use items::Items;

mod verb;
pub use verb::Verb;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Repository {
    repository_path: PathBuf,
    ss_path: Option<PathBuf>,
}

impl Repository {
    /// Attach to the repository at `repository_path`, locating `ss.exe` from
    /// `ss_path` (a file or a directory containing it), then `VSS_SS_PATH`,
    /// then the default install location.
    ///
    /// Not finding `ss.exe` is not an error here. Commands fail with
    /// [`Error::ToolNotFound`] instead.
    pub fn new<P: Into<PathBuf>>(repository_path: P, ss_path: Option<&Path>) -> Self {
        Repository {
            repository_path: repository_path.into(),
            ss_path: locate::locate(ss_path),
        }
    }

    /// Attach to the repository at `repository_path`, using `ss_path` as is.
    pub fn with_ss_path<P: Into<PathBuf>>(repository_path: P, ss_path: Option<PathBuf>) -> Self {
        Repository {
            repository_path: repository_path.into(),
            ss_path,
        }
    }

    pub fn repository_path(&self) -> &Path {
        self.repository_path.as_path()
    }

    pub fn ss_path(&self) -> Option<&Path> {
        self.ss_path.as_deref()
    }

    /// Encode a command without running it.
    pub fn invocation<V, I>(&self, verb: V, items: I, options: &Options) -> Result<Invocation>
    where
        V: AsRef<str>,
        I: Into<Items>,
    {
        Ok(Invocation {
            verb: verb.as_ref().to_string(),
            items: items.into().into_vec(),
            flags: options.to_flags()?,
        })
    }

    /// The full argument vector for a command, starting with the `ss.exe` path.
    pub fn command_line<V, I>(&self, verb: V, items: I, options: &Options) -> Result<Vec<OsString>>
    where
        V: AsRef<str>,
        I: Into<Items>,
    {
        let invocation = self.invocation(verb, items, options)?;
        let ss_path = self.ss_path.as_deref().ok_or(Error::ToolNotFound)?;
        Ok(invocation.argv(ss_path))
    }

    /// Run any `ss.exe` command and return its standard output.
    pub fn run<V, I>(&self, verb: V, items: I, options: &Options) -> Result<Vec<u8>>
    where
        V: AsRef<str>,
        I: Into<Items>,
    {
        let invocation = self.invocation(verb, items, options)?;
        let ss_path = self.ss_path.as_deref().ok_or(Error::ToolNotFound)?;
        invocation.run(ss_path, &self.repository_path)
    }

    pub fn about(&self) -> Result<Vec<u8>> {
        self.run(Verb::About, Items::none(), &Options::new())
    }

    /// Add files or folders to the current project.
    pub fn add<I: Into<Items>>(&self, files: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Add, files, options)
    }

    pub fn checkout<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Checkout, items, options)
    }

    pub fn checkin<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Checkin, items, options)
    }

    pub fn undo_checkout<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::UndoCheckout, items, options)
    }

    pub fn get<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Get, items, options)
    }

    pub fn diff<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Diff, items, options)
    }

    pub fn history<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::History, items, options)
    }

    pub fn status<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Status, items, options)
    }

    pub fn dir<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Dir, items, options)
    }

    pub fn delete<I: Into<Items>>(&self, items: I, options: &Options) -> Result<Vec<u8>> {
        self.run(Verb::Delete, items, options)
    }
}
