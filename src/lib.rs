//! A thin client for the Microsoft Visual SourceSafe command-line tool, `ss.exe`.
//!
//! rsvss does not talk to a SourceSafe database itself. Each operation
//! becomes a single `ss.exe` invocation:
//!
//! * [`locate`] finds the executable.
//! * [`options`] turns named, typed options into `ss.exe` flags.
//! * [`Repository`] builds the argument vector, points `SSDIR` at the
//!   repository for the child process, runs it, and returns the captured
//!   standard output unparsed.
//!
//! ```no_run
//! use rsvss::{Options, Repository};
//!
//! let repo = Repository::new(r"\\server\vss", None);
//! let options = Options::new().with("recursive", true).with("output", "error");
//! let stdout = repo.checkout("$/Project", &options)?;
//! # Ok::<(), rsvss::Error>(())
//! ```

mod error;
pub use error::{Error, Result};

pub mod functions;
pub mod locate;
pub mod options;
pub use options::{OptionValue, Options};

pub mod repo;
pub use repo::{Items, Repository, Verb};

#[cfg(all(test, unix))]
mod test_support;
