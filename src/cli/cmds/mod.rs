use std::path::Path;

use crate::{App, Result};

use clap::{ArgMatches, Error, ErrorKind};
use rsvss::{Repository, Verb};

mod verb;

// Subcommand name, ss.exe verb, help text.
const VERBS: &[(&str, Verb, &str)] = &[
    ("about", Verb::About, "Show ss.exe version information"),
    ("add", Verb::Add, "Add files or folders to the current project"),
    ("checkout", Verb::Checkout, "Check out files or projects"),
    ("checkin", Verb::Checkin, "Check in files or projects"),
    ("undo-checkout", Verb::UndoCheckout, "Undo a checkout"),
    ("get", Verb::Get, "Get the latest (or a given) version"),
    ("diff", Verb::Diff, "Show differences between versions"),
    ("history", Verb::History, "Show the history of files or projects"),
    ("status", Verb::Status, "Show checkout status"),
    ("dir", Verb::Dir, "List the contents of a project"),
    ("delete", Verb::Delete, "Delete files or projects"),
];

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    VERBS.iter().fold(app, |app, (name, verb, about)| {
        app.subcommand(verb::subcommand(*name, *verb, *about))
    })
}

pub(crate) fn dispatch(app: &mut App) -> Result<()> {
    let matches = app.arg_matches.clone();
    // ^^ Need an independent copy of matches so we can still pass
    // the App struct through to the subcommand.

    match matches.subcommand() {
        (name, Some(m)) => match VERBS.iter().find(|(n, _, _)| *n == name) {
            Some((_, verb, _)) => {
                let repo = repository(&matches)?;
                verb::run(app, &repo, *verb, m)
            }
            None => unreachable!(),
        },
        _ => unreachable!(),
        // unreachable: Should have exited out with appropriate help or
        // error message if no subcommand was given.
    }
}

fn repository(matches: &ArgMatches) -> Result<Repository> {
    let repo_path = match matches.value_of_os("repo") {
        Some(path) => path,
        None => {
            return Err(Box::new(Error::with_description(
                "no repository given; pass --repo or set SSDIR",
                ErrorKind::MissingRequiredArgument,
            )))
        }
    };

    let ss_path = matches.value_of_os("ss-path").map(Path::new);

    Ok(Repository::new(repo_path, ss_path))
}
