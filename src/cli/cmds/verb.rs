use std::io::{self, Write};

use super::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use rsvss::{Items, OptionValue, Options, Repository, Verb};

pub(crate) fn subcommand<'a, 'b>(name: &str, verb: Verb, about: &'b str) -> clap::App<'a, 'b> {
    let subcommand = SubCommand::with_name(name).about(about).arg(
        Arg::with_name("option")
            .short("o")
            .long("option")
            .value_name("name[=value]")
            .multiple(true)
            .number_of_values(1)
            .help("Option to pass, e.g. recursive or get_folder=C:\\work (repeatable)"),
    );

    if verb == Verb::About {
        subcommand
    } else {
        subcommand.arg(
            Arg::with_name("items")
                .multiple(true)
                .help("Files, folders or $/project paths"),
        )
    }
}

pub(crate) fn run(app: &mut App, repo: &Repository, verb: Verb, args: &ArgMatches) -> Result<()> {
    let items = match args.values_of_os("items") {
        Some(values) => Items::from(values.collect::<Vec<_>>()),
        None => Items::none(),
    };
    let options = options_from_args(args);

    match repo.run(verb, items, &options) {
        Ok(stdout) => {
            app.write_all(&stdout)?;
            Ok(())
        }
        Err(err) => {
            if let rsvss::Error::CommandFailed { stdout, stderr, .. } = &err {
                app.write_all(stdout)?;
                io::stderr().write_all(stderr)?;
            }
            Err(err.into())
        }
    }
}

// `name` alone means true, `name=true` and `name=false` are booleans, any
// other `name=value` is a string, and a name given more than once with
// string values collects them into a list.
fn options_from_args(args: &ArgMatches) -> Options {
    let mut options = Options::new();

    for spec in args.values_of("option").into_iter().flatten() {
        match spec.split_once('=') {
            None => options.set(spec, true),
            Some((name, "true")) => options.set(name, true),
            Some((name, "false")) => options.set(name, false),
            Some((name, value)) => match options.get(name).cloned() {
                Some(OptionValue::Str(first)) => {
                    options.set(name, vec![first, value.to_string()])
                }
                Some(OptionValue::List(mut values)) => {
                    values.push(value.to_string());
                    options.set(name, values)
                }
                _ => options.set(name, value),
            },
        }
    }

    options
}
