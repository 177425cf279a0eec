use std::borrow::Cow;

use crate::{Error, Result};

/// Placeholder substituted by [`OptionSpec::Template`] values.
pub const PARAM: &str = "{param}";

/// Describes how one named option is written on the `ss.exe` command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionSpec {
    /// A flag emitted for `true` and omitted for `false`.
    Switch(&'static str),

    /// A pair of flags selected by a boolean value.
    Toggle { on: &'static str, off: &'static str },

    /// A flag containing [`PARAM`], replaced by a string value.
    ///
    /// A `true` value emits the flag with the placeholder removed.
    Template(&'static str),

    /// One value out of a fixed set, each mapped to a literal flag.
    Choice(&'static [(&'static str, &'static str)]),

    /// Like `Choice`, but a list of values may be given.
    Repeatable(&'static [(&'static str, &'static str)]),
}

impl OptionSpec {
    /// Look up the flag for an enumerated value.
    ///
    /// Returns `None` for values outside the set and for non-enumerated specs.
    pub fn flag_for(&self, key: &str) -> Option<&'static str> {
        match self {
            OptionSpec::Choice(choices) | OptionSpec::Repeatable(choices) => choices
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, flag)| *flag),
            _ => None,
        }
    }

    fn check(&self, name: &str) -> Result<()> {
        match self {
            OptionSpec::Template(template) if !template.contains(PARAM) => Err(
                Error::InvalidOptionTable(format!("template for {:?} lacks {}", name, PARAM)),
            ),
            OptionSpec::Choice(choices) | OptionSpec::Repeatable(choices) => {
                if choices.is_empty() {
                    return Err(Error::InvalidOptionTable(format!(
                        "{:?} has no permitted values",
                        name
                    )));
                }
                for (i, (key, _)) in choices.iter().enumerate() {
                    if choices[..i].iter().any(|(k, _)| k == key) {
                        return Err(Error::InvalidOptionTable(format!(
                            "{:?} lists value {:?} twice",
                            name, key
                        )));
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// A validated mapping from option name to [`OptionSpec`].
#[derive(Clone, Debug)]
pub struct OptionTable {
    entries: Cow<'static, [(&'static str, OptionSpec)]>,
}

impl OptionTable {
    /// Build a table, rejecting duplicate names, templates without a
    /// placeholder, and enumerated options with empty or duplicated values.
    pub fn new(entries: Vec<(&'static str, OptionSpec)>) -> Result<Self> {
        validate(&entries)?;
        Ok(OptionTable {
            entries: Cow::Owned(entries),
        })
    }

    /// The option table for `ss.exe`.
    pub fn builtin() -> &'static OptionTable {
        &BUILTIN
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, spec)| spec)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

fn validate(entries: &[(&'static str, OptionSpec)]) -> Result<()> {
    for (i, (name, spec)) in entries.iter().enumerate() {
        if entries[..i].iter().any(|(n, _)| n == name) {
            return Err(Error::InvalidOptionTable(format!(
                "option {:?} defined twice",
                name
            )));
        }
        spec.check(name)?;
    }
    Ok(())
}

// Literal transcription of ss.exe flag syntax. Do not reinterpret.
static BUILTIN: OptionTable = OptionTable {
    entries: Cow::Borrowed(&[
        (
            "format",
            OptionSpec::Choice(&[("binary", "-B"), ("text", "-B-")]),
        ),
        ("base_version_number", OptionSpec::Template("-B{param}")),
        ("base_version_date", OptionSpec::Template("-B{param}")),
        ("base_version_label", OptionSpec::Template("-Bl{param}")),
        (
            "recursive",
            OptionSpec::Toggle {
                on: "-R",
                off: "-R-",
            },
        ),
        ("get_folder", OptionSpec::Template("-GL{param}")),
        (
            "get",
            OptionSpec::Repeatable(&[
                ("no_local_copy", "-G-"),
                ("ask_writable", "-GWA"),
                ("replace_writable", "-GWR"),
                ("skip_writable", "-GWS"),
                ("current_time", "-GTC"),
                ("modified_time", "-GTM"),
                ("update_time", "-GTU"),
                ("checksum_compare", "-GCK"),
                ("contents_compare", "-GCC"),
                ("time_compare", "-GCD"),
            ]),
        ),
        ("output", OptionSpec::Choice(&[("error", "-O-")])),
        ("output_file", OptionSpec::Template("-O&{param}")),
        ("output_append", OptionSpec::Template("-O@{param}")),
        ("comment", OptionSpec::Template("-C{param}")),
        ("comment_no_text", OptionSpec::Switch("-C-")),
        (
            "keep_checked_out",
            OptionSpec::Toggle {
                on: "-K",
                off: "-K-",
            },
        ),
        (
            "answer",
            OptionSpec::Choice(&[("default", "-I-"), ("yes", "-I-Y"), ("no", "-I-N")]),
        ),
        ("version", OptionSpec::Template("-V{param}")),
        ("version_label", OptionSpec::Template("-VL{param}")),
        ("version_date", OptionSpec::Template("-Vd{param}")),
        ("user", OptionSpec::Template("-Y{param}")),
        ("writable", OptionSpec::Switch("-W")),
    ]),
};
