//! Converts named, typed options into `ss.exe` command-line flags.
//!
//! Every option name is looked up in an [`OptionTable`]; the table entry
//! decides which value shapes are accepted and which flag tokens come out.
//! Values are never escaped. Each flag becomes one argument of the child
//! process exactly as written.

use std::fmt::{self, Display, Formatter};

use crate::{Error, Result};

mod table;
pub use table::{OptionSpec, OptionTable, PARAM};

/// The value given for one option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => write!(f, "{}", s),
            OptionValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(items: Vec<String>) -> Self {
        OptionValue::List(items)
    }
}

impl From<Vec<&str>> for OptionValue {
    fn from(items: Vec<&str>) -> Self {
        OptionValue::List(items.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for OptionValue {
    fn from(items: &[&str]) -> Self {
        OptionValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// An insertion-ordered set of named options.
///
/// Setting a name that is already present replaces its value in place, so
/// each name appears at most once and keeps its original position.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style form of [`Options::set`].
    pub fn with<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<OptionValue>,
    {
        self.set(name, value);
        self
    }

    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<OptionValue>,
    {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Encode against the built-in `ss.exe` table.
    pub fn to_flags(&self) -> Result<Vec<String>> {
        encode(OptionTable::builtin(), self)
    }
}

/// Encode `options` into flag tokens, in insertion order.
///
/// Fails with [`Error::UnknownOption`] for names missing from `table` and
/// with [`Error::InvalidOptionValue`] for values the entry does not accept.
pub fn encode(table: &OptionTable, options: &Options) -> Result<Vec<String>> {
    let mut flags = Vec::new();

    for (name, value) in options.iter() {
        let spec = table
            .get(name)
            .ok_or_else(|| Error::UnknownOption(name.to_string()))?;

        encode_one(name, spec, value, &mut flags)?;
    }

    Ok(flags)
}

fn encode_one(
    name: &str,
    spec: &OptionSpec,
    value: &OptionValue,
    flags: &mut Vec<String>,
) -> Result<()> {
    match (spec, value) {
        (OptionSpec::Switch(flag), OptionValue::Bool(b)) => {
            if *b {
                flags.push(flag.to_string());
            }
        }

        (OptionSpec::Toggle { on, off }, OptionValue::Bool(b)) => {
            flags.push(if *b { on } else { off }.to_string());
        }

        (OptionSpec::Template(template), OptionValue::Str(s)) => {
            flags.push(template.replace(PARAM, s));
        }

        (OptionSpec::Template(template), OptionValue::Bool(b)) => {
            if *b {
                flags.push(template.replace(PARAM, ""));
            }
        }

        (OptionSpec::Choice(_), OptionValue::Str(s))
        | (OptionSpec::Repeatable(_), OptionValue::Str(s)) => {
            let flag = spec.flag_for(s).ok_or_else(|| invalid(name, s))?;
            flags.push(flag.to_string());
        }

        (OptionSpec::Repeatable(_), OptionValue::List(items)) => {
            for item in items {
                let flag = spec.flag_for(item).ok_or_else(|| invalid(name, item))?;
                flags.push(flag.to_string());
            }
        }

        (_, value) => return Err(invalid(name, value)),
    }

    Ok(())
}

fn invalid(option: &str, value: &dyn Display) -> Error {
    Error::InvalidOptionValue {
        option: option.to_string(),
        value: value.to_string(),
    }
}
