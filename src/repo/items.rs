use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Positional arguments (files, folders or project paths) for one command.
///
/// A single item and a list of items both convert into `Items`, so every
/// verb method accepts either form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Items(Vec<OsString>);

impl Items {
    pub fn none() -> Self {
        Items(Vec::new())
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<OsString> {
        self.0
    }
}

impl From<&str> for Items {
    fn from(item: &str) -> Self {
        Items(vec![item.into()])
    }
}

impl From<String> for Items {
    fn from(item: String) -> Self {
        Items(vec![item.into()])
    }
}

impl From<&Path> for Items {
    fn from(item: &Path) -> Self {
        Items(vec![item.into()])
    }
}

impl From<PathBuf> for Items {
    fn from(item: PathBuf) -> Self {
        Items(vec![item.into()])
    }
}

impl<T: AsRef<OsStr>> From<Vec<T>> for Items {
    fn from(items: Vec<T>) -> Self {
        Items(items.iter().map(|i| i.as_ref().to_os_string()).collect())
    }
}

impl<T: AsRef<OsStr>> From<&[T]> for Items {
    fn from(items: &[T]) -> Self {
        Items(items.iter().map(|i| i.as_ref().to_os_string()).collect())
    }
}

impl<T: AsRef<OsStr>, const N: usize> From<[T; N]> for Items {
    fn from(items: [T; N]) -> Self {
        Items(items.iter().map(|i| i.as_ref().to_os_string()).collect())
    }
}
