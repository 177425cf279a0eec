use std::fmt::{self, Display, Formatter};

/// An `ss.exe` command name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verb {
    About,
    Add,
    Checkout,
    Checkin,
    UndoCheckout,
    Get,
    Diff,
    History,
    Status,
    Dir,
    Delete,
}

impl Verb {
    /// The command name as `ss.exe` expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::About => "About",
            Verb::Add => "Add",
            Verb::Checkout => "Checkout",
            Verb::Checkin => "Checkin",
            Verb::UndoCheckout => "Undocheckout",
            Verb::Get => "Get",
            Verb::Diff => "Diff",
            Verb::History => "History",
            Verb::Status => "Status",
            Verb::Dir => "Dir",
            Verb::Delete => "Delete",
        }
    }
}

impl AsRef<str> for Verb {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Verb {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
