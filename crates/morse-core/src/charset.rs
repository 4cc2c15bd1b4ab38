//! Character classification for Morse conversion.
//!
//! `ConvertPolicy` decides which characters an encoder converts. Everything
//! else is dropped silently.

use std::collections::BTreeSet;
use std::sync::OnceLock;

const BASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PUNCTUATION: &str = ".,?'!/()&:;=+-_\"$@";
const EXTENDED: &str = "ÀÅÄÆĄĆÇĈĤĐÉĘĴŁÈŃÑÓÖØŚŜŠÜŬŹŽČ";

/// The three groups a convertible character can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letters A-Z and digits 0-9, always enabled.
    Base,
    Punctuation,
    /// Accented Latin letters from the ITU extensions.
    Extended,
}

impl CharClass {
    pub const ALL: [CharClass; 3] = [CharClass::Base, CharClass::Punctuation, CharClass::Extended];

    /// Uppercase members of this class, in table order.
    pub fn members(self) -> impl Iterator<Item = char> {
        match self {
            CharClass::Base => BASE.chars(),
            CharClass::Punctuation => PUNCTUATION.chars(),
            CharClass::Extended => EXTENDED.chars(),
        }
    }
}

/// Convert a character to its simple uppercase equivalent.
///
/// Characters whose uppercase form expands to several characters (e.g. `ß`)
/// are returned unchanged.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Decides which characters are eligible for conversion.
///
/// The flags are fixed at construction. The eligible set is built on the
/// first `is_convertible` call and reused for the life of the policy.
#[derive(Debug, Default)]
pub struct ConvertPolicy {
    punctuation: bool,
    extended: bool,
    set: OnceLock<BTreeSet<char>>,
}

impl ConvertPolicy {
    pub fn new(punctuation: bool, extended: bool) -> Self {
        Self {
            punctuation,
            extended,
            set: OnceLock::new(),
        }
    }

    pub fn punctuation(&self) -> bool {
        self.punctuation
    }

    pub fn extended(&self) -> bool {
        self.extended
    }

    /// Whether `c` (in either case) can be converted under this policy.
    pub fn is_convertible(&self, c: char) -> bool {
        self.set().contains(&simple_upper(c))
    }

    fn set(&self) -> &BTreeSet<char> {
        self.set.get_or_init(|| {
            let mut set: BTreeSet<char> = CharClass::Base.members().collect();
            if self.punctuation {
                set.extend(CharClass::Punctuation.members());
            }
            if self.extended {
                set.extend(CharClass::Extended.members());
            }
            set
        })
    }
}
