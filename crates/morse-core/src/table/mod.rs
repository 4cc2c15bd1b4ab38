//! ITU Morse code lookup table.
//!
//! The default table is embedded TOML. A replacement can be installed with
//! [`MorseTable::init_custom`] before the table is first used.

mod config;

use std::collections::BTreeMap;
use std::sync::OnceLock;

pub use config::{parse_table_toml, TableError};

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}

pub struct MorseTable {
    codes: BTreeMap<char, String>,
}

impl MorseTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MorseTable {
        static INSTANCE: OnceLock<MorseTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TABLE_TOML);
            let codes = parse_table_toml(toml_str).expect("Morse table TOML must be valid");
            MorseTable { codes }
        })
    }

    /// Build a table from an already validated mapping.
    pub fn from_codes(codes: BTreeMap<char, String>) -> Self {
        MorseTable { codes }
    }

    /// Morse code for an uppercase character, if the table has one.
    pub fn code_for(&self, c: char) -> Option<&str> {
        self.codes.get(&c).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
