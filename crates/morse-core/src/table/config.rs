use std::collections::BTreeMap;

use serde::Deserialize;

use crate::charset::{simple_upper, CharClass};

#[derive(Deserialize)]
struct TableConfig {
    codes: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[codes] table is empty")]
    Empty,
    #[error("key must be a single character: {0:?}")]
    InvalidKey(String),
    #[error("key must be uppercase: {0:?}")]
    LowercaseKey(char),
    #[error("empty code for key: {0:?}")]
    EmptyCode(char),
    #[error("code for {key:?} must contain only '.' and '-': {code:?}")]
    InvalidCode { key: char, code: String },
    #[error("no code for {0:?}")]
    Missing(char),
    #[error("Morse table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<char, code>`.
///
/// Every character of every [`CharClass`] must be present, so the table
/// covers any policy configuration.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<char, String>, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.codes.is_empty() {
        return Err(TableError::Empty);
    }

    let mut codes = BTreeMap::new();
    for (key, code) in config.codes {
        let mut chars = key.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(TableError::InvalidKey(key)),
        };
        if simple_upper(c) != c {
            return Err(TableError::LowercaseKey(c));
        }
        if code.is_empty() {
            return Err(TableError::EmptyCode(c));
        }
        if !code.chars().all(|s| s == '.' || s == '-') {
            return Err(TableError::InvalidCode { key: c, code });
        }
        codes.insert(c, code);
    }

    for class in CharClass::ALL {
        if let Some(missing) = class.members().find(|c| !codes.contains_key(c)) {
            return Err(TableError::Missing(missing));
        }
    }

    Ok(codes)
}
