use std::fs;

use crate::die;

pub fn table_export() {
    print!("{}", morse_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let codes = die!(morse_core::table::parse_table_toml(&content), "Error: {}");
    println!("OK: {} codes", codes.len());
}

pub fn settings_export() {
    print!("{}", morse_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        morse_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: encoder.extended={}, encoder.punctuation={}, output.newline={}",
        s.encoder.extended, s.encoder.punctuation, s.output.newline
    );
}

/// Install custom settings and table files before anything reads them.
pub fn load_custom(settings_file: Option<&str>, table_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            morse_core::settings::init_custom(content),
            "Error in {file}: {}"
        );
    }
    if let Some(file) = table_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            morse_core::table::MorseTable::init_custom(content),
            "Error in {file}: {}"
        );
    }
}
