#[cfg(feature = "trace")]
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use morse_cli::commands::{config_ops, encode_ops};
use morse_cli::die;
use morse_stream::EncoderConfig;

#[derive(Parser)]
#[command(
    name = "morsencode",
    about = "Encode text from stdin into ITU Morse code"
)]
struct Cli {
    /// Convert accented Latin letters from the ITU extensions [default: from settings, true]
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    extended: Option<bool>,
    /// Convert punctuation [default: from settings, false]
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    punctuation: Option<bool>,
    /// Do not append a newline to the output
    #[arg(short = 'n', long)]
    no_newline: bool,
    /// Path to a custom settings TOML file
    #[arg(long)]
    settings: Option<String>,
    /// Path to a custom Morse table TOML file
    #[arg(long)]
    table: Option<String>,
    /// Directory for the JSON trace log
    #[cfg(feature = "trace")]
    #[arg(long)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Export or validate the Morse code table
    Table {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate encoder settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in defaults as TOML
    Export,
    /// Check a TOML file
    Validate {
        /// TOML file to check
        file: String,
    },
}

impl Cli {
    /// Flags given on the command line override the settings file.
    fn encoder_config(&self, defaults: EncoderConfig) -> EncoderConfig {
        EncoderConfig {
            extended: self.extended.unwrap_or(defaults.extended),
            punctuation: self.punctuation.unwrap_or(defaults.punctuation),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "trace")]
    let _trace_guard = cli
        .trace_dir
        .as_deref()
        .and_then(morse_cli::trace_init::init_tracing);

    match cli.command {
        Some(Command::Table { action }) => match action {
            ConfigAction::Export => config_ops::table_export(),
            ConfigAction::Validate { file } => config_ops::table_validate(&file),
        },
        Some(Command::Settings { action }) => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
        None => {
            config_ops::load_custom(cli.settings.as_deref(), cli.table.as_deref());
            let settings = morse_core::settings::settings();
            let config = cli.encoder_config(EncoderConfig::from_settings(settings));
            let newline = settings.output.newline && !cli.no_newline;
            die!(
                encode_ops::encode_stdio(config, newline),
                "Error encoding stdin: {}"
            );
        }
    }
}
