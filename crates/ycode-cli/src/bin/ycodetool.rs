use clap::{Parser, Subcommand};

use ycode_cli::commands::{config_ops, convert_ops, table_ops};
use ycode_cli::trace_init::init_tracing;

use convert_ops::{Resources, YivoOptions};

#[derive(Parser)]
#[command(name = "ycodetool", about = "Yiddish / ycode / YIVO transliteration tool")]
struct Cli {
    /// Directory with the four table files (default: embedded tables)
    #[arg(long, global = true)]
    tables: Option<String>,
    /// Settings TOML file (default: embedded settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Yiddish script → ycode (reads stdin when no text is given)
    ToYcode {
        text: Option<String>,
    },
    /// ycode → Yiddish script (reads stdin when no text is given)
    ToYiddish {
        text: Option<String>,
    },
    /// YIVO romanization → ycode (reads stdin when no text is given)
    Yivo {
        text: Option<String>,
        /// Skip the non-phonetic word table
        #[arg(long)]
        phonetic_only: bool,
        /// List unknown characters on stderr after conversion
        #[arg(long)]
        report_unknown: bool,
        /// Print one JSON object per line with ycode, Yiddish and unknowns
        #[arg(long)]
        json: bool,
    },
    /// Rule table tools
    Tables {
        #[command(subcommand)]
        action: TablesAction,
    },
    /// Settings tools
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum TablesAction {
    /// Build tables from a directory and print their sizes
    Validate {
        /// Directory with the four table files
        dir: String,
    },
    /// Round-trip every line of a Yiddish file through ycode
    CheckRoundtrip {
        /// UTF-8 Yiddish text file
        file: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Parse and validate a settings TOML file
    Validate {
        /// Path to the settings file
        file: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let res = Resources {
        tables: cli.tables.as_deref(),
        settings: cli.settings.as_deref(),
    };

    match cli.command {
        Command::ToYcode { text } => convert_ops::to_ycode(text.as_deref(), res),
        Command::ToYiddish { text } => convert_ops::to_yiddish(text.as_deref(), res),
        Command::Yivo {
            text,
            phonetic_only,
            report_unknown,
            json,
        } => convert_ops::yivo(
            text.as_deref(),
            res,
            YivoOptions {
                phonetic_only,
                report_unknown,
                json,
            },
        ),
        Command::Tables { action } => match action {
            TablesAction::Validate { dir } => table_ops::validate(&dir),
            TablesAction::CheckRoundtrip { file } => {
                table_ops::check_roundtrip(&file, res.tables)
            }
        },
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
