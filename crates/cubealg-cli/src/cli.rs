use crate::utils::parser;
use clap::{Args, Parser, Subcommand};
use cubealg::core::models::color::Sticker;
use cubealg::core::models::ids::AlgorithmId;
use cubealg::core::models::record::{AlgorithmKind, SIDE_ROW_LEN, Side, TOP_LAYER_LEN};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "cubealg - keep a personal collection of Rubik's-cube algorithms with their formulas and sticker patterns.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to the algorithm data file (defaults to ./cube_algorithms.json)
    #[arg(short = 'f', long = "file", global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum number of stored algorithms; 0 disables the limit
    #[arg(long, global = true, value_name = "INT")]
    pub max_records: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List algorithms, optionally filtered by a search query.
    List(ListArgs),
    /// Show one algorithm including its sticker pattern.
    Show {
        /// Id of the algorithm to show.
        id: AlgorithmId,
    },
    /// Record a new algorithm.
    Add(AddArgs),
    /// Change an existing algorithm.
    Edit(EditArgs),
    /// Delete an algorithm.
    Delete(DeleteArgs),
    /// Inspect the configuration.
    Config(ConfigArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive on names; case-sensitive on type and formula.
    pub query: Option<String>,
}

/// Form fields shared by `add` and `edit`. Unset fields keep their current value.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Algorithm name (e.g. "T-Perm", "Antisune").
    #[arg(short, long, value_name = "TEXT")]
    pub name: Option<String>,

    /// Algorithm type: OLL, PLL, F2L, ZBLL, COLL or Other.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub kind: Option<AlgorithmKind>,

    /// Move-notation formula (e.g. "R U R' U R U2 R'").
    #[arg(short = 'F', long, value_name = "TEXT", allow_hyphen_values = true)]
    pub formula: Option<String>,

    // --- Sticker pattern ---
    /// Top face as nine symbols from YOBRGWX, row by row (e.g. XYXYYYXYX).
    #[arg(long, value_name = "STICKERS", value_parser = parser::parse_top_layer)]
    pub top: Option<[Sticker; TOP_LAYER_LEN]>,

    /// Front row as three symbols from YOBRGWX.
    #[arg(long, value_name = "STICKERS", value_parser = parser::parse_side_row)]
    pub front: Option<[Sticker; SIDE_ROW_LEN]>,

    /// Right row as three symbols from YOBRGWX.
    #[arg(long, value_name = "STICKERS", value_parser = parser::parse_side_row)]
    pub right: Option<[Sticker; SIDE_ROW_LEN]>,

    /// Back row as three symbols from YOBRGWX.
    #[arg(long, value_name = "STICKERS", value_parser = parser::parse_side_row)]
    pub back: Option<[Sticker; SIDE_ROW_LEN]>,

    /// Left row as three symbols from YOBRGWX.
    #[arg(long, value_name = "STICKERS", value_parser = parser::parse_side_row)]
    pub left: Option<[Sticker; SIDE_ROW_LEN]>,

    /// Reset all stickers (yellow top, neutral sides) before applying other changes.
    #[arg(long)]
    pub reset_colors: bool,

    /// Click a top sticker (0-8) to advance its color. Can be repeated.
    #[arg(long = "click-top", value_name = "INDEX")]
    pub click_top: Vec<usize>,

    /// Click a side sticker to advance its color. Can be repeated.
    /// Example: --click-side back:1
    #[arg(long = "click-side", value_name = "SIDE:INDEX", value_parser = parser::parse_side_click)]
    pub click_side: Vec<(Side, usize)>,
}

/// Arguments for the `add` subcommand.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

/// Arguments for the `edit` subcommand.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the algorithm to edit.
    pub id: AlgorithmId,

    #[command(flatten)]
    pub form: FormArgs,
}

/// Arguments for the `delete` subcommand.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the algorithm to delete.
    pub id: AlgorithmId,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the path of the configuration file in use.
    Path,
    /// Show the effective settings after merging flags, file and defaults.
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_accepts_every_form_field() {
        let cli = Cli::try_parse_from([
            "cubealg",
            "add",
            "--name",
            "Sune",
            "--type",
            "OLL",
            "--formula",
            "R U R' U R U2 R'",
            "--top",
            "xyxyyyxyx",
            "--front",
            "YXX",
            "--click-top",
            "0",
            "--click-top",
            "8",
            "--click-side",
            "left:2",
        ])
        .unwrap();
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.form.name.as_deref(), Some("Sune"));
        assert_eq!(args.form.kind, Some(AlgorithmKind::Oll));
        assert_eq!(args.form.top.unwrap()[1], Sticker::Yellow);
        assert_eq!(args.form.click_top, [0, 8]);
        assert_eq!(args.form.click_side, [(Side::Left, 2)]);
    }

    #[test]
    fn edit_and_delete_take_an_id() {
        let cli = Cli::try_parse_from(["cubealg", "edit", "42", "-F", "U R U' R'"]).unwrap();
        assert!(matches!(cli.command, Commands::Edit(EditArgs { id: AlgorithmId(42), .. })));

        let cli = Cli::try_parse_from(["cubealg", "delete", "7", "--yes"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Delete(DeleteArgs {
                id: AlgorithmId(7),
                yes: true
            })
        ));
    }

    #[test]
    fn malformed_sticker_input_is_rejected() {
        assert!(Cli::try_parse_from(["cubealg", "add", "--top", "YYY"]).is_err());
        assert!(Cli::try_parse_from(["cubealg", "add", "--front", "YQY"]).is_err());
        assert!(Cli::try_parse_from(["cubealg", "add", "--click-side", "top:1"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["cubealg", "-q", "-v", "list"]).is_err());
    }
}
