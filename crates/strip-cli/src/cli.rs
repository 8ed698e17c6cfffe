use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "strip",
    about = "Adding strip calculator with subtotal and total checkpoints",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty strip file
    New(NewArgs),
    /// Show every line with its running total
    Show(FileArgs),
    /// Append records (`+5`, `*2`, `#`, `=`) to the end of the strip
    Add(AddArgs),
    /// Insert a record before the given position
    Insert(PositionArgs),
    /// Replace the record at the given position
    Replace(PositionArgs),
    /// Delete the record at the given position
    Delete(DeleteArgs),
    /// Remove every record
    Clear(FileArgs),
    /// Print the final accumulated value
    Total(FileArgs),
    /// Lay the strip out for printing
    Print(FileArgs),
    /// Validate a strip file
    Check(FileArgs),
}

#[derive(Args)]
pub struct FileArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct NewArgs {
    pub file: PathBuf,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddArgs {
    pub file: PathBuf,
    #[arg(required = true, allow_hyphen_values = true)]
    pub records: Vec<String>,
}

#[derive(Args)]
pub struct PositionArgs {
    pub file: PathBuf,
    pub index: usize,
    #[arg(allow_hyphen_values = true)]
    pub record: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    pub file: PathBuf,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_new() {
        let cli = Cli::try_parse_from(["strip", "new", "tape.strip"]).unwrap();
        if let Command::New(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("tape.strip"));
            assert!(!args.force);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_add_many() {
        let cli = Cli::try_parse_from(["strip", "add", "t", "+5", "*2", "#"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.records, vec!["+5", "*2", "#"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_add_hyphen_record() {
        let cli = Cli::try_parse_from(["strip", "add", "t", "-3"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.records, vec!["-3"]);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_add_requires_record() {
        assert!(Cli::try_parse_from(["strip", "add", "t"]).is_err());
    }

    #[test]
    fn parse_insert() {
        let cli = Cli::try_parse_from(["strip", "insert", "t", "2", "/4"]).unwrap();
        if let Command::Insert(args) = cli.command {
            assert_eq!(args.index, 2);
            assert_eq!(args.record, "/4");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_replace_hyphen_record() {
        let cli = Cli::try_parse_from(["strip", "replace", "t", "0", "-1.5"]).unwrap();
        if let Command::Replace(args) = cli.command {
            assert_eq!(args.record, "-1.5");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_delete_rejects_negative_index() {
        assert!(Cli::try_parse_from(["strip", "delete", "t", "-1"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["strip", "--verbose", "show", "t"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["strip", "--format", "json", "total", "t"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_config() {
        let cli = Cli::try_parse_from(["strip", "print", "t", "--config", "strip.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("strip.toml")));
    }
}
