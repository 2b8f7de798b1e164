//! CLI argument definitions.

use crate::cli::validators::{parse_threshold, parse_train_size};
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Species image dataset curation and train/val manifest building.
#[derive(Debug, Parser)]
#[command(name = "speciset")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Dataset directory to build manifests from (class/species/image tree).
    pub data_dir: Option<PathBuf>,

    /// Common options for manifest generation.
    #[command(flatten)]
    pub manifest: ManifestArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Cross-reference species lists between two datasets.
    Crossref {
        /// First species map JSON file (class -> species list).
        first: PathBuf,
        /// Second species map JSON file.
        second: PathBuf,
        /// Output directory for the matched map and report (default: current directory).
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Classes to compare (comma-separated; default: all).
        #[arg(long, value_delimiter = ',')]
        classes: Vec<String>,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for manifest generation.
#[derive(Debug, Args)]
pub struct ManifestArgs {
    /// Output directory for manifests and reports.
    #[arg(short, long, env = "SPECISET_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Species count JSON file (class -> species -> image count).
    #[arg(long, env = "SPECISET_COUNTS")]
    pub counts: Option<PathBuf>,

    /// Target classes (comma-separated; default: every class directory).
    #[arg(long, value_delimiter = ',', env = "SPECISET_CLASSES")]
    pub classes: Option<Vec<String>>,

    /// Cumulative-share threshold for dominant species; 1.0 keeps all species.
    #[arg(short = 't', long, value_parser = parse_threshold, env = "SPECISET_THRESHOLD")]
    pub threshold: Option<f64>,

    /// Fraction of images assigned to the training subset.
    #[arg(long, value_parser = parse_train_size, env = "SPECISET_TRAIN_SIZE")]
    pub train_size: Option<f64>,

    /// Seed for the deterministic train/val split.
    #[arg(long, env = "SPECISET_RANDOM_STATE")]
    pub random_state: Option<u64>,

    /// Manifest output formats (comma-separated: csv,parquet).
    #[arg(short, long, value_delimiter = ',', env = "SPECISET_FORMAT")]
    pub format: Option<Vec<OutputFormat>>,

    /// Write per-species path lists under species_lists/.
    #[arg(long)]
    pub per_species_list: bool,

    /// Compute the manifest set without writing any files.
    #[arg(long)]
    pub no_export: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_data_dir() {
        let cli = Cli::try_parse_from(["speciset", "dataset"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, Some(PathBuf::from("dataset")));
    }

    #[test]
    fn test_parse_manifest_options() {
        let cli = Cli::try_parse_from([
            "speciset",
            "dataset",
            "-o",
            "out",
            "--counts",
            "props.json",
            "--classes",
            "class_a,class_b",
            "-t",
            "0.84",
            "--train-size",
            "0.7",
            "--random-state",
            "7",
            "-f",
            "csv,parquet",
            "--per-species-list",
        ])
        .unwrap();

        assert_eq!(cli.manifest.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.manifest.threshold, Some(0.84));
        assert_eq!(cli.manifest.train_size, Some(0.7));
        assert_eq!(cli.manifest.random_state, Some(7));
        assert_eq!(
            cli.manifest.classes,
            Some(vec!["class_a".to_string(), "class_b".to_string()])
        );
        assert_eq!(
            cli.manifest.format,
            Some(vec![OutputFormat::Csv, OutputFormat::Parquet])
        );
        assert!(cli.manifest.per_species_list);
    }

    #[test]
    fn test_invalid_threshold_rejected_at_parse() {
        assert!(Cli::try_parse_from(["speciset", "dataset", "-t", "1.5"]).is_err());
        assert!(Cli::try_parse_from(["speciset", "dataset", "-t", "0"]).is_err());
    }

    #[test]
    fn test_parse_crossref_subcommand() {
        let cli = Cli::try_parse_from([
            "speciset", "crossref", "a.json", "b.json", "--classes", "class_a",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Crossref {
                first,
                second,
                classes,
                ..
            }) => {
                assert_eq!(first, PathBuf::from("a.json"));
                assert_eq!(second, PathBuf::from("b.json"));
                assert_eq!(classes, vec!["class_a"]);
            }
            other => panic!("expected crossref subcommand, got {other:?}"),
        }
    }
}
