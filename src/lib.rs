//! speciset - species image dataset curation CLI.
//!
//! Builds train/validation manifests from a `class/species/image` directory
//! tree, with optional dominant-species filtering driven by a cumulative
//! image-share threshold.

#![warn(missing_docs)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod manifest;
pub mod output;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, ManifestArgs};
use config::{Config, load_default_config, save_default_config};
use constants::output_files;
use manifest::{ManifestOptions, run_manifest_generator};
use std::path::PathBuf;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the speciset CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.manifest.verbose, cli.manifest.quiet);

    // Load configuration
    let config = load_default_config()?;
    config::validate_config(&config)?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    // Default: generate manifests
    // Show help if no data directory provided
    let Some(data_dir) = cli.data_dir.or_else(|| config.paths.data_dir.clone()) else {
        cli::help::print_smart_help(&config);
        return Ok(());
    };

    generate_manifests(data_dir, &cli.manifest, &config)
}

/// Generate manifests for a dataset directory with the given options.
fn generate_manifests(data_dir: PathBuf, args: &ManifestArgs, config: &Config) -> Result<()> {
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.paths.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let species_counts = args
        .counts
        .clone()
        .or_else(|| config.paths.species_counts.clone());

    let target_classes = args
        .classes
        .clone()
        .unwrap_or_else(|| config.dataset.classes.clone());

    let options = ManifestOptions {
        data_dir,
        output_dir,
        species_counts,
        target_classes,
        train_size: args.train_size.unwrap_or(config.split.train_size),
        random_state: args.random_state.unwrap_or(config.split.random_state),
        dominant_threshold: args.threshold.unwrap_or(config.split.dominant_threshold),
        formats: args
            .format
            .clone()
            .unwrap_or_else(|| config.split.formats.clone()),
        per_species_list: args.per_species_list || config.split.per_species_list,
        export: !args.no_export,
    };

    info!(
        "Generating manifests from {} (threshold={}, train_size={}, seed={})",
        options.data_dir.display(),
        options.dominant_threshold,
        options.train_size,
        options.random_state
    );

    let set = run_manifest_generator(&options)?;

    let bucket_kind = if options.dominant_threshold < 1.0 {
        "with Other"
    } else {
        "no Other"
    };
    info!(
        "Total species ({bucket_kind}): {}",
        set.species_dict.len()
    );
    info!(
        "Total images: {} | Train: {} | Val: {}",
        set.images.len(),
        set.train.len(),
        set.val.len()
    );

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
        Command::Crossref {
            first,
            second,
            output_dir,
            classes,
        } => handle_crossref_command(&first, &second, output_dir.as_deref(), &classes, config),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config::config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!("  set paths.data_dir and run 'speciset' to build manifests");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config::config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Handle the `crossref` subcommand.
#[allow(clippy::print_stdout)]
fn handle_crossref_command(
    first: &std::path::Path,
    second: &std::path::Path,
    output_dir: Option<&std::path::Path>,
    classes: &[String],
    config: &Config,
) -> Result<()> {
    let first_map = analysis::load_species_map(first)?;
    let second_map = analysis::load_species_map(second)?;

    let target_classes = if classes.is_empty() {
        config.dataset.classes.clone()
    } else {
        classes.to_vec()
    };

    let (matched, report) = analysis::cross_reference(&first_map, &second_map, &target_classes);

    let output_dir = output_dir.map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);
    std::fs::create_dir_all(&output_dir).map_err(|e| Error::OutputDirCreate {
        path: output_dir.clone(),
        source: e,
    })?;

    output::write_json_pretty(&output_dir.join(output_files::MATCHED_SPECIES), &matched)?;
    output::write_json_pretty(&output_dir.join(output_files::CROSSREF_REPORT), &report)?;

    println!(
        "Matched species: {} | Unmatched: {}",
        report.total_matched, report.total_unmatched
    );
    println!("Results written to {}", output_dir.display());

    Ok(())
}
