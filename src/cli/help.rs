//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;

/// Print help message based on configuration state.
pub fn print_smart_help(config: &Config) {
    if config.paths.data_dir.is_none() {
        print_first_time_help();
    } else {
        print_configured_help();
    }
}

/// Print detailed setup guide for first-time users.
pub fn print_first_time_help() {
    println!("No configuration found. Get started with speciset:");
    println!();
    println!("1. Initialize configuration:");
    println!("   speciset config init");
    println!();
    println!("2. Point it at a dataset directory (class/species/image tree):");
    println!("   speciset /data/observations -o ./manifests");
    println!();
    println!("3. Enable dominance filtering with a species count file:");
    println!("   speciset /data/observations --counts props.json -t 0.84");
    println!();
    println!("Run 'speciset -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help() {
    println!("Usage: speciset [DATA_DIR] [OPTIONS]");
    println!();
    println!("Example: speciset /data/observations -o ./manifests -t 0.84");
    println!();
    println!("Run 'speciset -h' for all options or 'speciset config show' for current settings.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smart_help_does_not_panic() {
        let mut config = Config::default();
        print_smart_help(&config);

        config.paths.data_dir = Some("/data".into());
        print_smart_help(&config);
    }
}
