//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::error::Result;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub data_dir: String,
    pub search: SearchSettings,
}

#[derive(Debug, Serialize)]
pub struct SearchSettings {
    pub default_limit: usize,
    pub max_query_length: usize,
}

/// Execute the config command
pub fn execute(_args: ConfigArgs, services: &Arc<Services>, format: OutputFormat) -> Result<()> {
    let config = &services.config;
    let xdg = crate::core::xdg::XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        data_dir: config.data.dir.to_string_lossy().into_owned(),
        search: SearchSettings {
            default_limit: config.search.default_limit,
            max_query_length: config.search.max_query_length,
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  data_dir: {}", response.data_dir);
            println!("  search:");
            println!("    default_limit: {}", response.search.default_limit);
            println!(
                "    max_query_length: {}",
                response.search.max_query_length
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
