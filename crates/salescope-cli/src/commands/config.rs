//! Config commands
//!
//! Commands for managing CLI configuration.

use anyhow::Result;
use clap::Subcommand;
use salescope_core::AppConfig;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_error, print_info, print_output, print_success};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print the config file location
    Path,
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub fn execute(ctx: &Context, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(ctx),
        ConfigAction::Get { key } => get_config(ctx, key),
        ConfigAction::Set { key, value } => set_config(ctx, key, value),
        ConfigAction::Path => {
            println!("{}", AppConfig::path()?.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let rows: Vec<ConfigRow> = ctx
        .config
        .entries()
        .into_iter()
        .map(|(key, value)| ConfigRow {
            key: key.to_string(),
            value,
        })
        .collect();
    print_output(&rows, ctx.format)?;
    Ok(())
}

fn get_config(ctx: &Context, key: String) -> Result<()> {
    match ctx.config.get(&key) {
        Ok(value) => print_info(&format!("{} = {}", key, value), ctx.quiet),
        Err(_) => print_error(&format!("Config key not found: {}", key)),
    }
    Ok(())
}

fn set_config(ctx: &Context, key: String, value: String) -> Result<()> {
    let mut config = ctx.config.clone();
    config.set(&key, &value)?;
    config.save()?;
    print_success(&format!("Set {} = {}", key, value), ctx.quiet);
    Ok(())
}
