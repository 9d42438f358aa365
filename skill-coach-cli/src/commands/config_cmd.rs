use anyhow::{bail, Context, Result};

use super::AppContext;
use crate::config::Config;

pub async fn show_config(ctx: &AppContext) -> Result<()> {
    println!("Configuration ({})", ctx.config_path.display());
    println!();

    let contents = toml::to_string_pretty(&ctx.config).context("Failed to serialize config")?;
    print!("{}", contents);

    Ok(())
}

pub async fn init_config(ctx: &AppContext, force: bool) -> Result<()> {
    if ctx.config_path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            ctx.config_path.display()
        );
    }

    Config::default().save_to(&ctx.config_path)?;
    tracing::info!("Wrote default config to {}", ctx.config_path.display());
    println!("✓ Config written to {}", ctx.config_path.display());

    Ok(())
}
