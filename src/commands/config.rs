//! Config subcommands handler

use anyhow::Result;

use super::Context;

/// Show current configuration as TOML.
pub fn handle_show(ctx: &Context) -> Result<()> {
    let toml_str = ctx.config.to_toml()?;
    let theme = ctx.theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print the config file path.
pub fn handle_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}
