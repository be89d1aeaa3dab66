//! About command handler

use anyhow::Result;

use super::Context;
use entity::i18n::translations;

/// Print the about page in the active language.
pub fn handle(ctx: &Context) -> Result<()> {
    let strings = translations(ctx.language());
    let theme = ctx.theme();
    println!("{}", theme.primary_text(&strings.about_text()));
    Ok(())
}
