//! Language subcommands handler

use anyhow::Result;

use super::Context;
use entity::tui::Theme;
use entity::Language;

/// Print the active language code.
pub fn handle_show(ctx: &Context) -> Result<()> {
    println!("{}", ctx.language());
    Ok(())
}

/// Persist `lang` as the preferred language.
pub fn handle_set(ctx: &Context, lang: Language) -> Result<()> {
    let mut store = ctx.language_store();
    store.set_language(lang)?;
    print_changed(&ctx.theme(), lang);
    Ok(())
}

/// Persist the other language.
pub fn handle_toggle(ctx: &Context) -> Result<()> {
    let mut store = ctx.language_store();
    let lang = store.toggle()?;
    print_changed(&ctx.theme(), lang);
    Ok(())
}

fn print_changed(theme: &Theme, lang: Language) {
    println!(
        "{}",
        theme.success_text(&format!("Language set to {}", lang))
    );
}
