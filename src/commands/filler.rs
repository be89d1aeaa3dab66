//! Filler command handler
//!
//! Prints what the terminal would show for `count` keystrokes.

use std::io::{self, Write};

use anyhow::Result;

use super::Context;
use entity::i18n::filler_fragments;
use entity::typewriter::{picker_for_seed, Typewriter};

pub fn handle(ctx: &Context, count: usize) -> Result<()> {
    let lang = ctx.language();
    let mut typewriter = Typewriter::with_min_filler_len(
        filler_fragments(lang).iter().copied(),
        picker_for_seed(ctx.seed),
        ctx.config.typewriter.min_filler_len,
    )?;

    let text: String = (0..count).map(|_| typewriter.next_char()).collect();
    tracing::debug!(count, language = %lang, "Generated filler");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    Ok(())
}
