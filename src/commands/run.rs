//! Interactive terminal handler

use anyhow::{Context as _, Result};

use super::Context;
use entity::beeper::{Beeper, TerminalBell};
use entity::tui::{self, EntityApp};
use entity::{Session, SessionOptions};
use std::time::Duration;

/// Open the ENTITY-001 terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(ctx: &Context) -> Result<()> {
    let options = SessionOptions {
        processing_step: Duration::from_millis(ctx.config.ui.processing_step_ms),
        min_filler_len: ctx.config.typewriter.min_filler_len,
        seed: ctx.seed,
    };
    let sound = ctx.config.audio.enabled && !ctx.no_sound;
    let beeper = Beeper::new(Box::new(TerminalBell), sound);
    let session = Session::new(ctx.language(), options, beeper)
        .context("Failed to start session")?;
    let theme = ctx.theme();

    let app = EntityApp::new(session, ctx.language_store(), theme);
    tui::run(app)
}
