//! ENTITY-001 - a retro terminal oracle.
//!
//! The user types, the screen answers with mystical filler one character per
//! keystroke, and on ENTER the entity "reveals" what was really typed.
//!
//! - [`typewriter`]: the keystroke-synchronized filler engine
//! - [`session`]: the question/answer cycle built on it
//! - [`i18n`] and [`language`]: English/Portuguese strings and the persisted choice
//! - [`beeper`]: PC-speaker style cues
//! - [`tui`]: the terminal front end

pub mod beeper;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod language;
pub mod logging;
pub mod session;
pub mod tui;
pub mod typewriter;

pub use config::Config;
pub use i18n::Language;
pub use session::{Session, SessionOptions};
pub use typewriter::{Typewriter, TypewriterError};
