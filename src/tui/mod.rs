//! TUI (Text User Interface) module for ENTITY-001
//!
//! The retro terminal window, built on ratatui/crossterm.

pub mod app;
pub mod footer;
pub mod theme;
pub mod ui;

pub use app::{run, EntityApp, KeyResult};
pub use theme::{theme_or_default, Theme};
