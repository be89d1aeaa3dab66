//! Integration tests for ENTITY-001.

mod cli_test;
mod helpers;
mod typewriter_test;
