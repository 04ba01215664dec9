// Library root. The binary and the integration tests both go through these
// modules; main.rs only wires them together.

pub mod app;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod data;
pub mod messages;
pub mod tui;
