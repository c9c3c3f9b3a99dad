#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]
pub mod cli;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
pub mod tui;
