//! presentation-timer library crate.
//!
//! This library provides the core functionality for presentation-timer, including:
//! - The countdown state machine and its one-second ticker
//! - The shareable address carrying the duration
//! - End-of-time alerts (tone synthesis with a terminal-bell fallback)
//! - Terminal UI components

pub mod alert;
pub mod app;
pub mod cli;
pub mod config;
pub mod event_loop;
pub mod handlers;
pub mod input;
pub mod location;
pub mod logging;
pub mod platform;
pub mod terminal;
pub mod timer;
pub mod ui;
