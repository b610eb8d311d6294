//! Modal dialog components for the TUI.

pub mod address;

pub use address::AddressModal;
