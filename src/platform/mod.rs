//! Platform abstraction layer
//!
//! Browser implementations of the game's external collaborators:
//! - Drawing (canvas 2D context)
//! - Storage (LocalStorage)
//! - Initials prompt (`window.prompt`)

#[cfg(target_arch = "wasm32")]
pub mod web;
