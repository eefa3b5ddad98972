//! Per-player game sessions on top of `sweeper-core`.
//!
//! The store owns one [`Board`](sweeper_core::Board) per player identity and drops it as soon
//! as the game is won or lost. Translating chat input into coordinates and rendering the
//! returned snapshots is left to the embedding application.

pub use error::*;
pub use settings::*;
pub use store::*;

mod error;
mod settings;
mod store;
