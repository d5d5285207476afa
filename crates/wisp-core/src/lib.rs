//! Wisp Core - Foundational types for the Wisp particle engine
//!
//! This crate provides the types the engine crates depend on:
//! - `Vec2` - 2D positions and velocities
//! - `Rgba` - particle tint colors
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, WispError};
pub use types::{Rgba, Vec2};
