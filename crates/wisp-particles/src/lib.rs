//! Wisp Particles - pooled 2D particle simulation
//!
//! Provides per-emitter particle simulation with:
//! - Fixed-capacity slot pool, reused in place — no per-frame allocation
//! - Spawn-rate timer with a fresh interval drawn after every spawn
//! - Spawn attributes randomized within inclusive, order-tolerant ranges
//! - Lifetime countdown in milliseconds, retirement in the same tick
//! - A renderer-agnostic draw trait the host implements
//!
//! The host loop owns the clock: call [`Emitter::update`] once per frame
//! with the elapsed milliseconds, then iterate [`Emitter::live_particles`]
//! or hand a [`ParticleDrawer`] to [`Emitter::draw`].

pub mod config;
pub mod emitter;
pub mod particle;
pub mod rand;
pub mod render;
pub mod spawn;

pub use config::{ChannelRange, EmitterConfig, ValueRange};
pub use emitter::Emitter;
pub use particle::{Particle, ParticlePool};
pub use rand::ParticleRng;
pub use render::ParticleDrawer;
pub use spawn::create_particle;
