//! Emitter configuration: attribute ranges and pool sizing

use crate::rand::ParticleRng;
use serde::{Deserialize, Serialize};
use wisp_core::{Result, Vec2, WispError};

/// Inclusive fractional range. The bounds may be stored in either order;
/// sampling normalizes them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A degenerate range that always samples to `value`.
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Draw a value from `[min, max]` at three-decimal precision.
    pub fn sample(&self, rng: &mut ParticleRng) -> f32 {
        rng.range_f32(self.min, self.max)
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Inclusive byte-valued color channel range (0-255), either order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

impl ChannelRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: u8) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Draw a channel value from `[min, max]` through the integer domain.
    pub fn sample(&self, rng: &mut ParticleRng) -> u8 {
        rng.range_i32(self.min as i32, self.max as i32) as u8
    }
}

/// Configuration for one emitter: the spawn origin, the pool capacity, and
/// the inclusive range every spawn attribute is drawn from.
///
/// Each `[min, max]` pair may be supplied in either order. Missing fields in
/// a serialized preset fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Pool capacity: the hard cap on simultaneously live particles.
    pub max_particles: usize,
    /// Origin point every particle spawns from.
    pub spawn_location: Vec2,
    /// Milliseconds between successive spawns; a fresh interval is drawn
    /// from this range after each spawn.
    pub spawn_rate_ms: ValueRange,
    /// Spawn heading in degrees from the +X axis, counter-clockwise. Also
    /// the particle's initial rotation.
    pub angle_deg: ValueRange,
    /// Rotation speed in degrees per second.
    pub angular_velocity_deg: ValueRange,
    /// Velocity magnitude in units per second.
    pub speed: ValueRange,
    /// Uniform scale multiplier.
    pub size: ValueRange,
    /// Particle lifetime in milliseconds.
    pub life_ms: ValueRange,
    pub red: ChannelRange,
    pub green: ChannelRange,
    pub blue: ChannelRange,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_particles: 256,
            spawn_location: Vec2::ZERO,
            spawn_rate_ms: ValueRange::new(16.0, 64.0),
            angle_deg: ValueRange::new(0.0, 360.0),
            angular_velocity_deg: ValueRange::new(-180.0, 180.0),
            speed: ValueRange::new(20.0, 100.0),
            size: ValueRange::new(0.5, 1.5),
            life_ms: ValueRange::new(500.0, 2_000.0),
            red: ChannelRange::new(0, 255),
            green: ChannelRange::new(0, 255),
            blue: ChannelRange::new(0, 255),
        }
    }
}

impl EmitterConfig {
    /// Check the config for degenerate values. Swapped bounds are fine;
    /// a zero-capacity pool or a non-finite bound is not.
    pub fn validate(&self) -> Result<()> {
        if self.max_particles == 0 {
            return Err(WispError::InvalidCapacity);
        }
        if !self.spawn_location.is_finite() {
            return Err(WispError::NonFiniteSpawnLocation {
                x: self.spawn_location.x,
                y: self.spawn_location.y,
            });
        }
        for (field, range) in [
            ("spawn_rate_ms", &self.spawn_rate_ms),
            ("angle_deg", &self.angle_deg),
            ("angular_velocity_deg", &self.angular_velocity_deg),
            ("speed", &self.speed),
            ("size", &self.size),
            ("life_ms", &self.life_ms),
        ] {
            if !range.is_finite() {
                return Err(WispError::NonFiniteRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
