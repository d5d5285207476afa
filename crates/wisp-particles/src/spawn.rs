//! Spawn-time attribute generation

use crate::config::EmitterConfig;
use crate::particle::Particle;
use crate::rand::ParticleRng;
use wisp_core::{Rgba, Vec2};

/// Build a freshly randomized particle from the config's attribute ranges.
///
/// Every range is drawn independently except the heading: a single angle
/// draw doubles as the initial rotation and the velocity direction, so a
/// particle always travels the way it faces at spawn.
pub fn create_particle(config: &EmitterConfig, rng: &mut ParticleRng) -> Particle {
    let angle_deg = config.angle_deg.sample(rng);
    let speed = config.speed.sample(rng);

    Particle {
        position: config.spawn_location,
        velocity: polar_velocity(angle_deg, speed),
        angle_deg,
        angular_velocity_deg: config.angular_velocity_deg.sample(rng),
        size: config.size.sample(rng),
        color: Rgba::from_channels(
            config.red.sample(rng),
            config.green.sample(rng),
            config.blue.sample(rng),
        ),
        life_ms: config.life_ms.sample(rng),
        alive: true,
    }
}

/// Resolve a heading (degrees from the +X axis, counter-clockwise) and a
/// speed magnitude into X/Y velocity components.
fn polar_velocity(angle_deg: f32, speed: f32) -> Vec2 {
    let radians = angle_deg.to_radians();
    Vec2::new(radians.cos() * speed, radians.sin() * speed)
}
