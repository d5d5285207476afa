//! Renderer-facing seam

use wisp_core::{Rgba, Vec2};

/// Draw capability supplied by the host renderer.
///
/// The engine calls this once per live particle per frame, in slot index
/// order, after `update`. Implementations decide what a particle looks
/// like; the engine only hands over the simulated attributes.
pub trait ParticleDrawer {
    fn draw_particle(&mut self, position: Vec2, angle_deg: f32, scale: f32, color: Rgba);
}
