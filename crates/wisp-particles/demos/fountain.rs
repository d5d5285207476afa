//! Terminal fountain: drives one emitter through the public API and draws
//! each frame onto a character grid.
//!
//! Run with: cargo run --example fountain

use wisp_core::{Rgba, Vec2};
use wisp_particles::{ChannelRange, Emitter, EmitterConfig, ParticleDrawer, ValueRange};

const WIDTH: usize = 72;
const HEIGHT: usize = 20;
const FRAME_MS: f32 = 50.0;

/// Plots particles as characters on a fixed grid, larger particles with
/// heavier glyphs.
struct GridDrawer {
    cells: Vec<char>,
}

impl GridDrawer {
    fn new() -> Self {
        Self {
            cells: vec![' '; WIDTH * HEIGHT],
        }
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn print(&self) {
        println!("+{}+", "-".repeat(WIDTH));
        for row in self.cells.chunks(WIDTH) {
            println!("|{}|", row.iter().collect::<String>());
        }
        println!("+{}+", "-".repeat(WIDTH));
    }
}

impl ParticleDrawer for GridDrawer {
    fn draw_particle(&mut self, position: Vec2, _angle_deg: f32, scale: f32, _color: Rgba) {
        let x = position.x.round() as isize;
        // Screen rows grow downward; the simulation's +Y is up
        let y = (HEIGHT as f32 - 1.0 - position.y.round()) as isize;
        if (0..WIDTH as isize).contains(&x) && (0..HEIGHT as isize).contains(&y) {
            let glyph = if scale > 1.0 { 'O' } else { 'o' };
            self.cells[y as usize * WIDTH + x as usize] = glyph;
        }
    }
}

fn main() {
    let config = EmitterConfig {
        max_particles: 64,
        spawn_location: Vec2::new(WIDTH as f32 / 2.0, 1.0),
        spawn_rate_ms: ValueRange::new(20.0, 60.0),
        angle_deg: ValueRange::new(60.0, 120.0),
        angular_velocity_deg: ValueRange::new(-90.0, 90.0),
        speed: ValueRange::new(8.0, 18.0),
        size: ValueRange::new(0.5, 1.5),
        life_ms: ValueRange::new(800.0, 1_600.0),
        red: ChannelRange::new(64, 128),
        green: ChannelRange::new(128, 192),
        blue: ChannelRange::new(224, 255),
    };

    // Fixed seed so every run of the demo plays out identically
    let mut emitter = match Emitter::with_seed(config, 0x5EED) {
        Ok(e) => e,
        Err(err) => {
            eprintln!("[fountain] bad config: {err}");
            std::process::exit(1);
        }
    };

    println!(
        "[fountain] {} slots, {FRAME_MS}ms per frame",
        emitter.capacity()
    );

    let mut drawer = GridDrawer::new();
    for frame in 0..40 {
        emitter.update(FRAME_MS);

        if frame % 8 == 7 {
            drawer.clear();
            emitter.draw(&mut drawer);
            println!(
                "[fountain] frame {:>2}: {} alive",
                frame + 1,
                emitter.alive_count()
            );
            drawer.print();
        }
    }

    // Let the tail play out with spawning off
    emitter.set_enabled(false);
    let mut frames = 0;
    while emitter.alive_count() > 0 {
        emitter.update(FRAME_MS);
        frames += 1;
    }
    println!("[fountain] drained in {frames} frames after disable");
}
