//! Emitter runtime: spawn timing, burst drain, and the per-tick aging pass

use crate::config::EmitterConfig;
use crate::particle::{Particle, ParticlePool};
use crate::rand::ParticleRng;
use crate::render::ParticleDrawer;
use crate::spawn::create_particle;
use wisp_core::{Result, Vec2};

/// Default seed used by [`Emitter::new`]; pass your own through
/// [`Emitter::with_seed`] when reproducibility matters.
const DEFAULT_SEED: u64 = 0xDEAD_BEEF;

/// One particle emitter: a config, a fixed pool of slots, and a spawn timer.
///
/// The host loop drives it with `update(elapsed_ms)` once per frame and
/// reads back `live_particles()` (or calls `draw`) afterwards. All state is
/// owned here; nothing mutates the pool from outside.
pub struct Emitter {
    config: EmitterConfig,
    pool: ParticlePool,
    rng: ParticleRng,
    /// Elapsed milliseconds accrued toward the next timed spawn.
    spawn_timer_ms: f32,
    /// Interval the timer must reach before the next spawn; redrawn from
    /// `config.spawn_rate_ms` after every spawn.
    spawn_interval_ms: f32,
    enabled: bool,
    /// Spawns queued by `queue_burst`, drained on the next update.
    pending_burst: u32,
}

impl Emitter {
    /// Build an emitter with the default seed. Fails if the config is
    /// degenerate (zero capacity, non-finite bounds).
    pub fn new(config: EmitterConfig) -> Result<Self> {
        Self::with_rng(config, ParticleRng::new(DEFAULT_SEED))
    }

    /// Build an emitter with an explicit seed for deterministic runs.
    pub fn with_seed(config: EmitterConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, ParticleRng::new(seed))
    }

    /// Build an emitter around a caller-supplied random source.
    pub fn with_rng(config: EmitterConfig, mut rng: ParticleRng) -> Result<Self> {
        config.validate()?;
        // Draw the first interval now so the first update can spawn
        // without a warm-up tick
        let spawn_interval_ms = config.spawn_rate_ms.sample(&mut rng);
        let pool = ParticlePool::new(config.max_particles);
        Ok(Self {
            config,
            pool,
            rng,
            spawn_timer_ms: 0.0,
            spawn_interval_ms,
            enabled: true,
            pending_burst: 0,
        })
    }

    /// Advance the simulation by `elapsed_ms`: run the spawn timer, drain
    /// any queued burst, then age every live particle. Zero elapsed time is
    /// a no-op.
    pub fn update(&mut self, elapsed_ms: f32) {
        debug_assert!(elapsed_ms >= 0.0, "elapsed time must be non-negative");
        if elapsed_ms <= 0.0 {
            return;
        }

        // Spawn before aging so a fresh particle ages by this tick's time
        self.spawn_timer_ms += elapsed_ms;
        if self.enabled && self.spawn_timer_ms >= self.spawn_interval_ms && !self.pool.is_saturated()
        {
            let particle = create_particle(&self.config, &mut self.rng);
            self.pool.activate(particle);
            self.spawn_timer_ms -= self.spawn_interval_ms;
            self.spawn_interval_ms = self.config.spawn_rate_ms.sample(&mut self.rng);
        }
        // Leftover credit is capped at one interval: a long stall or a
        // saturated stretch earns one prompt spawn, not a burst of catch-up
        self.spawn_timer_ms = self.spawn_timer_ms.min(self.spawn_interval_ms);

        if self.enabled {
            while self.pending_burst > 0 && !self.pool.is_saturated() {
                let particle = create_particle(&self.config, &mut self.rng);
                self.pool.activate(particle);
                self.pending_burst -= 1;
            }
        }

        self.pool.age(elapsed_ms);
        debug_assert!(
            self.pool.live().all(|p| p.life_ms > 0.0),
            "live slot with elapsed lifetime after aging pass"
        );
    }

    /// Restartable view over the live particles, in slot index order,
    /// reflecting the most recent `update`.
    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> {
        self.pool.live()
    }

    /// Invoke `drawer` once per live particle, in slot index order.
    pub fn draw(&self, drawer: &mut dyn ParticleDrawer) {
        for p in self.pool.live() {
            drawer.draw_particle(p.position, p.angle_deg, p.size, p.color);
        }
    }

    /// Return to the freshly constructed state: every slot dead, timers
    /// zeroed, a fresh first interval drawn.
    pub fn reset(&mut self) {
        self.pool.kill_all();
        self.spawn_timer_ms = 0.0;
        self.spawn_interval_ms = self.config.spawn_rate_ms.sample(&mut self.rng);
        self.pending_burst = 0;
    }

    /// Retire every live particle without touching the spawn timer.
    pub fn kill_all(&mut self) {
        self.pool.kill_all();
    }

    /// Queue `count` extra spawns, drained (capacity permitting) on the
    /// next update.
    pub fn queue_burst(&mut self, count: u32) {
        self.pending_burst += count;
    }

    /// A disabled emitter spawns nothing but keeps aging live particles,
    /// so the effect dissipates instead of freezing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Swap in a new config at runtime. Live particles keep playing out
    /// under their spawn-time attributes — unless `max_particles` changed,
    /// which reallocates the slot array and retires everything.
    pub fn set_config(&mut self, config: EmitterConfig) -> Result<()> {
        config.validate()?;
        if config.max_particles != self.pool.capacity() {
            self.pool = ParticlePool::new(config.max_particles);
            self.spawn_timer_ms = 0.0;
        }
        self.config = config;
        // The pending interval came from the old range
        self.spawn_interval_ms = self.config.spawn_rate_ms.sample(&mut self.rng);
        Ok(())
    }

    /// Move the spawn origin without revalidating the whole config. The
    /// hot path for emitters tracking a moving entity.
    pub fn set_spawn_location(&mut self, location: Vec2) {
        self.config.spawn_location = location;
    }

    pub fn alive_count(&self) -> usize {
        self.pool.alive_count()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    pub fn is_saturated(&self) -> bool {
        self.pool.is_saturated()
    }
}
