//! Particle state and the fixed-capacity slot pool

use wisp_core::{Rgba, Vec2};

/// Simulation state for one particle slot.
///
/// `position`, `angle_deg`, and `life_ms` mutate every tick; everything else
/// is fixed when the particle spawns. A slot is recycled in place when its
/// lifetime elapses.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    /// Units per second, resolved from the spawn heading and speed.
    pub velocity: Vec2,
    /// Current rotation in degrees.
    pub angle_deg: f32,
    /// Rotation speed in degrees per second, fixed at spawn.
    pub angular_velocity_deg: f32,
    /// Uniform scale multiplier, fixed at spawn.
    pub size: f32,
    /// Tint fixed at spawn; alpha stays 1.0 for the particle's whole life.
    pub color: Rgba,
    /// Remaining lifetime in milliseconds.
    pub life_ms: f32,
    pub alive: bool,
}

impl Particle {
    /// An inert slot: everything zeroed, not alive.
    pub fn dead() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angle_deg: 0.0,
            angular_velocity_deg: 0.0,
            size: 0.0,
            color: Rgba::new(0.0, 0.0, 0.0, 0.0),
            life_ms: 0.0,
            alive: false,
        }
    }
}

/// Fixed-capacity arena of particle slots.
///
/// All slots are allocated up front and reused in place — no per-particle
/// allocation at steady state. Indices are stable for the lifetime of the
/// pool: a dead slot keeps its last attributes untouched until the next
/// activation overwrites it.
pub struct ParticlePool {
    slots: Vec<Particle>,
    alive: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Particle::dead(); capacity],
            alive: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn is_saturated(&self) -> bool {
        self.alive >= self.slots.len()
    }

    /// Place `particle` in the first dead slot (index order) and mark it
    /// alive, returning the slot index. Returns `None` when the pool is
    /// saturated.
    pub fn activate(&mut self, particle: Particle) -> Option<usize> {
        if self.is_saturated() {
            return None;
        }
        let idx = self.slots.iter().position(|p| !p.alive);
        debug_assert!(idx.is_some(), "alive counter out of sync with slot flags");
        let idx = idx?;
        self.slots[idx] = particle;
        self.slots[idx].alive = true;
        self.alive += 1;
        Some(idx)
    }

    /// Age every live slot by `elapsed_ms`: decrement lifetime, advance
    /// position and rotation, and retire slots whose lifetime reaches zero
    /// in the same pass. Dead slots are left untouched.
    pub fn age(&mut self, elapsed_ms: f32) {
        let dt = elapsed_ms / 1000.0;
        for slot in &mut self.slots {
            if !slot.alive {
                continue;
            }
            slot.life_ms -= elapsed_ms;
            slot.position += slot.velocity * dt;
            slot.angle_deg += slot.angular_velocity_deg * dt;
            if slot.life_ms <= 0.0 {
                slot.alive = false;
                self.alive -= 1;
            }
        }
    }

    /// Restartable view over the live slots, in slot index order. Borrows
    /// the slots directly — no cached copies.
    pub fn live(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.alive)
    }

    /// Retire every live slot in place.
    pub fn kill_all(&mut self) {
        for slot in &mut self.slots {
            slot.alive = false;
        }
        self.alive = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_particle(life_ms: f32) -> Particle {
        Particle {
            life_ms,
            alive: true,
            ..Particle::dead()
        }
    }

    #[test]
    fn activate_fills_the_first_dead_slot() {
        let mut pool = ParticlePool::new(3);
        assert_eq!(pool.activate(live_particle(100.0)), Some(0));
        assert_eq!(pool.activate(live_particle(10.0)), Some(1));
        assert_eq!(pool.activate(live_particle(100.0)), Some(2));
        assert_eq!(pool.alive_count(), 3);

        // Retire the middle slot, then the next activation reuses it
        pool.age(50.0);
        assert_eq!(pool.alive_count(), 2);
        assert_eq!(pool.activate(live_particle(100.0)), Some(1));
    }

    #[test]
    fn saturated_pool_rejects_activation() {
        let mut pool = ParticlePool::new(2);
        assert!(pool.activate(live_particle(100.0)).is_some());
        assert!(pool.activate(live_particle(100.0)).is_some());
        assert!(pool.is_saturated());
        assert!(pool.activate(live_particle(100.0)).is_none());
        assert_eq!(pool.alive_count(), 2);
    }

    #[test]
    fn aging_retires_expired_slots_in_the_same_pass() {
        let mut pool = ParticlePool::new(2);
        pool.activate(live_particle(100.0));
        pool.activate(live_particle(300.0));

        pool.age(100.0);
        assert_eq!(pool.alive_count(), 1);

        let survivor = pool.live().next().unwrap();
        assert!((survivor.life_ms - 200.0).abs() < 1e-3);
    }

    #[test]
    fn aging_integrates_position_and_rotation() {
        let mut pool = ParticlePool::new(1);
        let mut p = live_particle(1_000.0);
        p.velocity = Vec2::new(10.0, -4.0);
        p.angular_velocity_deg = 90.0;
        pool.activate(p);

        pool.age(500.0);
        let aged = pool.live().next().unwrap();
        assert!((aged.position.x - 5.0).abs() < 1e-4);
        assert!((aged.position.y + 2.0).abs() < 1e-4);
        assert!((aged.angle_deg - 45.0).abs() < 1e-4);
    }

    #[test]
    fn lifetime_strictly_decreases_until_retirement() {
        let mut pool = ParticlePool::new(1);
        pool.activate(live_particle(95.0));

        let mut last = 95.0;
        while pool.alive_count() > 0 {
            pool.age(10.0);
            if let Some(p) = pool.live().next() {
                assert!(p.life_ms < last);
                last = p.life_ms;
            }
        }
        // Retired on the pass that crossed zero, not one frame later
        assert!(pool.slots[0].life_ms <= 0.0);
        assert!(!pool.slots[0].alive);
    }

    #[test]
    fn dead_slots_keep_their_attributes() {
        let mut pool = ParticlePool::new(1);
        let mut p = live_particle(100.0);
        p.velocity = Vec2::new(50.0, 0.0);
        pool.activate(p);

        pool.age(100.0);
        assert_eq!(pool.alive_count(), 0);
        let resting = pool.slots[0].clone();

        // Further aging passes must not touch the dead slot
        pool.age(500.0);
        pool.age(500.0);
        assert_eq!(pool.slots[0].position, resting.position);
        assert_eq!(pool.slots[0].angle_deg, resting.angle_deg);
        assert_eq!(pool.slots[0].life_ms, resting.life_ms);
    }

    #[test]
    fn live_view_is_index_ordered_and_restartable() {
        let mut pool = ParticlePool::new(3);
        for size in [1.0, 2.0, 3.0] {
            let mut p = live_particle(if size == 2.0 { 10.0 } else { 1_000.0 });
            p.size = size;
            pool.activate(p);
        }

        // Kill the middle slot only
        pool.age(50.0);
        let sizes: Vec<f32> = pool.live().map(|p| p.size).collect();
        assert_eq!(sizes, vec![1.0, 3.0]);

        // The view restarts from the beginning on every call
        let again: Vec<f32> = pool.live().map(|p| p.size).collect();
        assert_eq!(again, sizes);
    }

    #[test]
    fn kill_all_retires_everything() {
        let mut pool = ParticlePool::new(4);
        for _ in 0..3 {
            pool.activate(live_particle(1_000.0));
        }
        pool.kill_all();
        assert_eq!(pool.alive_count(), 0);
        assert_eq!(pool.live().count(), 0);
        assert!(!pool.is_saturated());
    }
}
