//! Particle burst
//!
//! Cosmetic feedback when an entry is thrown away: particles fly out from a
//! point, fall under gravity and fade linearly until none are left.

use rand::Rng;

/// Particles spawned per burst unless settings say otherwise
pub const DEFAULT_PARTICLE_COUNT: usize = 150;

const MAX_SPEED: f32 = 15.0;
const GRAVITY: f32 = 0.2;
const DECAY: f32 = 0.02;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining life, 1.0 at spawn, dead at 0.0 or below
    pub life: f32,
    /// Base opacity in 0.2..1.0
    pub opacity: f32,
    /// Radius in 1.0..4.0
    pub size: f32,
}

impl Particle {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Opacity to draw with in the current frame
    pub fn alpha(&self) -> f32 {
        (self.opacity * self.life).clamp(0.0, 1.0)
    }
}

/// A single burst of particles
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
}

impl ParticleBurst {
    /// Spawn `count` particles at `origin` with random velocity, opacity and size
    pub fn spawn<R: Rng>(rng: &mut R, origin: (f32, f32), count: usize) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: origin.0,
                y: origin.1,
                vx: (rng.random::<f32>() - 0.5) * MAX_SPEED,
                vy: (rng.random::<f32>() - 0.5) * MAX_SPEED,
                life: 1.0,
                opacity: rng.random_range(0.2..1.0),
                size: rng.random_range(1.0..4.0),
            })
            .collect();
        Self { particles }
    }

    /// Advance one frame
    ///
    /// Returns `true` while at least one particle was alive at the start of
    /// the frame.
    pub fn step(&mut self) -> bool {
        let mut active = false;
        for p in self.particles.iter_mut().filter(|p| p.is_alive()) {
            active = true;
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.life -= DECAY;
        }
        active
    }

    pub fn is_finished(&self) -> bool {
        !self.particles.iter().any(Particle::is_alive)
    }

    /// Particles still visible
    pub fn live(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.is_alive())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn burst(count: usize) -> ParticleBurst {
        let mut rng = SmallRng::seed_from_u64(7);
        ParticleBurst::spawn(&mut rng, (500.0, 400.0), count)
    }

    #[test]
    fn test_spawn_ranges() {
        let burst = burst(DEFAULT_PARTICLE_COUNT);
        assert_eq!(burst.len(), DEFAULT_PARTICLE_COUNT);
        for p in burst.live() {
            assert_eq!((p.x, p.y), (500.0, 400.0));
            assert!(p.vx.abs() <= MAX_SPEED / 2.0);
            assert!(p.vy.abs() <= MAX_SPEED / 2.0);
            assert!((0.2..1.0).contains(&p.opacity));
            assert!((1.0..4.0).contains(&p.size));
        }
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut burst = burst(1);
        let vy = burst.live().next().unwrap().vy;
        burst.step();
        let p = burst.live().next().unwrap();
        assert!((p.vy - (vy + GRAVITY)).abs() < 1e-6);
        assert!(p.life < 1.0);
    }

    #[test]
    fn test_burst_decays_completely() {
        let mut burst = burst(20);
        let mut frames = 0;
        while burst.step() {
            frames += 1;
            assert!(frames <= 60, "burst never finished");
        }
        assert!(burst.is_finished());
        assert_eq!(burst.live().count(), 0);
        assert!(!burst.step());
    }

    #[test]
    fn test_empty_burst_is_finished() {
        let mut burst = burst(0);
        assert!(burst.is_empty());
        assert!(burst.is_finished());
        assert!(!burst.step());
    }
}
