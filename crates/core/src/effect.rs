//! Particle bursts for destroyed words.

use std::f32::consts::TAU;

use crate::rng::GameRng;
use crate::types::{
    BURST_BASE_PARTICLES, BURST_PARTICLES_PER_LETTER, PARTICLE_GLYPHS, PARTICLE_LIFETIME_MAX,
    PARTICLE_LIFETIME_MIN, PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN,
};

/// A single particle with position, velocity and remaining lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub glyph: char,
    /// Ticks left before the particle disappears
    pub lifetime: u8,
}

impl Particle {
    /// Advance one tick. Returns false when expired.
    pub fn step(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }
}

/// Particles sharing one spawn event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effect {
    particles: Vec<Particle>,
}

impl Effect {
    /// Number of particles a burst for a word of `word_len` letters gets.
    pub fn particle_count(word_len: usize) -> usize {
        BURST_BASE_PARTICLES + BURST_PARTICLES_PER_LETTER * word_len
    }

    /// Explode a word of `word_len` letters at `(x, y)`.
    ///
    /// Each particle flies off in a random direction; starting columns are
    /// spread across the word so the burst covers it.
    pub fn burst(x: u16, y: u16, word_len: usize, rng: &mut GameRng) -> Self {
        let count = Self::particle_count(word_len);
        let span = word_len.max(1);
        let mut particles = Vec::with_capacity(count);
        for i in 0..count {
            let angle = rng.range_f32(0.0, TAU);
            let speed = rng.range_f32(PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX);
            let glyph = PARTICLE_GLYPHS[rng.below(PARTICLE_GLYPHS.len())];
            let lifetime = rng.range_u8(PARTICLE_LIFETIME_MIN, PARTICLE_LIFETIME_MAX);
            particles.push(Particle {
                x: f32::from(x) + (i % span) as f32,
                y: f32::from(y),
                vx: speed * angle.cos(),
                vy: speed * angle.sin(),
                glyph,
                lifetime,
            });
        }
        Self { particles }
    }

    /// Advance all particles one tick and drop the expired ones.
    pub fn step(&mut self) {
        self.particles.retain_mut(Particle::step);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(lifetime: u8) -> Particle {
        Particle {
            x: 1.0,
            y: 1.0,
            vx: 0.5,
            vy: -1.0,
            glyph: '*',
            lifetime,
        }
    }

    #[test]
    fn test_particle_moves_by_velocity() {
        let mut p = particle(3);
        assert!(p.step());
        assert_eq!((p.x, p.y), (1.5, 0.0));
        assert_eq!(p.lifetime, 2);
    }

    #[test]
    fn test_particle_expires_at_zero() {
        let mut p = particle(1);
        assert!(!p.step());
        assert_eq!(p.lifetime, 0);
    }

    #[test]
    fn test_burst_size_and_ranges() {
        let mut rng = GameRng::new(5);
        let effect = Effect::burst(10, 4, 3, &mut rng);
        assert_eq!(effect.particles().len(), 8 + 2 * 3);

        for p in effect.particles() {
            let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
            assert!(speed >= PARTICLE_SPEED_MIN - 1e-4 && speed < PARTICLE_SPEED_MAX + 1e-4);
            assert!((PARTICLE_LIFETIME_MIN..=PARTICLE_LIFETIME_MAX).contains(&p.lifetime));
            assert!(PARTICLE_GLYPHS.contains(&p.glyph));
            assert!(p.x >= 10.0 && p.x < 13.0);
            assert_eq!(p.y, 4.0);
        }
    }

    #[test]
    fn test_effect_finishes_after_longest_lifetime() {
        let mut rng = GameRng::new(11);
        let mut effect = Effect::burst(0, 0, 5, &mut rng);
        let longest = effect.particles().iter().map(|p| p.lifetime).max().unwrap();
        for _ in 0..longest {
            assert!(!effect.is_finished());
            effect.step();
        }
        assert!(effect.is_finished());
    }

    #[test]
    fn test_step_removes_only_expired() {
        let mut effect = Effect {
            particles: vec![particle(1), particle(2), particle(1)],
        };
        effect.step();
        assert_eq!(effect.particles().len(), 1);
        assert_eq!(effect.particles()[0].lifetime, 1);
    }
}
