use rand::Rng;

/// How many pieces a single burst throws.
const BURST_SIZE: usize = 150;
/// Half-angle of the launch cone, degrees from straight up.
const SPREAD_DEGREES: f32 = 35.0;
/// Downward pull, screen-heights per second squared.
const GRAVITY: f32 = 0.55;
/// Velocity retained per second of flight.
const DRAG: f32 = 0.82;

const GLYPHS: &[char] = &['*', '•', '✦', '▪', '·'];

/// One piece of confetti, in normalized screen coordinates
/// (0,0 top-left .. 1,1 bottom-right).
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    ttl: f32,
    pub glyph: char,
    /// Index into the theme's confetti palette.
    pub color: usize,
}

/// Fire-and-forget confetti burst. The app triggers it once on completion
/// and advances it from tick events; it winds itself down when the last
/// particle expires or drifts off screen.
#[derive(Debug, Default)]
pub struct Celebration {
    particles: Vec<Particle>,
}

impl Celebration {
    /// Launch a fresh burst from a point just below center screen,
    /// fanning upward.
    pub fn burst<R: Rng>(&mut self, rng: &mut R) {
        self.particles.clear();
        self.particles.reserve(BURST_SIZE);

        for _ in 0..BURST_SIZE {
            let angle = rng.gen_range(-SPREAD_DEGREES..SPREAD_DEGREES).to_radians();
            let speed = rng.gen_range(0.35..1.1f32);
            self.particles.push(Particle {
                x: 0.5 + rng.gen_range(-0.04..0.04f32),
                y: 0.6,
                vx: angle.sin() * speed,
                vy: -angle.cos() * speed,
                ttl: rng.gen_range(1.2..2.8f32),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                color: rng.gen_range(0..256),
            });
        }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for p in &mut self.particles {
            let drag = DRAG.powf(dt);
            p.vx *= drag;
            p.vy = p.vy * drag + GRAVITY * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.ttl -= dt;
        }
        self.particles
            .retain(|p| p.ttl > 0.0 && (0.0..=1.0).contains(&p.x) && p.y <= 1.05);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_burst_spawns_full_load() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut fx = Celebration::default();
        assert!(!fx.is_active());
        fx.burst(&mut rng);
        assert_eq!(fx.particles().len(), BURST_SIZE);
        assert!(fx.is_active());
    }

    #[test]
    fn test_particles_launch_upward() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut fx = Celebration::default();
        fx.burst(&mut rng);
        assert!(fx.particles().iter().all(|p| p.vy < 0.0));
    }

    #[test]
    fn test_tick_moves_and_expires() {
        let mut rng = SmallRng::seed_from_u64(15);
        let mut fx = Celebration::default();
        fx.burst(&mut rng);
        let before = fx.particles()[0];

        fx.tick(0.1);
        let after = fx.particles()[0];
        assert!(before.x != after.x || before.y != after.y);

        // Nothing outlives its ttl.
        for _ in 0..100 {
            fx.tick(0.1);
        }
        assert!(!fx.is_active());
    }

    #[test]
    fn test_clear_stops_the_effect() {
        let mut rng = SmallRng::seed_from_u64(16);
        let mut fx = Celebration::default();
        fx.burst(&mut rng);
        fx.clear();
        assert!(!fx.is_active());
    }
}
