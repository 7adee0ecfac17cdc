use crate::coords::Vec2;
use crate::paint::Color;

/// One burst particle, simulated in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in logical pixels.
    pub position: Vec2,
    /// Displacement per step, logical pixels (+Y down).
    pub velocity: Vec2,
    /// Diameter in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Added to `velocity.y` after every step.
    pub gravity: f32,

    age_ms: f32,
    lifetime_ms: f32,
}

impl Particle {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        size: f32,
        color: Color,
        gravity: f32,
        lifetime_ms: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
            gravity,
            age_ms: 0.0,
            lifetime_ms: lifetime_ms.max(0.0),
        }
    }

    #[inline]
    pub fn age_ms(&self) -> f32 {
        self.age_ms
    }

    #[inline]
    pub fn lifetime_ms(&self) -> f32 {
        self.lifetime_ms
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.age_ms < self.lifetime_ms
    }

    /// `1 - age / lifetime`, clamped to [0, 1].
    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.lifetime_ms <= 0.0 {
            return 0.0;
        }
        (1.0 - self.age_ms / self.lifetime_ms).clamp(0.0, 1.0)
    }

    /// Color with the current opacity applied.
    #[inline]
    pub fn faded_color(&self) -> Color {
        self.color.faded(self.opacity())
    }

    /// Ages the particle by `dt_ms` and, if it is still alive, moves it one step.
    ///
    /// Motion is per step (one step per presented frame), not scaled by `dt_ms`.
    /// Returns whether the particle is still alive.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        self.age_ms += dt_ms.max(0.0);
        if !self.is_alive() {
            return false;
        }
        self.position = self.position + self.velocity;
        self.velocity.y += self.gravity;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle() -> Particle {
        Particle::new(Vec2::zero(), Vec2::new(2.0, -1.0), 4.0, Color::black(), 0.5, 100.0)
    }

    #[test]
    fn step_moves_then_applies_gravity() {
        let mut p = particle();
        assert!(p.step(10.0));
        assert_eq!(p.position, Vec2::new(2.0, -1.0));
        assert_eq!(p.velocity, Vec2::new(2.0, -0.5));
        assert!(p.step(10.0));
        assert_eq!(p.position, Vec2::new(4.0, -1.5));
    }

    #[test]
    fn opacity_falls_linearly_with_age() {
        let mut p = particle();
        assert_eq!(p.opacity(), 1.0);
        p.step(25.0);
        assert!((p.opacity() - 0.75).abs() < 1e-6);
        assert!((p.faded_color().a - 0.75).abs() < 1e-6);
    }

    #[test]
    fn expired_particle_does_not_move() {
        let mut p = particle();
        assert!(!p.step(100.0));
        assert_eq!(p.position, Vec2::zero());
        assert_eq!(p.opacity(), 0.0);
    }
}
