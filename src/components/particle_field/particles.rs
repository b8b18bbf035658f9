//! A single drifting dot with a bounded lifetime.

use super::types::Vec2;

/// Simulation cadence in ticks per second.
pub const TICK_RATE: f64 = 60.0;

/// Fixed time step consumed by every tick, in seconds.
pub const TICK_SECONDS: f64 = 1.0 / TICK_RATE;

/// Key of a particle within its owning system. Never reused.
pub type ParticleId = u64;

/// Outcome of advancing a particle by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleStatus {
	Alive,
	/// Lifetime is used up; the owner must drop the particle.
	Expired,
}

/// A single animated dot.
///
/// The particle knows its owner only through `id`: it reports expiry from
/// [`Particle::tick`] and the system removes the entry.
#[derive(Clone, Debug)]
pub struct Particle {
	pub id: ParticleId,
	pub position: Vec2,
	pub diameter: f64,
	/// Remaining lifetime in seconds.
	pub life: f64,
	/// Units per second; positive `y` moves up the screen.
	pub velocity: Vec2,
	ticks_left: u64,
	expired: bool,
}

impl Particle {
	pub fn spawn(id: ParticleId, position: Vec2, diameter: f64, life: f64, velocity: Vec2) -> Self {
		Self {
			id,
			position,
			diameter,
			life,
			velocity,
			ticks_left: lifetime_ticks(life),
			expired: false,
		}
	}

	/// Advance one fixed step. Once expired, further calls change nothing.
	pub fn tick(&mut self) -> ParticleStatus {
		if self.expired {
			return ParticleStatus::Expired;
		}

		self.position.x += self.velocity.x * TICK_SECONDS;
		self.position.y -= self.velocity.y * TICK_SECONDS;
		self.life -= TICK_SECONDS;

		self.ticks_left = self.ticks_left.saturating_sub(1);
		if self.ticks_left == 0 {
			self.expired = true;
			ParticleStatus::Expired
		} else {
			ParticleStatus::Alive
		}
	}

	pub fn is_expired(&self) -> bool {
		self.expired
	}

	pub fn radius(&self) -> f64 {
		self.diameter / 2.0
	}
}

/// Number of ticks a lifetime of `life` seconds survives: `ceil(life * 60)`.
///
/// Counted in whole ticks so accumulated `1/60` rounding in `life` cannot
/// shift the expiry tick. Non-positive and NaN lifetimes expire on the first
/// tick.
pub fn lifetime_ticks(life: f64) -> u64 {
	let ticks = (life * TICK_RATE).ceil();
	if ticks > 0.0 { ticks as u64 } else { 0 }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ticks_until_expired(p: &mut Particle) -> u64 {
		let mut n = 0;
		loop {
			n += 1;
			if p.tick() == ParticleStatus::Expired {
				return n;
			}
			assert!(n < 100_000, "particle never expired");
		}
	}

	#[test]
	fn moves_by_velocity_over_sixty_with_y_inverted() {
		let mut p = Particle::spawn(0, Vec2::new(100.0, 100.0), 2.0, 10.0, Vec2::new(60.0, 30.0));
		p.tick();
		assert!((p.position.x - 101.0).abs() < 1e-9);
		assert!((p.position.y - 99.5).abs() < 1e-9);
	}

	#[test]
	fn one_second_of_ticks_covers_velocity() {
		let mut p = Particle::spawn(0, Vec2::new(0.0, 0.0), 2.0, 10.0, Vec2::new(12.0, -6.0));
		for _ in 0..60 {
			p.tick();
		}
		assert!((p.position.x - 12.0).abs() < 1e-9);
		assert!((p.position.y - 6.0).abs() < 1e-9);
		assert!((p.life - 9.0).abs() < 1e-9);
	}

	#[test]
	fn expires_after_ceil_life_times_sixty_ticks() {
		for (life, expected) in [(1.0, 60), (0.5, 30), (0.01, 1), (2.25, 135), (1.0 / 60.0, 1)] {
			let mut p = Particle::spawn(0, Vec2::default(), 1.0, life, Vec2::default());
			assert_eq!(ticks_until_expired(&mut p), expected, "life = {life}");
		}
	}

	#[test]
	fn fractional_tick_rounds_up() {
		// 0.025 s is 1.5 ticks
		let mut p = Particle::spawn(0, Vec2::default(), 1.0, 0.025, Vec2::default());
		assert_eq!(p.tick(), ParticleStatus::Alive);
		assert_eq!(p.tick(), ParticleStatus::Expired);
	}

	#[test]
	fn non_positive_life_expires_on_first_tick() {
		for life in [0.0, -3.0, f64::NAN] {
			let mut p = Particle::spawn(0, Vec2::default(), 1.0, life, Vec2::default());
			assert_eq!(p.tick(), ParticleStatus::Expired);
		}
	}

	#[test]
	fn ticks_after_expiry_are_inert() {
		let mut p = Particle::spawn(0, Vec2::new(5.0, 5.0), 1.0, 1.0 / 60.0, Vec2::new(60.0, 60.0));
		assert_eq!(p.tick(), ParticleStatus::Expired);
		let frozen = p.position;
		assert_eq!(p.tick(), ParticleStatus::Expired);
		assert_eq!(p.position, frozen);
		assert!(p.is_expired());
	}

	#[test]
	fn radius_is_half_diameter() {
		let p = Particle::spawn(0, Vec2::default(), 3.0, 1.0, Vec2::default());
		assert_eq!(p.radius(), 1.5);
	}
}
