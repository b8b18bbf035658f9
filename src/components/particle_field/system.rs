//! Self-replenishing particle population.
//!
//! The system owns every [`Particle`], the drawing surface and the random
//! source. Time advances only through [`ParticleSystem::tick`], one fixed 60 Hz
//! step per call, which runs each particle's lifetime step followed by the
//! population step. Rendering is a separate pass so the driver can run several
//! ticks per displayed frame.

use std::collections::HashMap;
use std::f64::consts::TAU;

use log::{debug, info, warn};

use super::particles::{Particle, ParticleId, ParticleStatus};
use super::random::{Range, RandomSource};
use super::surface::Surface;
use super::theme::ParticleStyle;
use super::types::{ParticleConfig, SpeedRange, Vec2};

/// Owner and manager of a bounded, self-replenishing particle population.
pub struct ParticleSystem<S: Surface, R: RandomSource> {
	surface: S,
	rng: R,
	style: ParticleStyle,
	size: Vec2,
	amount: usize,
	diameter: Range,
	life: Range,
	speed: SpeedRange,
	particles: HashMap<ParticleId, Particle>,
	next_id: ParticleId,
	running: bool,
}

impl<S: Surface, R: RandomSource> ParticleSystem<S, R> {
	/// Take ownership of `surface` and size it to `size`. Nothing runs until
	/// [`init`](Self::init).
	pub fn new(mut surface: S, size: Vec2, rng: R) -> Self {
		surface.set_size(size);
		let defaults = ParticleConfig::default();

		Self {
			surface,
			rng,
			style: ParticleStyle::default(),
			size,
			amount: defaults.amount,
			diameter: defaults.diameter,
			life: defaults.life,
			speed: defaults.speed,
			particles: HashMap::new(),
			next_id: 0,
			running: false,
		}
	}

	/// Apply spawn parameters. Ignored once the system is running.
	pub fn configure(&mut self, config: &ParticleConfig) {
		if self.running {
			warn!("cube-backdrop: configure() after init() ignored");
			return;
		}
		self.amount = config.amount;
		self.diameter = config.diameter;
		self.life = config.life;
		self.speed = config.speed;
	}

	pub fn set_style(&mut self, style: ParticleStyle) {
		self.style = style;
	}

	/// Spawn one particle with parameters drawn from the configured ranges.
	pub fn create_particle(&mut self) -> ParticleId {
		let id = self.next_id;
		self.next_id += 1;

		let position = Vec2::new(
			Range::new(0.0, self.size.x).sample(&mut self.rng),
			Range::new(0.0, self.size.y).sample(&mut self.rng),
		);
		let diameter = self.diameter.sample(&mut self.rng);
		let life = self.life.sample(&mut self.rng);
		let velocity = Vec2::new(
			self.speed.x.sample(&mut self.rng),
			self.speed.y.sample(&mut self.rng),
		);

		self.particles
			.insert(id, Particle::spawn(id, position, diameter, life, velocity));
		id
	}

	/// Fill the population up to the target and start ticking.
	pub fn init(&mut self) {
		while self.particles.len() < self.amount {
			self.create_particle();
		}
		self.running = true;
		info!(
			"cube-backdrop: particle system started with {} particles on {}x{}",
			self.particles.len(),
			self.size.x,
			self.size.y
		);
	}

	/// Advance the simulation by one fixed step. No-op unless running.
	pub fn tick(&mut self) {
		if !self.running {
			return;
		}

		// Lifetime step: expired particles leave the map in the same pass.
		self.particles
			.retain(|_, p| p.tick() == ParticleStatus::Alive);

		// Population step: at most one spawn per tick, never culls.
		if self.particles.len() < self.amount {
			self.create_particle();
		}
	}

	/// Clear the surface and draw every live particle as a filled circle.
	pub fn render(&mut self) {
		self.surface.clear_rect(0.0, 0.0, self.size.x, self.size.y);
		self.surface.set_fill_color(self.style.fill);

		for p in self.particles.values() {
			self.surface.begin_path();
			self.surface
				.arc(p.position.x, p.position.y, p.radius(), 0.0, TAU);
			self.surface.close_path();
			self.surface.fill();
		}
	}

	/// Resize the surface to `new_size` and move particles so they keep their
	/// relative place on it.
	///
	/// `old_size` must be the size captured *before* the canvas itself was
	/// resized; the rescale ratio is `new_size / old_size` per axis. An axis
	/// whose old extent is zero or not finite is left unscaled.
	pub fn resize(&mut self, new_size: Vec2, old_size: Vec2) {
		self.surface.set_size(new_size);

		let scale_x = axis_scale(new_size.x, old_size.x);
		let scale_y = axis_scale(new_size.y, old_size.y);
		for p in self.particles.values_mut() {
			if let Some(sx) = scale_x {
				p.position.x *= sx;
			}
			if let Some(sy) = scale_y {
				p.position.y *= sy;
			}
		}

		self.size = new_size;
		debug!(
			"cube-backdrop: resized {}x{} -> {}x{}",
			old_size.x, old_size.y, new_size.x, new_size.y
		);
	}

	/// Drop a particle by id. Returns `false` if it was already gone.
	pub fn remove_particle(&mut self, id: ParticleId) -> bool {
		self.particles.remove(&id).is_some()
	}

	/// Halt all periodic work and release every particle.
	pub fn stop(&mut self) {
		if !self.running && self.particles.is_empty() {
			return;
		}
		self.running = false;
		self.particles.clear();
		info!("cube-backdrop: particle system stopped");
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn particles(&self) -> impl Iterator<Item = &Particle> {
		self.particles.values()
	}

	pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
		self.particles.get(&id)
	}

	pub fn size(&self) -> Vec2 {
		self.size
	}

	pub fn amount(&self) -> usize {
		self.amount
	}

	pub fn next_id(&self) -> ParticleId {
		self.next_id
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}
}

fn axis_scale(new: f64, old: f64) -> Option<f64> {
	(old != 0.0 && old.is_finite()).then(|| new / old)
}
