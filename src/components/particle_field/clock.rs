//! Turns `requestAnimationFrame` timestamps into a whole number of fixed ticks.
//!
//! The simulation only ever advances in 1/60 s steps. This accumulator decides
//! how many of those steps a displayed frame owes, so a 120 Hz display ticks
//! every other frame and a 30 Hz one ticks twice per frame.

use super::particles::TICK_SECONDS;

/// Upper bound on ticks replayed in one frame (a quarter second).
pub const MAX_TICKS_PER_FRAME: u32 = 15;

/// Fixed-step accumulator fed with frame timestamps in milliseconds.
#[derive(Clone, Debug, Default)]
pub struct FixedStep {
	last_ms: Option<f64>,
	accumulated: f64,
}

impl FixedStep {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a frame at `now_ms` and return how many ticks to run.
	///
	/// The first frame only sets the baseline. Gaps longer than
	/// [`MAX_TICKS_PER_FRAME`] ticks (a hidden tab, a debugger pause) are
	/// dropped rather than replayed.
	pub fn advance(&mut self, now_ms: f64) -> u32 {
		let Some(last) = self.last_ms.replace(now_ms) else {
			return 0;
		};

		let elapsed = (now_ms - last) / 1000.0;
		if !elapsed.is_finite() || elapsed <= 0.0 {
			return 0;
		}
		self.accumulated += elapsed;

		let owed = (self.accumulated / TICK_SECONDS).floor();
		if owed >= MAX_TICKS_PER_FRAME as f64 {
			self.accumulated = 0.0;
			return MAX_TICKS_PER_FRAME;
		}

		let ticks = owed as u32;
		self.accumulated -= ticks as f64 * TICK_SECONDS;
		ticks
	}

	/// Forget the baseline so the next frame starts fresh.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}
