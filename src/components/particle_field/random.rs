//! Uniform draws over closed `{min, max}` spawn ranges.

use serde::Deserialize;

/// A `{min, max}` pair bounding a uniformly drawn spawn parameter.
///
/// Nothing enforces `min <= max`. An inverted range still produces values
/// (between `max` and `min`), which keeps misconfigured pages animating.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a value in `[min, max)` from `rng`.
	pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
		rng.next_unit() * (self.max - self.min) + self.min
	}
}

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
	fn next_unit(&mut self) -> f64;
}

/// `Math.random()` from the host page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
	fn next_unit(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Deterministic sine-hash sequence, for reproducible layouts and tests.
#[derive(Clone, Debug)]
pub struct SeededRandom {
	seed: f64,
	counter: u64,
}

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self {
			seed: seed as f64,
			counter: 0,
		}
	}
}

impl RandomSource for SeededRandom {
	fn next_unit(&mut self) -> f64 {
		self.counter += 1;
		let x = (self.seed * 12.9898 + self.counter as f64 * 78.233).sin() * 43758.5453;
		let unit = x - x.floor();
		// x - floor(x) rounds up to 1.0 for tiny negative x
		if unit >= 1.0 { 0.0 } else { unit }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(f64);

	impl RandomSource for Fixed {
		fn next_unit(&mut self) -> f64 {
			self.0
		}
	}

	#[test]
	fn sample_scales_and_shifts_unit_value() {
		let range = Range::new(2.0, 6.0);
		assert_eq!(range.sample(&mut Fixed(0.0)), 2.0);
		assert_eq!(range.sample(&mut Fixed(0.5)), 4.0);
		assert_eq!(range.sample(&mut Fixed(0.25)), 3.0);
	}

	#[test]
	fn inverted_range_is_still_computed() {
		let range = Range::new(5.0, 1.0);
		assert_eq!(range.sample(&mut Fixed(0.0)), 5.0);
		assert_eq!(range.sample(&mut Fixed(0.5)), 3.0);
	}

	#[test]
	fn degenerate_range_returns_min() {
		let range = Range::new(3.0, 3.0);
		assert_eq!(range.sample(&mut Fixed(0.7)), 3.0);
	}

	#[test]
	fn seeded_values_stay_in_unit_interval() {
		let mut rng = SeededRandom::new(42);
		for _ in 0..10_000 {
			let v = rng.next_unit();
			assert!((0.0..1.0).contains(&v), "out of range: {v}");
		}
	}

	#[test]
	fn same_seed_same_sequence() {
		let mut a = SeededRandom::new(7);
		let mut b = SeededRandom::new(7);
		for _ in 0..100 {
			assert_eq!(a.next_unit(), b.next_unit());
		}
	}
}
