//! Geometry and tunable parameters for the particle field.

use serde::Deserialize;

use super::random::Range;

/// 2D vector used for positions, velocities and canvas sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Vec2 {
	pub x: f64,
	pub y: f64,
}

impl Vec2 {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Per-axis spawn velocity ranges, in units per second.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SpeedRange {
	pub x: Range,
	pub y: Range,
}

/// Tunable spawn parameters, applied before the system starts.
///
/// Deserialized from the page's embedded JSON; any omitted field keeps its
/// default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Steady-state population.
	pub amount: usize,
	/// Dot diameter in pixels.
	pub diameter: Range,
	/// Lifetime in seconds.
	pub life: Range,
	pub speed: SpeedRange,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			amount: 60,
			diameter: Range::new(1.0, 3.0),
			life: Range::new(3.0, 8.0),
			speed: SpeedRange {
				x: Range::new(-10.0, 10.0),
				y: Range::new(5.0, 30.0),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config: ParticleConfig =
			serde_json::from_str(r#"{ "amount": 12, "life": { "min": 1, "max": 2 } }"#).unwrap();
		assert_eq!(config.amount, 12);
		assert_eq!(config.life, Range::new(1.0, 2.0));
		assert_eq!(config.diameter, ParticleConfig::default().diameter);
		assert_eq!(config.speed, ParticleConfig::default().speed);
	}

	#[test]
	fn full_json_roundtrips_speed_axes() {
		let config: ParticleConfig = serde_json::from_str(
			r#"{
				"amount": 5,
				"diameter": { "min": 2, "max": 5 },
				"life": { "min": 0.5, "max": 1.5 },
				"speed": { "x": { "min": -1, "max": 1 }, "y": { "min": 3, "max": 4 } }
			}"#,
		)
		.unwrap();
		assert_eq!(config.speed.x, Range::new(-1.0, 1.0));
		assert_eq!(config.speed.y, Range::new(3.0, 4.0));
	}

	#[test]
	fn negative_amount_is_rejected_by_parser() {
		assert!(serde_json::from_str::<ParticleConfig>(r#"{ "amount": -3 }"#).is_err());
	}
}
