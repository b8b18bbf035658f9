//! Animated particle background.
//!
//! A fixed-step simulation of short-lived white dots drifting across a
//! full-viewport canvas:
//! - [`ParticleSystem`] keeps the population at its target, one spawn per tick
//! - [`Particle`] drifts at a constant velocity and expires after its lifetime
//! - [`FixedStep`] maps animation frames onto 60 Hz ticks
//! - [`ParticleBackground`] mounts it all in a Leptos view
//!
//! # Example
//!
//! ```ignore
//! use cube_backdrop::{ParticleBackground, ParticleConfig};
//!
//! let config = ParticleConfig { amount: 120, ..Default::default() };
//! view! { <ParticleBackground config=config /> }
//! ```

mod clock;
mod component;
mod particles;
mod random;
mod surface;
mod system;
pub mod theme;
mod types;

pub use clock::{FixedStep, MAX_TICKS_PER_FRAME};
pub use component::ParticleBackground;
pub use particles::{Particle, ParticleId, ParticleStatus, TICK_RATE, TICK_SECONDS, lifetime_ticks};
pub use random::{BrowserRandom, RandomSource, Range, SeededRandom};
pub use surface::{CanvasSurface, Surface};
pub use system::ParticleSystem;
pub use theme::{Color, ParticleStyle};
pub use types::{ParticleConfig, SpeedRange, Vec2};
