//! cube-backdrop: animated particle background for the cube-roll rewards webview.
//!
//! This crate provides a WASM canvas component that fills the viewport with a
//! slowly drifting, self-replenishing field of white particles rendered behind
//! the mini-app content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	Particle, ParticleBackground, ParticleConfig, ParticleSystem, Range, SpeedRange, Vec2,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("cube-backdrop: logging initialized");
}

/// Parse particle settings from embedded JSON, falling back to defaults.
pub fn parse_config(json_text: &str) -> ParticleConfig {
	match serde_json::from_str::<ParticleConfig>(json_text) {
		Ok(config) => {
			info!(
				"cube-backdrop: loaded config for {} particles",
				config.amount
			);
			config
		}
		Err(e) => {
			warn!("cube-backdrop: failed to parse particle config: {}", e);
			ParticleConfig::default()
		}
	}
}

/// Load particle settings from a script element with id="particle-config".
/// Expected format: JSON with { amount, diameter, life, speed: { x, y } }
fn load_config() -> Option<ParticleConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	Some(parse_config(&json_text))
}

/// Main application component.
/// Mounts the particle background behind the page's content slot.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Cube Roll" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config />
		<div id="app-content" class="app-content"></div>
	}
}
