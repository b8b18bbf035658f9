//! Leptos component mounting the particle field behind the page.
//!
//! The component sizes a fixed canvas to the window, builds a
//! [`ParticleSystem`] from the supplied config and drives it from
//! `requestAnimationFrame`: each frame runs however many fixed ticks the
//! [`FixedStep`] clock owes, then renders once. Window resizes are forwarded
//! with the pre-resize size. Unmounting cancels the pending frame, detaches the
//! resize listener and stops the system.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::clock::FixedStep;
use super::random::BrowserRandom;
use super::surface::CanvasSurface;
use super::system::ParticleSystem;
use super::types::{ParticleConfig, Vec2};

type Shared<T> = Rc<RefCell<Option<T>>>;

/// Live simulation plus the bookkeeping for its animation frame.
struct Backdrop {
	system: ParticleSystem<CanvasSurface, BrowserRandom>,
	clock: FixedStep,
	frame_id: Option<i32>,
}

fn window_size(window: &Window) -> Option<Vec2> {
	Some(Vec2::new(
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn request_frame(animate: &Shared<Closure<dyn FnMut(f64)>>) -> Option<i32> {
	let animate = animate.borrow();
	let cb = animate.as_ref()?;
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

fn teardown(
	backdrop: &Shared<Backdrop>,
	animate: &Shared<Closure<dyn FnMut(f64)>>,
	resize_cb: &Shared<Closure<dyn FnMut()>>,
) {
	let window = web_sys::window();

	if let Some(mut b) = backdrop.borrow_mut().take() {
		if let (Some(win), Some(id)) = (window.as_ref(), b.frame_id) {
			let _ = win.cancel_animation_frame(id);
		}
		b.system.stop();
	}
	if let Some(cb) = resize_cb.borrow_mut().take() {
		if let Some(win) = window.as_ref() {
			let _ = win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}
	animate.borrow_mut().take();
	debug!("cube-backdrop: particle background unmounted");
}

/// Full-viewport animated particle background.
///
/// Spawn parameters come from `config`; when omitted the built-in defaults
/// are used. The canvas ignores pointer events and sits below page content.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<ParticleConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default();
	let backdrop: Shared<Backdrop> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut(f64)>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let (backdrop_init, animate_init, resize_cb_init) =
		(backdrop.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if backdrop_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let size = window_size(&window).unwrap_or(Vec2::new(800.0, 600.0));

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("cube-backdrop: canvas has no 2d context, background disabled");
			return;
		};

		let mut system =
			ParticleSystem::new(CanvasSurface::new(canvas, ctx), size, BrowserRandom);
		system.configure(&config);
		system.init();

		*backdrop_init.borrow_mut() = Some(Backdrop {
			system,
			clock: FixedStep::new(),
			frame_id: None,
		});

		let backdrop_resize = backdrop_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(new_size) = web_sys::window().as_ref().and_then(window_size) else {
				return;
			};
			if let Some(ref mut b) = *backdrop_resize.borrow_mut() {
				// Capture the old size before the surface is touched.
				let old_size = b.system.size();
				b.system.resize(new_size, old_size);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (backdrop_anim, animate_inner) = (backdrop_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			let mut guard = backdrop_anim.borrow_mut();
			let Some(b) = guard.as_mut() else {
				return;
			};
			for _ in 0..b.clock.advance(now) {
				b.system.tick();
			}
			b.system.render();
			b.frame_id = request_frame(&animate_inner);
		}));

		let frame_id = request_frame(&animate_init);
		if let Some(ref mut b) = *backdrop_init.borrow_mut() {
			b.frame_id = frame_id;
		}
	});

	let handles = StoredValue::new_local((backdrop, animate, resize_cb));
	on_cleanup(move || {
		let _ = handles.try_with_value(|(backdrop, animate, resize_cb)| {
			teardown(backdrop, animate, resize_cb)
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
