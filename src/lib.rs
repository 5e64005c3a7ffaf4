//! particle-field: animated canvas backdrop for a personal site.
//!
//! This crate provides a WASM-based particle animation component: drifting
//! particles that bounce off the viewport edges, lean toward the pointer, and
//! connect to close neighbors with distance-faded lines. The [`App`] shell
//! mounts it fullscreen and honors the user's reduced-motion preference.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};

// Pulled in for its "js" feature so `rand` has an entropy source on wasm.
use getrandom as _;

pub mod components;

pub use components::particle_field::{
	FieldTheme, FrameHandle, Particle, ParticleColor, ParticleField, ParticleFieldCanvas,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// The `prefers-reduced-motion: reduce` media query, when the host exposes one.
fn reduced_motion_query() -> Option<MediaQueryList> {
	web_sys::window()?
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()?
}

/// Main application component.
///
/// Mounts the particle canvas fullscreen behind a small overlay. The canvas
/// is only constructed while the user allows motion: when the reduced-motion
/// preference flips at runtime the component is torn down or rebuilt to match.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let query = reduced_motion_query();
	let initial = query.as_ref().map(|q| !q.matches()).unwrap_or(true);
	let (animated, set_animated) = signal(initial);

	if let Some(query) = query {
		let media_cb: Rc<RefCell<Option<Closure<dyn FnMut(MediaQueryListEvent)>>>> =
			Rc::new(RefCell::new(None));
		*media_cb.borrow_mut() = Some(Closure::new(move |ev: MediaQueryListEvent| {
			info!("particle-field: reduced-motion preference changed, matches={}", ev.matches());
			set_animated.set(!ev.matches());
		}));
		if let Some(ref cb) = *media_cb.borrow() {
			let _ = query.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
		}

		// `on_cleanup` demands `Send + Sync`; the captured JS state is single
		// threaded, so assert that with a `SendWrapper`.
		let cleanup_state = send_wrapper::SendWrapper::new((query, media_cb));
		on_cleanup(move || {
			let (query, media_cb) = cleanup_state.take();
			if let Some(cb) = media_cb.borrow_mut().take() {
				let _ = query
					.remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
			}
		});
	}

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Show when=move || animated.get()>
			<ParticleFieldCanvas fullscreen=true />
		</Show>
		<div class="field-overlay">
			<h1>"Particle Field"</h1>
			<p class="subtitle">"Move the pointer to draw nearby particles in."</p>
		</div>
	}
}
