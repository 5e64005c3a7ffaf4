//! Browser-side smoke tests, run with `wasm-pack test --headless`.
//!
//! Host builds compile this file to nothing; the simulation logic itself is
//! covered by the unit tests in `src/components/particle_field/field.rs`.

#![cfg(target_arch = "wasm32")]

use particle_field::{FrameHandle, ParticleField};
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn field_constructs_and_ticks_in_the_browser() {
	let mut field = ParticleField::new(1000.0, 800.0);
	assert_eq!(field.particles.len(), 50);

	field.set_pointer(500.0, 400.0);
	for _ in 0..10 {
		field.tick();
	}

	for p in &field.particles {
		assert!(p.vx.is_finite());
		assert!(p.vy.is_finite());
	}
}

#[wasm_bindgen_test]
fn frame_handle_cancel_is_idempotent() {
	let window = web_sys::window().unwrap();
	let handle = FrameHandle::new(window);
	let cb: Closure<dyn FnMut()> = Closure::new(|| {});

	handle.schedule(&cb);
	assert!(handle.is_scheduled());

	handle.cancel();
	assert!(!handle.is_scheduled());

	// Cancelling again is a no-op, not an error.
	handle.cancel();
	assert!(!handle.is_scheduled());
}
