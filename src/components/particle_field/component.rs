//! Leptos component wrapping the particle-field canvas.
//!
//! The component creates an HTML canvas element and wires up window-level
//! mousemove and resize handlers. An animation loop runs via
//! `requestAnimationFrame`, advancing the simulation and re-rendering each
//! frame. The loop is owned by a [`FrameHandle`] so unmounting the component
//! cancels any queued frame before the listeners and closures are dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::field::ParticleField;
use super::render;
use super::theme::FieldTheme;

/// Cancellation handle for the `requestAnimationFrame` loop.
///
/// [`schedule`](FrameHandle::schedule) stores the id of the queued frame;
/// [`cancel`](FrameHandle::cancel) takes it and revokes the callback.
/// Cancelling with no frame queued is a no-op, so teardown is idempotent.
#[derive(Clone)]
pub struct FrameHandle {
	window: Window,
	id: Rc<Cell<Option<i32>>>,
}

impl FrameHandle {
	pub fn new(window: Window) -> Self {
		Self {
			window,
			id: Rc::new(Cell::new(None)),
		}
	}

	/// Queue `cb` for the next repaint, remembering its id for cancellation.
	pub fn schedule(&self, cb: &Closure<dyn FnMut()>) {
		if let Ok(id) = self
			.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
		{
			self.id.set(Some(id));
		}
	}

	/// Revoke the queued frame, if any.
	pub fn cancel(&self) {
		if let Some(id) = self.id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
	}

	/// Whether a frame callback is currently queued.
	pub fn is_scheduled(&self) -> bool {
		self.id.get().is_some()
	}
}

/// Bundles the simulation with its visual configuration.
struct FieldContext {
	field: ParticleField,
	theme: FieldTheme,
}

/// Renders the animated particle field on a canvas element.
///
/// By default the canvas fills the viewport, tracks window resizes, and sits
/// behind the page content (`pointer-events: none`). Set `fullscreen = false`
/// with explicit `width`/`height` to embed it at a fixed size instead. The
/// host decides when to mount the component; see [`crate::App`] for the
/// reduced-motion gate.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = true)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<RefCell<Option<FrameHandle>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, pointer_cb_init, resize_cb_init, frame_init) = (
		context.clone(),
		animate.clone(),
		pointer_cb.clone(),
		resize_cb.clone(),
		frame.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let field = ParticleField::new(w, h);
		info!(
			"particle-field: {} particles for {w}x{h} viewport",
			field.particles.len()
		);
		*context_init.borrow_mut() = Some(FieldContext {
			field,
			theme: FieldTheme::default(),
		});

		// The canvas ignores pointer events, so track the pointer on the
		// window and translate into surface-local coordinates.
		let (context_pointer, canvas_pointer) = (context_init.clone(), canvas.clone());
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let rect = canvas_pointer.get_bounding_client_rect();
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				c.field.set_pointer(
					ev.client_x() as f64 - rect.left(),
					ev.client_y() as f64 - rect.top(),
				);
			}
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				// Existing particles stay put; the bounce rule walks any
				// that are now out of bounds back into the viewport.
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.field.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let handle = FrameHandle::new(window.clone());
		*frame_init.borrow_mut() = Some(handle.clone());

		let (context_anim, animate_inner, frame_anim) =
			(context_init.clone(), animate_init.clone(), handle.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.tick();
				render::render(&c.field, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				frame_anim.schedule(cb);
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			handle.schedule(cb);
		}
	});

	// `on_cleanup` demands `Send + Sync`; the captured JS state is single
	// threaded, so assert that with a `SendWrapper`.
	let cleanup_state = SendWrapper::new((frame, pointer_cb, resize_cb, animate, context));
	on_cleanup(move || {
		let (frame, pointer_cb, resize_cb, animate, context) = cleanup_state.take();
		if let Some(handle) = frame.borrow_mut().take() {
			handle.cancel();
		}
		if let Some(window) = web_sys::window() {
			if let Some(cb) = pointer_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = resize_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		// Break the loop's self-reference so the closure can drop.
		animate.borrow_mut().take();
		context.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			style="display: block; position: fixed; inset: 0; pointer-events: none;"
		/>
	}
}
