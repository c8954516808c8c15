//! Drawing-surface plumbing shared by every animated canvas.
//!
//! `frame_loop` chains `requestAnimationFrame` through a self-referencing
//! closure. A loop ends when its callback returns `false` or when the owning
//! view clears its liveness flag; nothing else cancels it. An ended loop
//! empties its closure slot so the chain is freed.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Liveness flag cleared when the current reactive owner is disposed.
pub fn liveness() -> Arc<AtomicBool> {
	let alive = Arc::new(AtomicBool::new(true));
	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));
	alive
}

/// Slot a self-scheduling callback keeps a handle to. While filled, the
/// callback and the slot keep each other alive.
type FrameSlot<C> = Rc<RefCell<Option<C>>>;

/// Empties the slot, breaking the callback -> slot -> callback cycle so the
/// callback and everything it captured can be freed.
fn release<C>(slot: &RefCell<Option<C>>) {
	let finished = slot.borrow_mut().take();
	drop(finished);
}

/// Runs `frame` once per display refresh with the rAF timestamp in milliseconds.
pub fn frame_loop(alive: Arc<AtomicBool>, mut frame: impl FnMut(f64) -> bool + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let animate: FrameSlot<Closure<dyn FnMut(f64)>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();

	*animate.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
		if !alive.load(Ordering::Relaxed) || !frame(timestamp) {
			// Dropping the running closure is safe: wasm-bindgen defers the
			// free until this invocation returns.
			release(&animate_inner);
			return;
		}
		if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
	}
}

/// The canvas' 2D context, or `None` when the surface is unavailable.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		warn!("bolt-site: 2d context unavailable, skipping canvas effect");
	}
	ctx
}

/// Sizes a canvas for crisp output at the device pixel ratio and returns a
/// context that draws in logical (CSS pixel) coordinates.
pub fn hidpi_context(
	canvas: &HtmlCanvasElement,
	width: f64,
	height: f64,
) -> Option<CanvasRenderingContext2d> {
	let dpr = web_sys::window()
		.map(|w| w.device_pixel_ratio())
		.filter(|r| *r > 0.0)
		.unwrap_or(1.0);
	canvas.set_width((width * dpr) as u32);
	canvas.set_height((height * dpr) as u32);

	let ctx = context_2d(canvas)?;
	let _ = ctx.scale(dpr, dpr);
	Some(ctx)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn release_frees_self_referencing_callback() {
		let captured = Rc::new(());
		let slot: FrameSlot<Box<dyn FnMut()>> = Rc::new(RefCell::new(None));
		let (slot_inner, captured_inner) = (slot.clone(), captured.clone());
		*slot.borrow_mut() = Some(Box::new(move || {
			let _ = (&slot_inner, &captured_inner);
		}));
		assert_eq!(Rc::strong_count(&slot), 2);
		assert_eq!(Rc::strong_count(&captured), 2);

		release(&slot);
		assert!(slot.borrow().is_none());
		assert_eq!(Rc::strong_count(&slot), 1);
		assert_eq!(Rc::strong_count(&captured), 1);
	}

	#[test]
	fn release_of_empty_slot_is_noop() {
		let slot: FrameSlot<Box<dyn FnMut()>> = Rc::new(RefCell::new(None));
		release(&slot);
		assert!(slot.borrow().is_none());
	}
}
