//! Leptos components hosting the ambient canvases.
//!
//! Each component creates its canvas, seeds the animator state once the
//! element is mounted, then advances and renders it back-to-back every frame.
//! A missing 2D context skips the effect entirely. The CSS decorations at the
//! bottom only sample their parameters once and leave motion to keyframes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::Style;
use log::info;
use rand::thread_rng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::particles::DustField;
use super::render;
use super::ring::{OrbitRing, YieldRing};
use super::sparkles::{KEYFRAMES, orbital_sparkles, sample_flakes};
use super::theme::{DustStyle, FlakeStyle, OrbitStyle, SparkleStyle, YieldStyle};
use crate::components::surface::{context_2d, frame_loop, hidpi_context, liveness};

fn viewport(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(600.0),
	)
}

/// Full-viewport floating dust behind all pages. Follows window resizes.
#[component]
pub fn DustCanvas(#[prop(optional)] style: DustStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<DustField>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = liveness();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if !style.enabled || field.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		let Some(ctx) = context_2d(&canvas) else {
			return;
		};

		*field.borrow_mut() = Some(DustField::new(&style, w, h));
		info!("bolt-site: dust field started with {} particles", style.count);

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let field_anim = field.clone();
		frame_loop(alive.clone(), move |_| {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.advance_frame();
				render::draw_dust(&ctx, f);
			}
			true
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="dust-canvas"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}

/// Orbiting sparkles around the profile avatar.
#[component]
pub fn OrbitRingCanvas(#[prop(optional)] style: OrbitStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let started = Rc::new(Cell::new(false));
	let alive = liveness();
	let extent = style.geometry.extent;

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if started.replace(true) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = hidpi_context(&canvas, extent, extent) else {
			return;
		};

		let mut ring = OrbitRing::new(&style, &mut thread_rng());
		frame_loop(alive.clone(), move |_| {
			ring.advance_frame();
			render::draw_orbit_ring(&ctx, &ring);
			true
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="orbit-ring-canvas"
			style=format!("width: {extent}px; height: {extent}px;")
		/>
	}
}

/// Animated yield ring in the fund page header.
#[component]
pub fn YieldRingCanvas(#[prop(optional)] style: YieldStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let started = Rc::new(Cell::new(false));
	let alive = liveness();
	let extent = style.geometry.extent;

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if started.replace(true) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = hidpi_context(&canvas, extent, extent) else {
			return;
		};

		let mut ring = YieldRing::new(&style, &mut thread_rng());
		frame_loop(alive.clone(), move |_| {
			ring.advance_frame();
			render::draw_yield_ring(&ctx, &ring);
			true
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="yield-ring-canvas"
			style=format!("width: {extent}px; height: {extent}px;")
		/>
	}
}

/// Injects the keyframes used by [`GoldenFlakes`] and [`OrbitalSparkles`].
#[component]
pub fn AmbientKeyframes() -> impl IntoView {
	view! { <Style id="ambient-keyframes">{KEYFRAMES}</Style> }
}

/// Warm flakes drifting down the middle of the viewport.
#[component]
pub fn GoldenFlakes(#[prop(optional)] style: FlakeStyle) -> impl IntoView {
	let flakes = sample_flakes(&style, &mut thread_rng());

	view! {
		<div
			class="flakes"
			style="position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 0;"
		>
			{flakes.into_iter().map(|flake| view! { <div class="flake" style=flake.css()></div> }).collect_view()}
		</div>
	}
}

/// `count` sparkles floating around the center of the enclosing element.
#[component]
pub fn OrbitalSparkles(count: usize, #[prop(optional)] style: SparkleStyle) -> impl IntoView {
	let sparkles = orbital_sparkles(count, &style, &mut thread_rng());

	view! {
		<div class="orbital-sparkles" style="position: absolute; inset: 0; pointer-events: none;">
			{sparkles
				.into_iter()
				.map(|sparkle| view! { <div class="orbital-sparkle" style=sparkle.css(&style)></div> })
				.collect_view()}
		</div>
	}
}
