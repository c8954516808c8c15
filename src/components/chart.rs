//! Home page price chart with a one-shot reveal animation.

use std::f64::consts::PI;

use leptos::prelude::*;
use rand::{Rng, thread_rng};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::ambient::theme::{AMBER, Color};
use super::surface::{frame_loop, hidpi_context, liveness};

const SEGMENTS: usize = 14;
const START_PRICE: f64 = 0.12;
const PRICE_FLOOR: f64 = 0.08;
const PRICE_CEIL: f64 = 0.3;

/// Random-walk price points already projected to surface coordinates.
#[derive(Clone, Debug)]
pub struct PriceSeries {
	pub points: Vec<(f64, f64)>,
}

impl PriceSeries {
	/// Walk with an upward bias, clamped to the display band.
	pub fn generate<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
		let mut price = START_PRICE;
		let points = (0..=SEGMENTS)
			.map(|i| {
				let change = (rng.gen_range(0.0..1.0) - 0.3) * 0.02;
				price = (price + change).clamp(PRICE_FLOOR, PRICE_CEIL);
				(
					i as f64 / SEGMENTS as f64 * width,
					height - 20.0 - ((price - 0.05) / 0.3) * (height - 40.0),
				)
			})
			.collect();
		Self { points }
	}
}

/// Reveal progress: the chart draws left to right until every point is visible.
#[derive(Clone, Debug, Default)]
pub struct Reveal {
	progress: f64,
}

impl Reveal {
	pub fn visible(&self, total: usize) -> usize {
		(self.progress.min(1.0) * total as f64).floor() as usize
	}

	/// Step the reveal. Returns `false` once the final frame has been shown.
	pub fn step(&mut self, total: usize) -> bool {
		if self.visible(total) < 2 {
			self.progress += 0.03;
			true
		} else if self.progress < 1.0 {
			self.progress += 0.02;
			true
		} else {
			false
		}
	}
}

/// Traces the quadratic-smoothed path through the first `visible` points.
fn trace(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
	for pair in points.windows(2) {
		let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
		let _ = ctx.quadratic_curve_to(x0, y0, (x0 + x1) / 2.0, (y0 + y1) / 2.0);
	}
	if let Some(&(x, y)) = points.last() {
		ctx.line_to(x, y);
	}
}

fn draw_chart(
	ctx: &CanvasRenderingContext2d,
	series: &PriceSeries,
	visible: usize,
	width: f64,
	height: f64,
) {
	ctx.clear_rect(0.0, 0.0, width, height);
	let points = &series.points[..visible.min(series.points.len())];
	let (Some(&(first_x, first_y)), Some(&(last_x, _))) = (points.first(), points.last()) else {
		return;
	};

	let fill = ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
	let _ = fill.add_color_stop(0.0, &AMBER.with_alpha(0.4).to_css());
	let _ = fill.add_color_stop(0.5, &AMBER.with_alpha(0.15).to_css());
	let _ = fill.add_color_stop(1.0, &AMBER.with_alpha(0.0).to_css());

	ctx.begin_path();
	ctx.move_to(first_x, height);
	ctx.line_to(first_x, first_y);
	trace(ctx, points);
	ctx.line_to(last_x, height);
	ctx.close_path();
	#[allow(deprecated)]
	ctx.set_fill_style(&fill);
	ctx.fill();

	ctx.begin_path();
	ctx.move_to(first_x, first_y);
	trace(ctx, points);
	ctx.set_stroke_style_str(&AMBER.to_css());
	ctx.set_line_width(3.0);
	ctx.set_line_cap("round");
	ctx.set_line_join("round");
	ctx.set_shadow_color(&AMBER.with_alpha(0.6).to_css());
	ctx.set_shadow_blur(15.0);
	ctx.stroke();
	ctx.set_shadow_blur(0.0);

	for &(x, y) in points {
		if let Ok(halo) = ctx.create_radial_gradient(x, y, 0.0, x, y, 8.0) {
			let _ = halo.add_color_stop(0.0, &AMBER.with_alpha(0.3).to_css());
			let _ = halo.add_color_stop(1.0, &AMBER.with_alpha(0.0).to_css());
			ctx.begin_path();
			let _ = ctx.arc(x, y, 8.0, 0.0, PI * 2.0);
			#[allow(deprecated)]
			ctx.set_fill_style(&halo);
			ctx.fill();
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, 5.0, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&AMBER.to_css());
		ctx.fill();

		ctx.begin_path();
		let _ = ctx.arc(x, y, 2.5, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&Color::rgb(255, 255, 255).to_css());
		ctx.fill();
	}
}

/// Price chart sized to its container. A fresh series is drawn each time it mounts.
#[component]
pub fn PriceChart() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let alive = liveness();

	Effect::new(move |prev: Option<bool>| {
		if prev == Some(true) {
			return true;
		}
		let Some(canvas) = canvas_ref.get() else {
			return false;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (width, height) = (rect.width(), rect.height());
		let Some(ctx) = hidpi_context(&canvas, width, height) else {
			return true;
		};

		let series = PriceSeries::generate(&mut thread_rng(), width, height);
		let total = series.points.len();
		let mut reveal = Reveal::default();
		frame_loop(alive.clone(), move |_| {
			let visible = reveal.visible(total);
			if visible >= 2 {
				draw_chart(&ctx, &series, visible, width, height);
			}
			reveal.step(total)
		});
		true
	});

	view! {
		<div class="chart-card">
			<canvas node_ref=canvas_ref class="price-chart" style="width: 100%; height: 180px;" />
		</div>
	}
}
