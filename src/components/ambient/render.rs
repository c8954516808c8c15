//! Canvas rendering for the ambient effects.
//!
//! Each draw function clears its surface and repaints the whole frame. The
//! ring variants draw in logical coordinates; callers apply the device pixel
//! ratio transform once when the surface is set up.

use std::f64::consts::{FRAC_PI_2, PI};

use web_sys::CanvasRenderingContext2d;

use super::particles::DustField;
use super::ring::{OrbitRing, YieldRing};
use super::theme::{Color, hsla};

/// Soft radial glow fading to full transparency at `radius`.
#[allow(clippy::too_many_arguments)]
fn fill_glow(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	radius: f64,
	color: Color,
	alpha: f64,
	mid_stop: f64,
	mid_alpha: f64,
) {
	let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &color.with_alpha(alpha).to_css());
	let _ = gradient.add_color_stop(mid_stop as f32, &color.with_alpha(mid_alpha).to_css());
	let _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css());

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

/// Renders one frame of the dust field.
pub fn draw_dust(ctx: &CanvasRenderingContext2d, field: &DustField) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());
	let scale = field.style().glow_scale;

	for p in &field.particles {
		let alpha = DustField::glow_alpha(p);
		fill_glow(ctx, p.x, p.y, p.size * scale, p.color, alpha, 0.4, alpha * 0.5);
	}
}

/// Renders one frame of the orbit ring: faint track, then glow and core per particle.
pub fn draw_orbit_ring(ctx: &CanvasRenderingContext2d, ring: &OrbitRing) {
	let style = ring.style();
	let g = &style.geometry;
	ctx.clear_rect(0.0, 0.0, g.extent, g.extent);

	ctx.begin_path();
	let _ = ctx.arc(g.center_x, g.center_y, g.radius, 0.0, PI * 2.0);
	ctx.set_stroke_style_str(&style.ring_color.to_css());
	ctx.set_line_width(2.0);
	ctx.stroke();

	for p in &ring.particles {
		let (x, y) = ring.position(p);
		fill_glow(ctx, x, y, p.size * 3.0, style.color, p.opacity, 0.5, p.opacity * 0.3);

		ctx.begin_path();
		let _ = ctx.arc(x, y, p.size, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&style.core_color.with_alpha(p.opacity).to_css());
		ctx.fill();
	}
}

/// Renders one frame of the yield ring.
///
/// Layers, bottom to top: outer glow band, dim track, hue-shifting gradient
/// stroke, pulsing particles, inner glow.
pub fn draw_yield_ring(ctx: &CanvasRenderingContext2d, ring: &YieldRing) {
	let style = ring.style();
	let g = &style.geometry;
	let (cx, cy, r) = (g.center_x, g.center_y, g.radius);
	let color = style.color;
	ctx.clear_rect(0.0, 0.0, g.extent, g.extent);

	if let Ok(glow) = ctx.create_radial_gradient(cx, cy, r - 10.0, cx, cy, r + 15.0) {
		let _ = glow.add_color_stop(0.0, &color.with_alpha(0.0).to_css());
		let _ = glow.add_color_stop(0.5, &color.with_alpha(0.1).to_css());
		let _ = glow.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
		ctx.begin_path();
		let _ = ctx.arc(cx, cy, r + 10.0, 0.0, PI * 2.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&glow);
		ctx.fill();
	}

	ctx.begin_path();
	let _ = ctx.arc(cx, cy, r, 0.0, PI * 2.0);
	ctx.set_stroke_style_str(&color.with_alpha(0.1).to_css());
	ctx.set_line_width(style.stroke_width);
	ctx.stroke();

	let [h0, h1, h2] = ring.stroke_hues();
	let stroke = ctx.create_linear_gradient(0.0, 0.0, g.extent, g.extent);
	let _ = stroke.add_color_stop(0.0, &hsla(h0, 90.0, 55.0, 0.8));
	let _ = stroke.add_color_stop(0.5, &hsla(h1, 85.0, 50.0, 0.9));
	let _ = stroke.add_color_stop(1.0, &hsla(h2, 95.0, 60.0, 0.8));
	ctx.begin_path();
	let _ = ctx.arc(cx, cy, r, -FRAC_PI_2, -FRAC_PI_2 + PI * 2.0);
	#[allow(deprecated)]
	ctx.set_stroke_style(&stroke);
	ctx.set_line_width(style.stroke_width);
	ctx.set_line_cap("round");
	ctx.stroke();

	for p in &ring.particles {
		let (x, y) = ring.position(p);
		let pulse = ring.pulse(p);
		ctx.begin_path();
		let _ = ctx.arc(x, y, p.size * pulse, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&color.with_alpha(p.opacity * pulse).to_css());
		ctx.fill();
	}

	if let Ok(inner) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r - 5.0) {
		let _ = inner.add_color_stop(0.0, &color.with_alpha(0.05 * ring.inner_pulse()).to_css());
		let _ = inner.add_color_stop(1.0, &color.with_alpha(0.0).to_css());
		ctx.begin_path();
		let _ = ctx.arc(cx, cy, r - 5.0, 0.0, PI * 2.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&inner);
		ctx.fill();
	}
}
