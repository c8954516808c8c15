//! Colors and style parameters for the ambient canvas effects.
//!
//! Every style is plain data with a `Default` matching the site's golden look,
//! and every field is deserializable so the embedded site config can tune it.

use rand::Rng;
use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba(...)` so gradient stops fade in color space, not through black.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// The site's signature amber (#F5A623).
pub const AMBER: Color = Color::rgb(245, 166, 35);

/// Formats an `hsla()` color string. Hue in degrees, saturation/lightness in percent.
pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> String {
	format!("hsla({hue}, {saturation}%, {lightness}%, {alpha})")
}

/// Half-open sampling range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a uniform value from the span. Degenerate spans return `min`.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		if self.max <= self.min {
			return self.min;
		}
		rng.gen_range(self.min..self.max)
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// A warm tint with a fixed red channel and jittered green/blue channels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct WarmTint {
	pub r: u8,
	pub g: Span,
	pub b: Span,
}

impl WarmTint {
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
		Color::rgb(
			self.r,
			self.g.sample(rng).clamp(0.0, 255.0) as u8,
			self.b.sample(rng).clamp(0.0, 255.0) as u8,
		)
	}
}

/// Full-screen floating dust.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DustStyle {
	pub enabled: bool,
	pub count: usize,
	/// Distance past the edge a particle may travel before it wraps.
	pub margin: f64,
	pub size: Span,
	/// Vertical speed per frame. Negative values float upwards.
	pub speed_y: Span,
	pub speed_x: Span,
	/// Drift accumulator increment per frame.
	pub drift_step: f64,
	/// Horizontal sway amplitude in pixels per frame.
	pub sway: f64,
	/// Base opacity. The rendered glow oscillates in `[0.5 * opacity, opacity]`.
	pub opacity: Span,
	pub pulse_speed: Span,
	/// Candidate tints, picked uniformly per particle.
	pub tints: Vec<WarmTint>,
	/// Gradient radius as a multiple of particle size.
	pub glow_scale: f64,
}

impl Default for DustStyle {
	fn default() -> Self {
		Self {
			enabled: true,
			count: 60,
			margin: 20.0,
			size: Span::new(1.0, 3.5),
			speed_y: Span::new(-0.25, -0.05),
			speed_x: Span::new(-0.075, 0.075),
			drift_step: 0.01,
			sway: 0.3,
			opacity: Span::new(0.1, 0.5),
			pulse_speed: Span::new(0.01, 0.025),
			tints: vec![
				// Bright gold
				WarmTint {
					r: 255,
					g: Span::new(200.0, 255.0),
					b: Span::new(100.0, 150.0),
				},
				// Warm orange gold
				WarmTint {
					r: 245,
					g: Span::new(166.0, 206.0),
					b: Span::new(35.0, 65.0),
				},
				// Soft cream
				WarmTint {
					r: 255,
					g: Span::new(220.0, 255.0),
					b: Span::new(150.0, 200.0),
				},
			],
			glow_scale: 4.0,
		}
	}
}

/// Fixed circle that ring particles orbit, in logical (pre-DPR) pixels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct RingGeometry {
	pub center_x: f64,
	pub center_y: f64,
	pub radius: f64,
	/// Logical edge length of the square surface.
	pub extent: f64,
}

impl Default for RingGeometry {
	fn default() -> Self {
		Self {
			center_x: 50.0,
			center_y: 50.0,
			radius: 38.0,
			extent: 100.0,
		}
	}
}

/// Particles riding exactly on a ring, with independently reflecting opacity.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrbitStyle {
	pub count: usize,
	pub geometry: RingGeometry,
	/// Random offset added to each evenly spaced starting angle.
	pub angle_jitter: f64,
	pub speed: Span,
	pub size: Span,
	pub opacity: Span,
	/// Opacity reflects off these bounds.
	pub opacity_bounds: Span,
	pub fade_speed: Span,
	pub color: Color,
	pub core_color: Color,
	pub ring_color: Color,
}

impl Default for OrbitStyle {
	fn default() -> Self {
		Self {
			count: 20,
			geometry: RingGeometry::default(),
			angle_jitter: 0.5,
			speed: Span::new(0.008, 0.014),
			size: Span::new(1.0, 3.0),
			opacity: Span::new(0.3, 1.0),
			opacity_bounds: Span::new(0.2, 1.0),
			fade_speed: Span::new(0.01, 0.03),
			color: AMBER,
			core_color: Color::rgb(255, 220, 150),
			ring_color: AMBER.with_alpha(0.3),
		}
	}
}

/// Pulsing particles scattered around a ring with an animated gradient stroke.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct YieldStyle {
	pub count: usize,
	pub geometry: RingGeometry,
	/// Each particle orbits at `radius + offset` for an offset drawn from this span.
	pub radius_offset: Span,
	pub speed: Span,
	pub size: Span,
	pub opacity: Span,
	pub color: Color,
	pub stroke_width: f64,
}

impl Default for YieldStyle {
	fn default() -> Self {
		Self {
			count: 20,
			geometry: RingGeometry::default(),
			radius_offset: Span::new(-5.0, 5.0),
			speed: Span::new(0.005, 0.015),
			size: Span::new(1.0, 3.0),
			opacity: Span::new(0.3, 1.0),
			color: AMBER,
			stroke_width: 4.0,
		}
	}
}

/// Two-stop radial fill of a CSS flake.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct FlakeTint {
	pub core: Color,
	/// Color at the 40% stop; the gradient is transparent from 70%.
	pub edge: Color,
}

impl FlakeTint {
	pub fn to_css(self) -> String {
		format!(
			"radial-gradient(circle, {} 0%, {} 40%, transparent 70%)",
			self.core.to_css(),
			self.edge.to_css()
		)
	}
}

/// CSS-animated flakes drifting through the center of the viewport.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlakeStyle {
	pub count: usize,
	/// Horizontal position in percent of the viewport width.
	pub left: Span,
	/// Edge length in pixels.
	pub size: Span,
	/// Seconds.
	pub delay: Span,
	/// Seconds per fall.
	pub duration: Span,
	/// Blur radius in pixels.
	pub blur: Span,
	pub tints: Vec<FlakeTint>,
}

impl Default for FlakeStyle {
	fn default() -> Self {
		Self {
			count: 15,
			left: Span::new(20.0, 80.0),
			size: Span::new(3.0, 8.0),
			delay: Span::new(0.0, 20.0),
			duration: Span::new(15.0, 30.0),
			blur: Span::new(0.5, 1.5),
			tints: vec![
				FlakeTint {
					core: Color::rgb(255, 230, 180).with_alpha(0.7),
					edge: Color::rgb(255, 200, 120).with_alpha(0.3),
				},
				FlakeTint {
					core: Color::rgb(255, 210, 140).with_alpha(0.6),
					edge: Color::rgb(245, 180, 100).with_alpha(0.25),
				},
				FlakeTint {
					core: Color::rgb(255, 200, 100).with_alpha(0.5),
					edge: AMBER.with_alpha(0.2),
				},
			],
		}
	}
}

/// Small CSS sparkles floating around a decorated element.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SparkleStyle {
	pub size: Span,
	/// Distance from the container center in pixels.
	pub distance: Span,
	pub duration: Span,
	pub delay: Span,
	pub color: Color,
	pub glow: Color,
}

impl Default for SparkleStyle {
	fn default() -> Self {
		Self {
			size: Span::new(2.0, 4.0),
			distance: Span::new(40.0, 55.0),
			duration: Span::new(3.0, 5.0),
			delay: Span::new(0.0, 2.0),
			color: Color::rgb(255, 217, 61),
			glow: AMBER.with_alpha(0.6),
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn span_samples_stay_in_range() {
		let mut rng = StdRng::seed_from_u64(7);
		let span = Span::new(-0.25, -0.05);
		for _ in 0..1000 {
			let v = span.sample(&mut rng);
			assert!((-0.25..-0.05).contains(&v));
		}
	}

	#[test]
	fn degenerate_span_returns_min() {
		let mut rng = StdRng::seed_from_u64(7);
		assert_eq!(Span::new(2.0, 2.0).sample(&mut rng), 2.0);
	}

	#[test]
	fn tint_keeps_red_channel() {
		let mut rng = StdRng::seed_from_u64(3);
		let tint = DustStyle::default().tints[1];
		let color = tint.sample(&mut rng);
		assert_eq!(color.r, 245);
		assert!((166..=206).contains(&color.g));
		assert!((35..=65).contains(&color.b));
	}

	#[test]
	fn css_output() {
		assert_eq!(AMBER.with_alpha(0.5).to_css(), "rgba(245, 166, 35, 0.5)");
		assert_eq!(hsla(40.0, 90.0, 55.0, 0.8), "hsla(40, 90%, 55%, 0.8)");
		assert_eq!(
			FlakeStyle::default().tints[2].to_css(),
			"radial-gradient(circle, rgba(255, 200, 100, 0.5) 0%, rgba(245, 166, 35, 0.2) 40%, transparent 70%)"
		);
	}

	#[test]
	fn style_deserializes_partial_overrides() {
		let style: DustStyle = serde_json::from_str(r#"{ "count": 12, "sway": 0.5 }"#).unwrap();
		assert_eq!(style.count, 12);
		assert_eq!(style.sway, 0.5);
		assert_eq!(style.margin, DustStyle::default().margin);
	}
}
