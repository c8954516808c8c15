//! CSS-animated decorations: drifting flakes and orbital sparkles.
//!
//! Unlike the canvas effects these are plain elements whose motion is left to
//! CSS keyframes; only their per-element parameters are sampled here.

use rand::Rng;

use super::theme::{FlakeStyle, FlakeTint, SparkleStyle};

/// Keyframes referenced by the inline styles below.
pub const KEYFRAMES: &str = "\
@keyframes flakeDrift {
	0% { transform: translateY(-10vh); opacity: 0; }
	10% { opacity: 1; }
	90% { opacity: 1; }
	100% { transform: translateY(110vh); opacity: 0; }
}
@keyframes orbitalFloat {
	0%, 100% {
		opacity: 0.3;
		transform: translate(-50%, -50%) rotate(var(--angle, 0deg)) translateX(var(--dist, 40px)) scale(0.8);
	}
	50% {
		opacity: 1;
		transform: translate(-50%, -50%) rotate(calc(var(--angle, 0deg) + 180deg)) translateX(calc(var(--dist, 40px) + 10px)) scale(1.2);
	}
}";

#[derive(Clone, Debug, PartialEq)]
pub struct Flake {
	pub left: f64,
	pub size: f64,
	pub delay: f64,
	pub duration: f64,
	pub blur: f64,
	pub tint: Option<FlakeTint>,
}

impl Flake {
	pub fn sample<R: Rng + ?Sized>(style: &FlakeStyle, rng: &mut R) -> Self {
		let tint = if style.tints.is_empty() {
			None
		} else {
			Some(style.tints[rng.gen_range(0..style.tints.len())])
		};
		Self {
			left: style.left.sample(rng),
			size: style.size.sample(rng),
			delay: style.delay.sample(rng),
			duration: style.duration.sample(rng),
			blur: style.blur.sample(rng),
			tint,
		}
	}

	pub fn css(&self) -> String {
		let background = self.tint.map(FlakeTint::to_css).unwrap_or_default();
		format!(
			"position: absolute; top: 0; border-radius: 50%; left: {:.2}%; width: {:.2}px; height: {:.2}px; \
			 background: {background}; animation: flakeDrift {:.2}s linear {:.2}s infinite; filter: blur({:.2}px);",
			self.left, self.size, self.size, self.duration, self.delay, self.blur
		)
	}
}

pub fn sample_flakes<R: Rng + ?Sized>(style: &FlakeStyle, rng: &mut R) -> Vec<Flake> {
	(0..style.count).map(|_| Flake::sample(style, rng)).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
	/// Evenly spaced starting bearing in degrees.
	pub angle: f64,
	pub size: f64,
	pub distance: f64,
	pub duration: f64,
	pub delay: f64,
}

impl Sparkle {
	pub fn css(&self, style: &SparkleStyle) -> String {
		format!(
			"position: absolute; top: 50%; left: 50%; border-radius: 50%; width: {:.2}px; height: {:.2}px; \
			 background: radial-gradient(circle, {} 0%, transparent 70%); box-shadow: 0 0 6px {}; \
			 --angle: {:.1}deg; --dist: {:.2}px; \
			 transform: translate(-50%, -50%) rotate({:.1}deg) translateX({:.2}px); \
			 animation: orbitalFloat {:.2}s ease-in-out {:.2}s infinite;",
			self.size,
			self.size,
			style.color.to_css(),
			style.glow.to_css(),
			self.angle,
			self.distance,
			self.angle,
			self.distance,
			self.duration,
			self.delay
		)
	}
}

/// `count` sparkles spread evenly around a circle.
pub fn orbital_sparkles<R: Rng + ?Sized>(count: usize, style: &SparkleStyle, rng: &mut R) -> Vec<Sparkle> {
	(0..count)
		.map(|i| Sparkle {
			angle: i as f64 / count as f64 * 360.0,
			size: style.size.sample(rng),
			distance: style.distance.sample(rng),
			duration: style.duration.sample(rng),
			delay: style.delay.sample(rng),
		})
		.collect()
}
