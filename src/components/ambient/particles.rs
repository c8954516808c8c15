//! Free-floating golden dust.
//!
//! Particles rise slowly with a sinusoidal sideways sway and wrap around the
//! surface edges instead of bouncing. The particle set is allocated once and
//! recycled for the lifetime of the field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::theme::{Color, DustStyle};

/// A single floating dust mote.
#[derive(Clone, Debug)]
pub struct DustParticle {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub size: f64,
	pub opacity: f64,
	pub drift: f64, // Sway phase
	pub pulse: f64, // Glow phase
	pub pulse_speed: f64,
	pub color: Color,
}

/// Manages the full-screen dust particles.
pub struct DustField {
	pub particles: Vec<DustParticle>,
	style: DustStyle,
	width: f64,
	height: f64,
	rng: StdRng,
}

impl DustField {
	pub fn new(style: &DustStyle, width: f64, height: f64) -> Self {
		Self::with_rng(style, width, height, StdRng::from_entropy())
	}

	pub fn with_rng(style: &DustStyle, width: f64, height: f64, mut rng: StdRng) -> Self {
		let particles = (0..style.count)
			.map(|_| Self::spawn(style, width, height, &mut rng))
			.collect();

		Self {
			particles,
			style: style.clone(),
			width,
			height,
			rng,
		}
	}

	fn spawn<R: Rng + ?Sized>(style: &DustStyle, width: f64, height: f64, rng: &mut R) -> DustParticle {
		let color = if style.tints.is_empty() {
			Color::rgb(255, 220, 150)
		} else {
			style.tints[rng.gen_range(0..style.tints.len())].sample(rng)
		};

		DustParticle {
			x: rng.gen_range(0.0..=width.max(0.0)),
			y: rng.gen_range(0.0..=height.max(0.0)),
			speed_x: style.speed_x.sample(rng),
			speed_y: style.speed_y.sample(rng),
			size: style.size.sample(rng),
			opacity: style.opacity.sample(rng),
			drift: rng.gen_range(0.0..std::f64::consts::TAU),
			pulse: rng.gen_range(0.0..std::f64::consts::TAU),
			pulse_speed: style.pulse_speed.sample(rng),
			color,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn style(&self) -> &DustStyle {
		&self.style
	}

	/// Advance every particle by one display frame.
	pub fn advance_frame(&mut self) {
		let Self {
			particles,
			style,
			width,
			height,
			rng,
		} = self;
		let margin = style.margin;

		for p in particles.iter_mut() {
			p.y += p.speed_y;
			p.drift += style.drift_step;
			p.x += p.speed_x + p.drift.sin() * style.sway;
			p.pulse += p.pulse_speed;

			// Risen past the top: re-enter from below at a fresh column
			if p.y < -margin {
				p.y = *height + margin;
				p.x = rng.gen_range(0.0..=width.max(0.0));
			} else if p.y > *height + margin {
				p.y = -margin;
			}
			if p.x < -margin {
				p.x = *width + margin;
			} else if p.x > *width + margin {
				p.x = -margin;
			}
		}
	}

	/// Resize the field bounds, scaling particle positions proportionally.
	pub fn resize(&mut self, width: f64, height: f64) {
		let scale_x = if self.width > 0.0 { width / self.width } else { 1.0 };
		let scale_y = if self.height > 0.0 { height / self.height } else { 1.0 };

		for p in &mut self.particles {
			p.x *= scale_x;
			p.y *= scale_y;
		}

		self.width = width;
		self.height = height;
	}

	/// Current glow alpha for a particle, in `[0.5 * opacity, opacity]`.
	pub fn glow_alpha(particle: &DustParticle) -> f64 {
		let glow = particle.pulse.sin() * 0.25 + 0.75;
		particle.opacity * glow
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(width: f64, height: f64, count: usize, seed: u64) -> DustField {
		let style = DustStyle {
			count,
			..DustStyle::default()
		};
		DustField::with_rng(&style, width, height, StdRng::seed_from_u64(seed))
	}

	#[test]
	fn spawns_requested_count_inside_surface() {
		let f = field(800.0, 600.0, 60, 1);
		assert_eq!(f.particles.len(), 60);
		for p in &f.particles {
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
		}
	}

	#[test]
	fn stays_within_wrap_margin_for_a_thousand_frames() {
		let mut f = field(800.0, 600.0, 60, 42);
		for _ in 0..1000 {
			f.advance_frame();
			assert_eq!(f.particles.len(), 60);
			for p in &f.particles {
				assert!((-20.0..=620.0).contains(&p.y), "y out of bounds: {}", p.y);
				assert!((-20.0..=820.0).contains(&p.x), "x out of bounds: {}", p.x);
			}
		}
	}

	#[test]
	fn top_exit_respawns_at_bottom_with_fresh_column() {
		let mut f = field(800.0, 600.0, 1, 9);
		f.particles[0].y = -21.0;
		f.particles[0].x = 400.0;
		f.advance_frame();
		let p = &f.particles[0];
		assert_eq!(p.y, 620.0);
		assert!((0.0..=800.0).contains(&p.x));
	}

	#[test]
	fn horizontal_exits_wrap_to_opposite_side() {
		let mut f = field(800.0, 600.0, 2, 5);
		f.particles[0].x = -30.0;
		f.particles[0].y = 300.0;
		f.particles[1].x = 850.0;
		f.particles[1].y = 300.0;
		f.advance_frame();
		assert_eq!(f.particles[0].x, 820.0);
		assert_eq!(f.particles[1].x, -20.0);
	}

	#[test]
	fn glow_stays_within_configured_opacity() {
		let mut f = field(800.0, 600.0, 60, 11);
		let bounds = f.style().opacity;
		for _ in 0..500 {
			f.advance_frame();
			for p in &f.particles {
				let alpha = DustField::glow_alpha(p);
				assert!(alpha >= p.opacity * 0.5 - 1e-9 && alpha <= p.opacity + 1e-9);
				assert!(alpha <= bounds.max && alpha >= bounds.min * 0.5);
			}
		}
	}

	#[test]
	fn phases_increase_monotonically() {
		let mut f = field(800.0, 600.0, 10, 2);
		let before: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.drift, p.pulse)).collect();
		f.advance_frame();
		for (p, (drift, pulse)) in f.particles.iter().zip(before) {
			assert!(p.drift > drift);
			assert!(p.pulse > pulse);
		}
	}

	#[test]
	fn resize_scales_positions() {
		let mut f = field(800.0, 600.0, 1, 3);
		f.particles[0].x = 400.0;
		f.particles[0].y = 300.0;
		f.resize(400.0, 1200.0);
		assert_eq!(f.particles[0].x, 200.0);
		assert_eq!(f.particles[0].y, 600.0);
		assert_eq!((f.width(), f.height()), (400.0, 1200.0));
	}

	#[test]
	fn empty_field_is_valid() {
		let mut f = field(800.0, 600.0, 0, 0);
		f.advance_frame();
		assert!(f.particles.is_empty());
	}
}
