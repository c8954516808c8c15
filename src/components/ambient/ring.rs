//! Ring-constrained particle variants.
//!
//! Both variants replace free 2D position with an angle around a fixed
//! center; "velocity" becomes angular speed.

use std::f64::consts::TAU;

use rand::Rng;

use super::theme::{OrbitStyle, RingGeometry, YieldStyle};

/// A particle riding exactly on the orbit ring.
#[derive(Clone, Debug)]
pub struct OrbitParticle {
	pub angle: f64,
	pub speed: f64,
	pub size: f64,
	pub opacity: f64,
	/// Signed opacity change per frame; flips sign at the opacity bounds.
	pub fade_speed: f64,
}

/// Profile badge ring: evenly spread particles with independently breathing opacity.
pub struct OrbitRing {
	pub particles: Vec<OrbitParticle>,
	style: OrbitStyle,
}

impl OrbitRing {
	pub fn new<R: Rng + ?Sized>(style: &OrbitStyle, rng: &mut R) -> Self {
		let count = style.count.max(1) as f64;
		let particles = (0..style.count)
			.map(|i| OrbitParticle {
				angle: TAU / count * i as f64 + rng.gen_range(0.0..=style.angle_jitter.max(0.0)),
				speed: style.speed.sample(rng),
				size: style.size.sample(rng),
				opacity: style
					.opacity
					.sample(rng)
					.clamp(style.opacity_bounds.min, style.opacity_bounds.max),
				fade_speed: style.fade_speed.sample(rng),
			})
			.collect();

		Self {
			particles,
			style: style.clone(),
		}
	}

	pub fn style(&self) -> &OrbitStyle {
		&self.style
	}

	pub fn advance_frame(&mut self) {
		let bounds = self.style.opacity_bounds;
		for p in &mut self.particles {
			p.angle += p.speed;
			p.opacity += p.fade_speed;

			// Reflect rather than wrap
			if p.opacity > bounds.max {
				p.opacity = bounds.max;
				p.fade_speed = -p.fade_speed.abs();
			} else if p.opacity < bounds.min {
				p.opacity = bounds.min;
				p.fade_speed = p.fade_speed.abs();
			}
		}
	}

	pub fn position(&self, particle: &OrbitParticle) -> (f64, f64) {
		point_on_circle(&self.style.geometry, self.style.geometry.radius, particle.angle)
	}
}

/// A particle scattered around the yield ring at its own orbit radius.
#[derive(Clone, Debug)]
pub struct YieldParticle {
	pub angle: f64,
	pub speed: f64,
	pub orbit_radius: f64,
	pub size: f64,
	pub opacity: f64,
}

/// Fund page ring with a hue-shifting gradient stroke and pulsing particles.
pub struct YieldRing {
	pub particles: Vec<YieldParticle>,
	/// Frames elapsed since start; drives every oscillation of the ring.
	pub frame: u64,
	style: YieldStyle,
}

impl YieldRing {
	pub fn new<R: Rng + ?Sized>(style: &YieldStyle, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| YieldParticle {
				angle: rng.gen_range(0.0..TAU),
				speed: style.speed.sample(rng),
				orbit_radius: style.geometry.radius + style.radius_offset.sample(rng),
				size: style.size.sample(rng),
				opacity: style.opacity.sample(rng),
			})
			.collect();

		Self {
			particles,
			frame: 0,
			style: style.clone(),
		}
	}

	pub fn style(&self) -> &YieldStyle {
		&self.style
	}

	pub fn advance_frame(&mut self) {
		self.frame += 1;
		for p in &mut self.particles {
			p.angle += p.speed;
		}
	}

	pub fn position(&self, particle: &YieldParticle) -> (f64, f64) {
		point_on_circle(&self.style.geometry, particle.orbit_radius, particle.angle)
	}

	/// Size and alpha multiplier in `[0, 1]`.
	pub fn pulse(&self, particle: &YieldParticle) -> f64 {
		0.5 + 0.5 * (self.frame as f64 * 0.05 + particle.angle).sin()
	}

	/// Hues of the three stroke gradient stops, each swinging ±10° around its base.
	pub fn stroke_hues(&self) -> [f64; 3] {
		let f = self.frame as f64;
		[
			40.0 + (f * 0.02).sin() * 10.0,
			35.0 + (f * 0.03).cos() * 10.0,
			45.0 + (f * 0.025).sin() * 10.0,
		]
	}

	pub fn inner_pulse(&self) -> f64 {
		0.5 + 0.5 * (self.frame as f64 * 0.03).sin()
	}
}

fn point_on_circle(geometry: &RingGeometry, radius: f64, angle: f64) -> (f64, f64) {
	(
		geometry.center_x + angle.cos() * radius,
		geometry.center_y + angle.sin() * radius,
	)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn distance(geometry: &RingGeometry, (x, y): (f64, f64)) -> f64 {
		((x - geometry.center_x).powi(2) + (y - geometry.center_y).powi(2)).sqrt()
	}

	#[test]
	fn orbit_particles_stay_on_the_ring() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut ring = OrbitRing::new(&OrbitStyle::default(), &mut rng);
		let geometry = ring.style().geometry;
		for _ in 0..2000 {
			ring.advance_frame();
			for p in &ring.particles {
				let d = distance(&geometry, ring.position(p));
				assert!((d - geometry.radius).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn orbit_opacity_reflects_within_bounds() {
		let mut rng = StdRng::seed_from_u64(2);
		let mut ring = OrbitRing::new(&OrbitStyle::default(), &mut rng);
		let bounds = ring.style().opacity_bounds;
		let mut saw_fade_out = false;
		for _ in 0..2000 {
			ring.advance_frame();
			for p in &ring.particles {
				assert!(bounds.contains(p.opacity), "opacity escaped: {}", p.opacity);
				saw_fade_out |= p.fade_speed < 0.0;
			}
		}
		assert!(saw_fade_out);
		assert_eq!(ring.particles.len(), 20);
	}

	#[test]
	fn orbit_reflection_flips_direction_at_top() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut ring = OrbitRing::new(&OrbitStyle::default(), &mut rng);
		ring.particles[0].opacity = 0.99;
		ring.particles[0].fade_speed = 0.02;
		ring.advance_frame();
		assert_eq!(ring.particles[0].opacity, 1.0);
		assert!(ring.particles[0].fade_speed < 0.0);
		ring.advance_frame();
		assert!(ring.particles[0].opacity < 1.0);
	}

	#[test]
	fn orbit_starting_angles_are_evenly_spread() {
		let mut rng = StdRng::seed_from_u64(4);
		let style = OrbitStyle::default();
		let ring = OrbitRing::new(&style, &mut rng);
		for (i, p) in ring.particles.iter().enumerate() {
			let base = TAU / style.count as f64 * i as f64;
			assert!(p.angle >= base && p.angle <= base + style.angle_jitter);
		}
	}

	#[test]
	fn yield_particles_stay_within_radius_tolerance() {
		let mut rng = StdRng::seed_from_u64(5);
		let style = YieldStyle::default();
		let mut ring = YieldRing::new(&style, &mut rng);
		let geometry = style.geometry;
		for _ in 0..1000 {
			ring.advance_frame();
			for p in &ring.particles {
				let d = distance(&geometry, ring.position(p));
				assert!(d >= geometry.radius - 5.0 - 1e-9 && d <= geometry.radius + 5.0 + 1e-9);
				let pulse = ring.pulse(p);
				assert!((0.0..=1.0).contains(&pulse));
			}
		}
		assert_eq!(ring.frame, 1000);
	}

	#[test]
	fn yield_hues_swing_around_bases() {
		let mut rng = StdRng::seed_from_u64(6);
		let mut ring = YieldRing::new(&YieldStyle::default(), &mut rng);
		for _ in 0..500 {
			ring.advance_frame();
			let [a, b, c] = ring.stroke_hues();
			assert!((30.0..=50.0).contains(&a));
			assert!((25.0..=45.0).contains(&b));
			assert!((35.0..=55.0).contains(&c));
			assert!((0.0..=1.0).contains(&ring.inner_pulse()));
		}
	}
}
