//! Ambient particle animator.
//!
//! Purely decorative canvas effects driven by a per-frame advance-then-render
//! loop over a fixed particle set:
//! - Full-screen golden dust that rises, sways, and wraps around the edges
//! - An orbit ring whose particles breathe between two opacity bounds
//! - A yield ring with a hue-shifting gradient stroke and pulsing particles
//!
//! Two lighter decorations are plain CSS-animated elements: drifting flakes
//! and sparkles orbiting a decorated element.
//!
//! # Example
//!
//! ```ignore
//! use bolt_site::components::ambient::{DustCanvas, DustStyle};
//!
//! view! { <DustCanvas style=DustStyle { count: 30, ..Default::default() } /> }
//! ```

mod component;
mod particles;
mod render;
mod ring;
mod sparkles;
pub mod theme;

pub use component::{
	AmbientKeyframes, DustCanvas, GoldenFlakes, OrbitRingCanvas, OrbitalSparkles, YieldRingCanvas,
};
pub use particles::{DustField, DustParticle};
pub use ring::{OrbitParticle, OrbitRing, YieldParticle, YieldRing};
pub use sparkles::{Flake, Sparkle, orbital_sparkles, sample_flakes};
pub use theme::{
	Color, DustStyle, FlakeStyle, FlakeTint, OrbitStyle, RingGeometry, SparkleStyle, Span, YieldStyle,
};
