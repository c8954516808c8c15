//! Animated statistics counters.
//!
//! Each counter eases from zero to its target over a fixed duration using an
//! ease-out quartic curve, driven by rAF timestamps.

use leptos::prelude::*;
use serde::Deserialize;

use super::surface::{frame_loop, liveness};

/// Count-up duration in milliseconds.
pub const COUNT_DURATION_MS: f64 = 2000.0;

/// One headline figure on the home page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatEntry {
	pub label: String,
	pub target: f64,
	#[serde(default)]
	pub suffix: String,
}

impl StatEntry {
	pub fn new(label: &str, target: f64, suffix: &str) -> Self {
		Self {
			label: label.to_string(),
			target,
			suffix: suffix.to_string(),
		}
	}

	/// Value displayed `elapsed_ms` after the animation started.
	pub fn value_at(&self, elapsed_ms: f64) -> f64 {
		let progress = (elapsed_ms / COUNT_DURATION_MS).clamp(0.0, 1.0);
		self.target * ease_out_quart(progress)
	}

	/// Text for a value: one decimal for fractional targets, grouped integers otherwise.
	pub fn format(&self, value: f64) -> String {
		if self.target.fract() != 0.0 {
			format!("{value:.1}{}", self.suffix)
		} else {
			format!("{}{}", group_thousands(value.floor() as i64), self.suffix)
		}
	}
}

pub fn default_stats() -> Vec<StatEntry> {
	vec![
		StatEntry::new("Total Value Locked", 12_847_392.0, " USDT"),
		StatEntry::new("Holders", 8932.0, ""),
		StatEntry::new("Average APY", 48.5, "%"),
	]
}

pub fn ease_out_quart(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(4)
}

fn group_thousands(n: i64) -> String {
	let digits = n.unsigned_abs().to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	if n < 0 {
		out.push('-');
	}
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// A single counting figure. Restarts whenever it is re-created.
#[component]
pub fn StatCounter(entry: StatEntry) -> impl IntoView {
	let (text, set_text) = signal(entry.format(0.0));
	let label = entry.label.clone();
	let alive = liveness();

	let mut started_at = None;
	frame_loop(alive, move |now| {
		let start = *started_at.get_or_insert(now);
		let elapsed = now - start;
		set_text.set(entry.format(entry.value_at(elapsed)));
		elapsed < COUNT_DURATION_MS
	});

	view! {
		<div class="stat-card">
			<span class="stat-value">{move || text.get()}</span>
			<span class="stat-label">{label}</span>
		</div>
	}
}

#[component]
pub fn StatsGrid(#[prop(into)] stats: Vec<StatEntry>) -> impl IntoView {
	view! {
		<div class="stats-grid">
			{stats.into_iter().map(|entry| view! { <StatCounter entry=entry /> }).collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn easing_hits_endpoints() {
		assert_eq!(ease_out_quart(0.0), 0.0);
		assert_eq!(ease_out_quart(1.0), 1.0);
		assert!(ease_out_quart(0.5) > 0.9);
	}

	#[test]
	fn counter_reaches_exact_target() {
		let entry = StatEntry::new("Holders", 8932.0, "");
		assert_eq!(entry.value_at(0.0), 0.0);
		assert_eq!(entry.value_at(COUNT_DURATION_MS), 8932.0);
		assert_eq!(entry.value_at(COUNT_DURATION_MS * 3.0), 8932.0);
	}

	#[test]
	fn counter_is_monotonic() {
		let entry = StatEntry::new("TVL", 1000.0, "");
		let mut last = -1.0;
		for ms in (0..=2000).step_by(16) {
			let v = entry.value_at(ms as f64);
			assert!(v >= last);
			last = v;
		}
	}

	#[test]
	fn integer_targets_group_thousands() {
		let entry = StatEntry::new("TVL", 12_847_392.0, " USDT");
		assert_eq!(entry.format(12_847_392.0), "12,847,392 USDT");
		assert_eq!(entry.format(999.7), "999 USDT");
		assert_eq!(entry.format(0.0), "0 USDT");
	}

	#[test]
	fn fractional_targets_keep_one_decimal() {
		let entry = StatEntry::new("APY", 48.5, "%");
		assert_eq!(entry.format(12.345), "12.3%");
		assert_eq!(entry.format(48.5), "48.5%");
	}

	#[test]
	fn grouping_handles_small_and_negative() {
		assert_eq!(group_thousands(7), "7");
		assert_eq!(group_thousands(1000), "1,000");
		assert_eq!(group_thousands(-1234567), "-1,234,567");
	}
}
