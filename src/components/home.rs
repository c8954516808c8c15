//! Landing page: brand decorator, headline stats and the price chart.

use leptos::prelude::*;

use super::ambient::OrbitalSparkles;
use super::chart::PriceChart;
use super::stats::{StatEntry, StatsGrid};

/// Counting headline stats above the price chart.
///
/// Both animations run once per mount, so re-creating this view replays them.
#[component]
pub fn HomePage(#[prop(into)] stats: Vec<StatEntry>) -> impl IntoView {
	view! {
		<section class="home-page">
			<div class="hero">
				<div class="hero-decorator" style="position: relative;">
					<div class="decorator-emblem">"⚡"</div>
					<OrbitalSparkles count=8 />
				</div>
				<h1>"BoltTiger"</h1>
				<p class="hero-subtitle">"Mint, stake and swap BOT"</p>
			</div>
			<StatsGrid stats=stats />
			<div class="chart-header">
				<span>"BOT / USDT"</span>
			</div>
			<PriceChart />
		</section>
	}
}
