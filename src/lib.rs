//! bolt-site: front end for the BoltTiger demo site.
//!
//! Decorative canvas effects (rising dust, orbit and yield rings, a price
//! chart) behind a five-page mobile layout with mocked mint, fund, swap and
//! profile panels. Nothing talks to a backend; balances and rates are constants.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Pulled in only to enable its `js` feature for `rand` on wasm.
use getrandom as _;

pub mod components;
pub mod config;

use components::ambient::{AmbientKeyframes, DustCanvas, GoldenFlakes};
use components::fund::FundPage;
use components::home::HomePage;
use components::mint::MintPage;
use components::navigation::{NavBar, NavState, Page, home_replays};
use components::profile::MyPage;
use components::swap::SwapPage;
pub use config::{SiteConfig, load_site_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("bolt-site: logging initialized");
	info!("⚡ BOLTTIGER · ultimate luxury");
}

/// Main application component.
/// Reads the embedded site config and lays out the pages over the dust layer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_site_config();
	let stats = config.stats;
	let nav = RwSignal::new(NavState::default());
	let replays = home_replays(nav);
	let page_class = move |page: Page| nav.with(|s| s.page_class(page));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="BoltTiger" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AmbientKeyframes />
		<DustCanvas style=config.dust />
		<GoldenFlakes style=config.flakes />

		<main class="app">
			<div class=move || page_class(Page::Home)>
				// Re-created on every return to Home so its animations replay.
				{move || {
					replays.track();
					view! { <HomePage stats=stats.clone() /> }
				}}
			</div>
			<div class=move || page_class(Page::Mint)>
				<MintPage />
			</div>
			<div class=move || page_class(Page::Swap)>
				<SwapPage />
			</div>
			<div class=move || page_class(Page::Fund)>
				<FundPage />
			</div>
			<div class=move || page_class(Page::My)>
				<MyPage />
			</div>
		</main>

		<NavBar nav=nav />
	}
}
