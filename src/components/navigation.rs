//! Page navigation with leave/enter transitions.
//!
//! Transitions are an explicit state machine: a selection starts the leave
//! phase, timers feed `LeaveFinished`/`EnterFinished` back in, and requests
//! made mid-transition are dropped.

use std::time::Duration;

use leptos::prelude::*;
use log::debug;

pub const LEAVE_DURATION: Duration = Duration::from_millis(400);
pub const ENTER_DURATION: Duration = Duration::from_millis(600);

/// Top-level pages of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
	#[default]
	Home,
	Mint,
	Swap,
	Fund,
	My,
}

impl Page {
	pub const ALL: [Page; 5] = [Page::Home, Page::Mint, Page::Swap, Page::Fund, Page::My];

	pub fn label(self) -> &'static str {
		match self {
			Page::Home => "Home",
			Page::Mint => "Mint",
			Page::Swap => "Swap",
			Page::Fund => "Fund",
			Page::My => "Me",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Idle,
	Leaving { target: Page },
	Entering,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
	Select(Page),
	LeaveFinished,
	EnterFinished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
	pub active: Page,
	pub phase: Phase,
	/// Bumped every time Home finishes entering; remounts its animations.
	pub home_visits: u32,
}

impl NavState {
	pub fn apply(self, event: NavEvent) -> Self {
		match (self.phase, event) {
			(Phase::Idle, NavEvent::Select(page)) if page != self.active => Self {
				phase: Phase::Leaving { target: page },
				..self
			},
			(Phase::Leaving { target }, NavEvent::LeaveFinished) => Self {
				active: target,
				phase: Phase::Entering,
				..self
			},
			(Phase::Entering, NavEvent::EnterFinished) => Self {
				phase: Phase::Idle,
				home_visits: self.home_visits + u32::from(self.active == Page::Home),
				..self
			},
			_ => self,
		}
	}

	pub fn is_transitioning(&self) -> bool {
		self.phase != Phase::Idle
	}

	/// The nav bar highlights the destination as soon as a transition starts.
	pub fn highlighted(&self) -> Page {
		match self.phase {
			Phase::Leaving { target } => target,
			_ => self.active,
		}
	}

	pub fn page_class(&self, page: Page) -> &'static str {
		if page != self.active {
			return "page";
		}
		match self.phase {
			Phase::Idle => "page active",
			Phase::Leaving { .. } => "page active leaving",
			Phase::Entering => "page active entering",
		}
	}
}

/// Starts a transition to `page` and schedules its completion events.
pub fn navigate(nav: RwSignal<NavState>, page: Page) {
	let before = nav.get_untracked();
	let after = before.apply(NavEvent::Select(page));
	if after == before {
		return;
	}
	debug!("bolt-site: page {:?} -> {:?}", before.active, page);
	nav.set(after);

	set_timeout(
		move || {
			nav.update(|s| *s = s.apply(NavEvent::LeaveFinished));
			set_timeout(
				move || nav.update(|s| *s = s.apply(NavEvent::EnterFinished)),
				ENTER_DURATION,
			);
		},
		LEAVE_DURATION,
	);
}

/// Changes only when Home finishes entering, so views keyed on it are
/// rebuilt once per return to Home and never by other transitions.
pub fn home_replays(nav: RwSignal<NavState>) -> Memo<u32> {
	Memo::new(move |_| nav.with(|s| s.home_visits))
}

#[component]
pub fn NavBar(nav: RwSignal<NavState>) -> impl IntoView {
	view! {
		<nav class="bottom-nav">
			{Page::ALL
				.into_iter()
				.map(|page| {
					view! {
						<button
							class="nav-item"
							class:active=move || nav.with(|s| s.highlighted() == page)
							on:click=move |_| navigate(nav, page)
						>
							{page.label()}
						</button>
					}
				})
				.collect_view()}
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	fn visit(nav: RwSignal<NavState>, page: Page) {
		nav.update(|s| *s = s.apply(NavEvent::Select(page)));
		nav.update(|s| *s = s.apply(NavEvent::LeaveFinished));
		nav.update(|s| *s = s.apply(NavEvent::EnterFinished));
	}

	#[test]
	fn full_transition_cycle() {
		let s = NavState::default();
		let s = s.apply(NavEvent::Select(Page::Fund));
		assert_eq!(s.phase, Phase::Leaving { target: Page::Fund });
		assert_eq!(s.active, Page::Home);
		assert_eq!(s.highlighted(), Page::Fund);
		assert_eq!(s.page_class(Page::Home), "page active leaving");
		assert_eq!(s.page_class(Page::Fund), "page");

		let s = s.apply(NavEvent::LeaveFinished);
		assert_eq!(s.active, Page::Fund);
		assert_eq!(s.page_class(Page::Fund), "page active entering");

		let s = s.apply(NavEvent::EnterFinished);
		assert_eq!(s.phase, Phase::Idle);
		assert_eq!(s.page_class(Page::Fund), "page active");
		assert_eq!(s.home_visits, 0);
	}

	#[test]
	fn selection_ignored_while_transitioning() {
		let s = NavState::default().apply(NavEvent::Select(Page::Mint));
		assert!(s.is_transitioning());
		let again = s.apply(NavEvent::Select(Page::Swap));
		assert_eq!(again, s);

		let entering = s.apply(NavEvent::LeaveFinished);
		assert_eq!(entering.apply(NavEvent::Select(Page::Swap)), entering);
	}

	#[test]
	fn selecting_current_page_is_noop() {
		let s = NavState::default();
		assert_eq!(s.apply(NavEvent::Select(Page::Home)), s);
	}

	#[test]
	fn stray_timer_events_are_ignored() {
		let s = NavState::default();
		assert_eq!(s.apply(NavEvent::LeaveFinished), s);
		assert_eq!(s.apply(NavEvent::EnterFinished), s);
	}

	#[test]
	fn returning_home_bumps_visits() {
		let s = NavState {
			active: Page::Swap,
			..NavState::default()
		};
		let s = s
			.apply(NavEvent::Select(Page::Home))
			.apply(NavEvent::LeaveFinished)
			.apply(NavEvent::EnterFinished);
		assert_eq!(s.active, Page::Home);
		assert_eq!(s.home_visits, 1);
	}

	#[test]
	fn home_replays_once_per_return_home() {
		let owner = Owner::new();
		owner.set();

		let nav = RwSignal::new(NavState::default());
		let replays = home_replays(nav);
		let rebuilds = Arc::new(AtomicUsize::new(0));
		let _effect = ImmediateEffect::new({
			let rebuilds = Arc::clone(&rebuilds);
			move || {
				replays.track();
				rebuilds.fetch_add(1, Ordering::Relaxed);
			}
		});
		assert_eq!(rebuilds.load(Ordering::Relaxed), 1);

		visit(nav, Page::Mint);
		visit(nav, Page::Swap);
		assert_eq!(rebuilds.load(Ordering::Relaxed), 1);

		nav.update(|s| *s = s.apply(NavEvent::Select(Page::Home)));
		nav.update(|s| *s = s.apply(NavEvent::LeaveFinished));
		assert_eq!(rebuilds.load(Ordering::Relaxed), 1);
		nav.update(|s| *s = s.apply(NavEvent::EnterFinished));
		assert_eq!(rebuilds.load(Ordering::Relaxed), 2);
		assert_eq!(replays.get_untracked(), 1);
	}
}
