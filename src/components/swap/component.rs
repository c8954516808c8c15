//! Swap page view with its token dropdowns.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::state::{BOT_TO_USDT, QuickAmount, SWAP_BALANCE, Side, SwapEvent, SwapState, TOKENS};

#[component]
fn TokenSelect(state: RwSignal<SwapState>, side: Side) -> impl IntoView {
	let dispatch = move |event: SwapEvent| state.update(|s| *s = std::mem::take(s).apply(event));
	let toggle = move |ev: MouseEvent| {
		ev.stop_propagation();
		dispatch(SwapEvent::ToggleDropdown(side));
	};

	view! {
		<div class="token-select" class:open=move || state.with(|s| s.open == Some(side))>
			<button class="token-select-btn" on:click=toggle>
				{move || state.with(|s| s.selected(side))}
			</button>
			<div class="token-dropdown" on:click=|ev: MouseEvent| ev.stop_propagation()>
				{TOKENS
					.iter()
					.map(|token| {
						let symbol = token.symbol;
						view! {
							<div
								class="token-option"
								class:disabled=!token.enabled
								class:selected=move || state.with(|s| s.selected(side) == symbol)
								on:click=move |_| dispatch(SwapEvent::Pick(side, symbol))
							>
								{symbol}
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

/// Swap page: fixed-rate BOT to USDT quote with quick-fill buttons.
#[component]
pub fn SwapPage() -> impl IntoView {
	let state = RwSignal::new(SwapState::default());
	let dispatch = move |event: SwapEvent| state.update(|s| *s = std::mem::take(s).apply(event));

	// Any click that reaches the window lands outside the dropdowns; their own
	// handlers stop propagation.
	let dismiss = window_event_listener(leptos::ev::click, move |_| {
		if state.with_untracked(|s| s.open.is_some()) {
			dispatch(SwapEvent::DismissDropdowns);
		}
	});
	on_cleanup(move || dismiss.remove());

	view! {
		<section class="swap-page">
			<div class="swap-card">
				<div class="swap-row">
					<div class="swap-row-header">
						<span>"From"</span>
						<span class="swap-balance">{format!("Balance: {SWAP_BALANCE:.2}")}</span>
					</div>
					<div class="swap-input-row">
						<input
							type="number"
							placeholder="0.00"
							prop:value=move || state.with(|s| s.input.clone())
							on:input=move |ev| dispatch(SwapEvent::Input(event_target_value(&ev)))
						/>
						<TokenSelect state=state side=Side::From />
					</div>
					<div class="quick-amounts">
						{QuickAmount::ALL
							.into_iter()
							.map(|quick| {
								view! {
									<button class="quick-btn" on:click=move |_| dispatch(SwapEvent::Quick(quick))>
										{quick.label()}
									</button>
								}
							})
							.collect_view()}
					</div>
				</div>

				<div class="swap-row">
					<div class="swap-row-header">
						<span>"To"</span>
					</div>
					<div class="swap-input-row">
						<input type="text" placeholder="0.00" readonly prop:value=move || state.with(|s| s.output()) />
						<TokenSelect state=state side=Side::To />
					</div>
				</div>

				<div class="swap-rate">{format!("1 BOT ≈ {BOT_TO_USDT} USDT")}</div>
			</div>
		</section>
	}
}
