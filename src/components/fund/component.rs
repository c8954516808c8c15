//! Fund page view: products, holdings and the withdraw modal.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::state::{FundEvent, FundState, FundTab, HOLDINGS, Product, total_yield};
use crate::components::alert;
use crate::components::ambient::YieldRingCanvas;

/// Fund page: yield ring header, product deposit, holdings and withdraw modal.
#[component]
pub fn FundPage() -> impl IntoView {
	let state = RwSignal::new(FundState::default());
	let dispatch = move |event: FundEvent| state.update(|s| *s = std::mem::take(s).apply(event));

	let deposit_error = move || {
		state.with(|s| s.deposit_validation().err().and_then(|e| e.message()))
	};
	let deposit = move |_: MouseEvent| {
		if let Some(receipt) = state.with(|s| s.receipt()) {
			alert(&receipt);
			dispatch(FundEvent::Deposited);
		}
	};
	let confirm_withdraw = move |_: MouseEvent| {
		alert("Withdrawal complete. BOT has been moved to your funding account.");
		dispatch(FundEvent::CloseWithdraw);
	};

	view! {
		<section class="fund-page">
			<div class="fund-header">
				<YieldRingCanvas />
				<div class="total-yield">
					<span class="total-yield-label">"Total yield"</span>
					<span class="total-yield-value">{format!("{:.4} BOT", total_yield(HOLDINGS))}</span>
				</div>
			</div>

			<div class="fund-main-tabs">
				{FundTab::ALL
					.into_iter()
					.map(|tab| {
						view! {
							<button
								class="fund-main-tab"
								class:active=move || state.with(|s| s.tab == tab)
								on:click=move |_| dispatch(FundEvent::SelectTab(tab))
							>
								{tab.label()}
							</button>
						}
					})
					.collect_view()}
			</div>

			<Show when=move || state.with(|s| s.tab == FundTab::Products)>
				<div class="fund-products">
					{Product::ALL
						.into_iter()
						.map(|product| {
							view! {
								<div
									class="fund-pool-card"
									class:selected=move || state.with(|s| s.product == product)
									on:click=move |_| dispatch(FundEvent::SelectProduct(product))
								>
									<span class="pool-name">{product.name()}</span>
									<span class="pool-rate">{product.rate_label()}</span>
								</div>
							}
						})
						.collect_view()}
					<div class="deposit-card">
						<h3>{move || state.with(|s| s.product.name())}</h3>
						<div class="deposit-meta">
							<span>"APY "{move || state.with(|s| s.product.rate_label())}</span>
							<span>{move || state.with(|s| s.product.lock_label())}</span>
						</div>
						<div class="deposit-input-row">
							<input
								type="number"
								placeholder="0.00"
								prop:value=move || state.with(|s| s.deposit.clone())
								on:input=move |ev| dispatch(FundEvent::DepositInput(event_target_value(&ev)))
							/>
							<button class="max-btn" on:click=move |_| dispatch(FundEvent::DepositMax)>
								"MAX"
							</button>
						</div>
						<div class="fund-error">{move || deposit_error().unwrap_or_default()}</div>
						<button
							class="fund-deposit-btn"
							disabled=move || state.with(|s| s.deposit_validation().is_err())
							on:click=deposit
						>
							"Deposit"
						</button>
					</div>
				</div>
			</Show>

			<Show when=move || state.with(|s| s.tab == FundTab::Holdings)>
				<div class="fund-holdings">
					{HOLDINGS
						.iter()
						.copied()
						.map(|holding| {
							view! {
								<div class="holding-card">
									<span class="holding-name">{holding.product.name()}</span>
									<span class="holding-principal">{format!("{:.4} BOT", holding.principal)}</span>
									<span class="holding-current">{format!("{:.4} BOT", holding.current)}</span>
									<button
										class="holding-withdraw-btn"
										on:click=move |_| dispatch(FundEvent::OpenWithdraw(holding))
									>
										"Withdraw"
									</button>
								</div>
							}
						})
						.collect_view()}
				</div>
			</Show>

			<div class="fund-modal" class:show=move || state.with(|s| s.withdraw.is_some())>
				<div class="fund-modal-backdrop" on:click=move |_| dispatch(FundEvent::CloseWithdraw)></div>
				<div class="fund-modal-body">
					<button class="fund-modal-close" on:click=move |_| dispatch(FundEvent::CloseWithdraw)>
						"×"
					</button>
					{move || {
						state
							.with(|s| s.withdraw.clone())
							.map(|quote| {
								view! {
									<div class="withdraw-type">{quote.label}</div>
									<div class="withdraw-amount">{format!("{:.4}", quote.amount)}</div>
									<div class="withdraw-hint">{quote.hint}</div>
									<div class="withdraw-receive">{format!("{:.4}", quote.receive)}</div>
									<div class="withdraw-tax-notice">
										<span>{quote.product.tax_note()}</span>
									</div>
								}
							})
					}}
					<button class="fund-withdraw-confirm" on:click=confirm_withdraw>
						"Confirm"
					</button>
				</div>
			</div>
		</section>
	}
}
