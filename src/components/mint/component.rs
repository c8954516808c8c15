//! Mint page view.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::state::{MintEvent, MintState, MintTab, Package, RecordFilter, RecordKind};
use crate::components::alert;

fn kind_class(kind: RecordKind) -> &'static str {
	match kind {
		RecordKind::Principal => "record-type principal",
		RecordKind::Profit => "record-type profit",
		RecordKind::Transfer => "record-type transfer",
	}
}

/// Mint page: package purchase, ledger, and transfer tabs.
#[component]
pub fn MintPage() -> impl IntoView {
	let state = RwSignal::new(MintState::default());
	let dispatch = move |event: MintEvent| state.update(|s| *s = std::mem::take(s).apply(event));

	let error = move || state.with(|s| s.validation().err().and_then(|e| e.message()));
	let can_purchase = move || state.with(|s| s.validation().is_ok());
	let purchase = move |_: MouseEvent| {
		if let Some(receipt) = state.with(|s| s.receipt()) {
			alert(&receipt);
			dispatch(MintEvent::Purchased);
		}
	};

	view! {
		<section class="mint-page">
			<div class="mint-tabs">
				{MintTab::ALL
					.into_iter()
					.map(|tab| {
						view! {
							<button
								class="mint-tab"
								class:active=move || state.with(|s| s.tab == tab)
								on:click=move |_| dispatch(MintEvent::SelectTab(tab))
							>
								{tab.label()}
							</button>
						}
					})
					.collect_view()}
			</div>

			<div class="mint-tab-content" class:active=move || state.with(|s| s.tab == MintTab::Purchase)>
				<div class="package-list">
					{Package::ALL
						.into_iter()
						.map(|package| {
							view! {
								<div
									class="package-card"
									class:selected=move || state.with(|s| s.package == package)
									on:click=move |_| dispatch(MintEvent::SelectPackage(package))
								>
									<span class="package-name">{package.name()}</span>
									<span class="package-rate">{format!("{}% daily", package.daily_rate())}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
				<div class="purchase-form">
					<span class="selected-package">{move || state.with(|s| s.package.name())}</span>
					<span class="purchase-range">{move || state.with(|s| s.package.range_label())}</span>
					<input
						type="number"
						placeholder="0.00"
						prop:value=move || state.with(|s| s.amount.clone())
						on:input=move |ev| dispatch(MintEvent::AmountInput(event_target_value(&ev)))
					/>
					<div class="purchase-error">{move || error().unwrap_or_default()}</div>
					<div class="purchase-info">
						<div class="info-row">
							<span>"Estimated total"</span>
							<span class="info-value">
								{move || format!("{:.2} USDT", state.with(|s| s.estimate().total))}
							</span>
						</div>
						<div class="info-row">
							<span>"Estimated daily"</span>
							<span class="info-value">
								{move || format!("{:.2} USDT", state.with(|s| s.estimate().daily))}
							</span>
						</div>
					</div>
					<button class="purchase-btn" disabled=move || !can_purchase() on:click=purchase>
						"Purchase"
					</button>
				</div>
			</div>

			<div class="mint-tab-content" class:active=move || state.with(|s| s.tab == MintTab::Records)>
				<div class="record-tabs">
					{RecordFilter::ALL
						.into_iter()
						.map(|filter| {
							view! {
								<button
									class="record-tab"
									class:active=move || state.with(|s| s.record_filter == filter)
									on:click=move |_| dispatch(MintEvent::FilterRecords(filter))
								>
									{filter.label()}
								</button>
							}
						})
						.collect_view()}
				</div>
				<div class="record-list">
					{move || {
						state
							.with(|s| s.visible_records().copied().collect::<Vec<_>>())
							.into_iter()
							.map(|record| {
								view! {
									<div class="record-item">
										<span class={kind_class(record.kind)}>{record.title}</span>
										<span class="record-amount">{record.amount}</span>
										<span class="record-time">{record.time}</span>
									</div>
								}
							})
							.collect_view()
					}}
				</div>
			</div>

			<div class="mint-tab-content" class:active=move || state.with(|s| s.tab == MintTab::Transfer)>
				<div class="transfer-form">
					<input
						type="number"
						placeholder="0.0000"
						prop:value=move || state.with(|s| s.transfer_amount.clone())
						on:input=move |ev| dispatch(MintEvent::TransferInput(event_target_value(&ev)))
					/>
					<button class="transfer-max-btn" on:click=move |_| dispatch(MintEvent::TransferMax)>
						"MAX"
					</button>
				</div>
			</div>
		</section>
	}
}
