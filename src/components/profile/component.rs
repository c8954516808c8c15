//! Profile page view and its clipboard glue.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::state::{COPIED_FEEDBACK, ProfileEvent, ProfileState, generate_invite_code};
use crate::components::ambient::{OrbitRingCanvas, OrbitalSparkles};

/// Starts `navigator.clipboard.writeText(text)` and returns its promise.
fn write_clipboard(text: &str) -> Result<js_sys::Promise, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
	let write_text: js_sys::Function =
		js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
	write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()
}

/// Profile page: orbit ring avatar, invite-code modal and transfer placeholder.
#[component]
pub fn MyPage() -> impl IntoView {
	let state = RwSignal::new(ProfileState::default());
	let dispatch = move |event: ProfileEvent| state.update(|s| *s = std::mem::take(s).apply(event));

	let open_invite = move |_: MouseEvent| {
		let code = generate_invite_code(&mut rand::thread_rng());
		dispatch(ProfileEvent::OpenInvite(code));
	};
	let copy = move |_: MouseEvent| {
		let code = state.with(|s| s.code.clone());
		match write_clipboard(&code) {
			Ok(promise) => {
				let on_copied = Closure::once(move |_: JsValue| {
					dispatch(ProfileEvent::Copied);
					let generation = state.with(|s| s.copy_generation);
					set_timeout(
						move || dispatch(ProfileEvent::CopyReset(generation)),
						COPIED_FEEDBACK,
					);
				});
				let _ = promise.then(&on_copied);
				on_copied.forget();
			}
			Err(err) => warn!("bolt-site: clipboard unavailable: {err:?}"),
		}
	};

	view! {
		<section class="my-page">
			<div class="profile-header">
				<div class="avatar-ring" style="position: relative;">
					<OrbitRingCanvas />
					<OrbitalSparkles count=6 />
				</div>
			</div>

			<div class="profile-actions">
				<button class="profile-action" on:click=open_invite>
					"Invite friends"
				</button>
				<button class="profile-action" on:click=move |_| dispatch(ProfileEvent::OpenTransfer)>
					"Transfer"
				</button>
			</div>

			<div class="invite-modal" class:show=move || state.with(|s| s.invite_open)>
				<div class="invite-modal-backdrop" on:click=move |_| dispatch(ProfileEvent::CloseInvite)></div>
				<div class="invite-modal-body">
					<button class="invite-modal-close" on:click=move |_| dispatch(ProfileEvent::CloseInvite)>
						"×"
					</button>
					<div class="invite-label">"Your invite code"</div>
					<div class="invite-code">{move || state.with(|s| s.code.clone())}</div>
					<button class="invite-copy-btn" on:click=copy>
						<span>{move || state.with(|s| s.copy_label())}</span>
					</button>
					<button class="invite-done-btn" on:click=move |_| dispatch(ProfileEvent::CloseInvite)>
						"Close"
					</button>
				</div>
			</div>

			<div class="coming-modal" class:show=move || state.with(|s| s.transfer_open)>
				<div class="coming-modal-backdrop" on:click=move |_| dispatch(ProfileEvent::CloseTransfer)></div>
				<div class="coming-modal-body">
					<div class="coming-title">"Coming soon"</div>
					<p>"Transfers between accounts will open in a later release."</p>
					<button class="coming-close-btn" on:click=move |_| dispatch(ProfileEvent::CloseTransfer)>
						"OK"
					</button>
				</div>
			</div>
		</section>
	}
}
