//! Profile page state: the invite-code modal and the transfer placeholder modal.

use std::time::Duration;

use rand::Rng;

/// How long the copy button reads "Copied" before reverting.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1500);

/// Draws a fresh six-digit invite code.
pub fn generate_invite_code<R: Rng + ?Sized>(rng: &mut R) -> String {
	rng.gen_range(100_000..=999_999u32).to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProfileEvent {
	OpenInvite(String),
	CloseInvite,
	Copied,
	/// Carries the copy generation the reset was scheduled for.
	CopyReset(u32),
	OpenTransfer,
	CloseTransfer,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
	pub invite_open: bool,
	pub code: String,
	pub copied: bool,
	/// Bumped on every copy so a stale reset cannot clear a newer "Copied".
	pub copy_generation: u32,
	pub transfer_open: bool,
}

impl ProfileState {
	pub fn apply(self, event: ProfileEvent) -> Self {
		match event {
			ProfileEvent::OpenInvite(code) => Self {
				invite_open: true,
				code,
				copied: false,
				..self
			},
			ProfileEvent::CloseInvite => Self {
				invite_open: false,
				..self
			},
			ProfileEvent::Copied => Self {
				copied: true,
				copy_generation: self.copy_generation.wrapping_add(1),
				..self
			},
			ProfileEvent::CopyReset(generation) if generation == self.copy_generation => Self {
				copied: false,
				..self
			},
			ProfileEvent::CopyReset(_) => self,
			ProfileEvent::OpenTransfer => Self {
				transfer_open: true,
				..self
			},
			ProfileEvent::CloseTransfer => Self {
				transfer_open: false,
				..self
			},
		}
	}

	pub fn copy_label(&self) -> &'static str {
		if self.copied { "Copied" } else { "Copy" }
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn invite_codes_are_six_digits() {
		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..500 {
			let code = generate_invite_code(&mut rng);
			assert_eq!(code.len(), 6);
			let n: u32 = code.parse().unwrap();
			assert!((100_000..=999_999).contains(&n));
		}
	}

	#[test]
	fn opening_invite_sets_code() {
		let s = ProfileState::default().apply(ProfileEvent::OpenInvite("123456".into()));
		assert!(s.invite_open);
		assert_eq!(s.code, "123456");
		let s = s.apply(ProfileEvent::CloseInvite);
		assert!(!s.invite_open);
	}

	#[test]
	fn copied_label_reverts_on_matching_reset() {
		let s = ProfileState::default().apply(ProfileEvent::Copied);
		assert_eq!(s.copy_label(), "Copied");
		let generation = s.copy_generation;
		let s = s.apply(ProfileEvent::CopyReset(generation));
		assert_eq!(s.copy_label(), "Copy");
	}

	#[test]
	fn stale_reset_is_ignored() {
		let s = ProfileState::default().apply(ProfileEvent::Copied);
		let first = s.copy_generation;
		let s = s.apply(ProfileEvent::Copied);
		let s = s.apply(ProfileEvent::CopyReset(first));
		assert!(s.copied);
	}

	#[test]
	fn transfer_modal_toggles() {
		let s = ProfileState::default().apply(ProfileEvent::OpenTransfer);
		assert!(s.transfer_open);
		assert!(!s.apply(ProfileEvent::CloseTransfer).transfer_open);
	}
}
