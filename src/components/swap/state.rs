//! Swap widget state: fixed-rate quoting, quick-fill buttons, and token dropdowns.

use crate::components::parse_amount;

/// 1 BOT buys this many USDT.
pub const BOT_TO_USDT: f64 = 0.2848;

/// Mock balance used by the quick-fill buttons.
pub const SWAP_BALANCE: f64 = 1234.56;

/// Output field text for an input: two decimals, blank when the input reads as zero.
pub fn quote_output(input: &str) -> String {
	let value = parse_amount(input);
	if value == 0.0 {
		String::new()
	} else {
		format!("{:.2}", value * BOT_TO_USDT)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAmount {
	Quarter,
	Half,
	ThreeQuarters,
	Max,
}

impl QuickAmount {
	pub const ALL: [QuickAmount; 4] = [
		QuickAmount::Quarter,
		QuickAmount::Half,
		QuickAmount::ThreeQuarters,
		QuickAmount::Max,
	];

	pub fn label(self) -> &'static str {
		match self {
			QuickAmount::Quarter => "25%",
			QuickAmount::Half => "50%",
			QuickAmount::ThreeQuarters => "75%",
			QuickAmount::Max => "MAX",
		}
	}

	pub fn fraction(self) -> f64 {
		match self {
			QuickAmount::Quarter => 0.25,
			QuickAmount::Half => 0.5,
			QuickAmount::ThreeQuarters => 0.75,
			QuickAmount::Max => 1.0,
		}
	}

	pub fn fill(self, balance: f64) -> String {
		format!("{:.2}", balance * self.fraction())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	From,
	To,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
	pub symbol: &'static str,
	pub enabled: bool,
}

pub const TOKENS: &[Token] = &[
	Token {
		symbol: "BOT",
		enabled: true,
	},
	Token {
		symbol: "USDT",
		enabled: true,
	},
	Token {
		symbol: "BNB",
		enabled: false,
	},
];

fn token(symbol: &str) -> Option<&'static Token> {
	TOKENS.iter().find(|t| t.symbol == symbol)
}

#[derive(Clone, Debug, PartialEq)]
pub enum SwapEvent {
	Input(String),
	Quick(QuickAmount),
	ToggleDropdown(Side),
	Pick(Side, &'static str),
	DismissDropdowns,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwapState {
	pub input: String,
	pub from: &'static str,
	pub to: &'static str,
	/// At most one dropdown is open at a time.
	pub open: Option<Side>,
}

impl Default for SwapState {
	fn default() -> Self {
		Self {
			input: String::new(),
			from: "BOT",
			to: "USDT",
			open: None,
		}
	}
}

impl SwapState {
	pub fn apply(self, event: SwapEvent) -> Self {
		match event {
			SwapEvent::Input(input) => Self { input, ..self },
			SwapEvent::Quick(quick) => Self {
				input: quick.fill(SWAP_BALANCE),
				..self
			},
			SwapEvent::ToggleDropdown(side) => Self {
				open: if self.open == Some(side) { None } else { Some(side) },
				..self
			},
			SwapEvent::Pick(side, symbol) => match token(symbol) {
				Some(t) if t.enabled => match side {
					Side::From => Self {
						from: t.symbol,
						open: None,
						..self
					},
					Side::To => Self {
						to: t.symbol,
						open: None,
						..self
					},
				},
				_ => self,
			},
			SwapEvent::DismissDropdowns => Self { open: None, ..self },
		}
	}

	pub fn output(&self) -> String {
		quote_output(&self.input)
	}

	pub fn selected(&self, side: Side) -> &'static str {
		match side {
			Side::From => self.from,
			Side::To => self.to,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quotes_at_fixed_rate() {
		assert_eq!(quote_output("100"), "28.48");
		assert_eq!(quote_output(""), "");
		assert_eq!(quote_output("0"), "");
		assert_eq!(quote_output("junk"), "");
	}

	#[test]
	fn quick_fill_fractions_of_balance() {
		assert_eq!(QuickAmount::Quarter.fill(SWAP_BALANCE), "308.64");
		assert_eq!(QuickAmount::Half.fill(SWAP_BALANCE), "617.28");
		assert_eq!(QuickAmount::ThreeQuarters.fill(SWAP_BALANCE), "925.92");
		assert_eq!(QuickAmount::Max.fill(SWAP_BALANCE), "1234.56");

		let s = SwapState::default().apply(SwapEvent::Quick(QuickAmount::Max));
		assert_eq!(s.output(), "351.60");
	}

	#[test]
	fn opening_one_dropdown_closes_the_other() {
		let s = SwapState::default().apply(SwapEvent::ToggleDropdown(Side::From));
		assert_eq!(s.open, Some(Side::From));
		let s = s.apply(SwapEvent::ToggleDropdown(Side::To));
		assert_eq!(s.open, Some(Side::To));
		let s = s.apply(SwapEvent::ToggleDropdown(Side::To));
		assert_eq!(s.open, None);
	}

	#[test]
	fn picking_enabled_token_selects_and_closes() {
		let s = SwapState::default()
			.apply(SwapEvent::ToggleDropdown(Side::From))
			.apply(SwapEvent::Pick(Side::From, "USDT"));
		assert_eq!(s.selected(Side::From), "USDT");
		assert_eq!(s.open, None);
	}

	#[test]
	fn disabled_or_unknown_tokens_are_ignored() {
		let open = SwapState::default().apply(SwapEvent::ToggleDropdown(Side::To));
		assert_eq!(open.clone().apply(SwapEvent::Pick(Side::To, "BNB")), open);
		assert_eq!(open.clone().apply(SwapEvent::Pick(Side::To, "DOGE")), open);
	}

	#[test]
	fn outside_click_dismisses() {
		let s = SwapState::default()
			.apply(SwapEvent::ToggleDropdown(Side::From))
			.apply(SwapEvent::DismissDropdowns);
		assert_eq!(s.open, None);
	}

	#[test]
	fn dismissal_keeps_selection_and_input() {
		let s = SwapState::default()
			.apply(SwapEvent::Input("10".into()))
			.apply(SwapEvent::Pick(Side::To, "BOT"))
			.apply(SwapEvent::ToggleDropdown(Side::To))
			.apply(SwapEvent::DismissDropdowns);
		assert_eq!(s.open, None);
		assert_eq!(s.to, "BOT");
		assert_eq!(s.output(), "2.85");
		assert_eq!(s.clone().apply(SwapEvent::DismissDropdowns), s);
	}
}
