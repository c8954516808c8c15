//! Fund panel state: product selection, deposit validation, and withdraw quotes.
//!
//! Rates and exit taxes are display constants; nothing here accrues or settles.

use thiserror::Error;

use crate::components::parse_amount;

/// Mock wallet balance available for deposits.
pub const WALLET_BALANCE: f64 = 99970.71;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FundTab {
	#[default]
	Products,
	Holdings,
}

impl FundTab {
	pub const ALL: [FundTab; 2] = [FundTab::Products, FundTab::Holdings];

	pub fn label(self) -> &'static str {
		match self {
			FundTab::Products => "Products",
			FundTab::Holdings => "My Holdings",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Product {
	#[default]
	Flexible,
	Fixed,
}

impl Product {
	pub const ALL: [Product; 2] = [Product::Flexible, Product::Fixed];

	pub fn name(self) -> &'static str {
		match self {
			Product::Flexible => "Flexible",
			Product::Fixed => "Fixed",
		}
	}

	pub fn rate_label(self) -> &'static str {
		match self {
			Product::Flexible => "43%",
			Product::Fixed => "53%",
		}
	}

	pub fn lock_label(self) -> &'static str {
		match self {
			Product::Flexible => "Deposit and withdraw anytime",
			Product::Fixed => "90 days",
		}
	}

	/// Fraction withheld on withdrawal.
	pub fn exit_tax(self) -> f64 {
		match self {
			Product::Flexible => 0.02,
			Product::Fixed => 0.50,
		}
	}

	pub fn tax_note(self) -> &'static str {
		match self {
			Product::Flexible => "Flexible exit tax: 2% (principal + yield)",
			Product::Fixed => "Fixed early exit tax: 50% (principal only)",
		}
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum DepositError {
	#[error("Enter an amount")]
	NotPositive,
	#[error("Insufficient balance")]
	InsufficientBalance,
}

impl DepositError {
	pub fn message(&self) -> Option<String> {
		match self {
			DepositError::NotPositive => None,
			e => Some(e.to_string()),
		}
	}
}

pub fn validate_deposit(amount: f64) -> Result<(), DepositError> {
	if amount > WALLET_BALANCE {
		Err(DepositError::InsufficientBalance)
	} else if amount <= 0.0 {
		Err(DepositError::NotPositive)
	} else {
		Ok(())
	}
}

/// An open position in the mock holdings list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Holding {
	pub product: Product,
	pub principal: f64,
	/// Principal plus accrued yield.
	pub current: f64,
}

pub const HOLDINGS: &[Holding] = &[
	Holding {
		product: Product::Flexible,
		principal: 1000.0,
		current: 1036.5842,
	},
	Holding {
		product: Product::Fixed,
		principal: 5000.0,
		current: 5218.3310,
	},
];

/// Accrued yield across all holdings.
pub fn total_yield(holdings: &[Holding]) -> f64 {
	holdings.iter().map(|h| h.current - h.principal).sum()
}

/// Figures shown in the withdraw modal.
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawQuote {
	pub product: Product,
	pub label: &'static str,
	pub hint: &'static str,
	pub amount: f64,
	pub receive: f64,
}

impl WithdrawQuote {
	/// Flexible positions pay out principal plus yield; fixed ones exit early
	/// with principal only.
	pub fn for_holding(holding: &Holding) -> Self {
		let product = holding.product;
		let (label, hint, amount) = match product {
			Product::Flexible => ("Flexible holding", "Principal + yield", holding.current),
			Product::Fixed => (
				"Fixed holding (early exit)",
				"Principal only (no yield)",
				holding.principal,
			),
		};
		Self {
			product,
			label,
			hint,
			amount,
			receive: amount * (1.0 - product.exit_tax()),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum FundEvent {
	SelectTab(FundTab),
	SelectProduct(Product),
	DepositInput(String),
	DepositMax,
	Deposited,
	OpenWithdraw(Holding),
	CloseWithdraw,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FundState {
	pub tab: FundTab,
	pub product: Product,
	pub deposit: String,
	pub withdraw: Option<WithdrawQuote>,
}

impl FundState {
	pub fn apply(self, event: FundEvent) -> Self {
		match event {
			FundEvent::SelectTab(tab) => Self { tab, ..self },
			FundEvent::SelectProduct(product) => Self { product, ..self },
			FundEvent::DepositInput(deposit) => Self { deposit, ..self },
			FundEvent::DepositMax => Self {
				deposit: WALLET_BALANCE.to_string(),
				..self
			},
			FundEvent::Deposited => Self {
				deposit: String::new(),
				..self
			},
			FundEvent::OpenWithdraw(holding) => Self {
				withdraw: Some(WithdrawQuote::for_holding(&holding)),
				..self
			},
			FundEvent::CloseWithdraw => Self {
				withdraw: None,
				..self
			},
		}
	}

	pub fn deposit_validation(&self) -> Result<(), DepositError> {
		validate_deposit(parse_amount(&self.deposit))
	}

	pub fn receipt(&self) -> Option<String> {
		self.deposit_validation().ok().map(|_| {
			format!(
				"Deposited {} BOT into {}",
				parse_amount(&self.deposit),
				self.product.name()
			)
		})
	}
}
