//! Mint panel state: package selection, purchase validation and estimates,
//! record filtering, and the transfer field.

use thiserror::Error;

use crate::components::parse_amount;

/// Estimated payout cycle in days.
pub const CYCLE_DAYS: f64 = 12.0;

/// Mock transferable balance. Transfers are clamped to it.
pub const TRANSFERABLE_BALANCE: f64 = 0.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MintTab {
	#[default]
	Purchase,
	Records,
	Transfer,
}

impl MintTab {
	pub const ALL: [MintTab; 3] = [MintTab::Purchase, MintTab::Records, MintTab::Transfer];

	pub fn label(self) -> &'static str {
		match self {
			MintTab::Purchase => "Purchase",
			MintTab::Records => "Records",
			MintTab::Transfer => "Transfer",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Package {
	#[default]
	Basic,
	Pro,
	Elite,
}

impl Package {
	pub const ALL: [Package; 3] = [Package::Basic, Package::Pro, Package::Elite];

	pub fn name(self) -> &'static str {
		match self {
			Package::Basic => "V-Basic",
			Package::Pro => "V-Pro",
			Package::Elite => "V-Elite",
		}
	}

	pub fn min(self) -> f64 {
		match self {
			Package::Basic => 1.0,
			Package::Pro => 2.0,
			Package::Elite => 3.0,
		}
	}

	/// Upper bound in USDT; `None` is unbounded.
	pub fn max(self) -> Option<f64> {
		match self {
			Package::Basic => Some(2.0),
			Package::Pro => Some(3.0),
			Package::Elite => None,
		}
	}

	/// Daily rate in percent.
	pub fn daily_rate(self) -> f64 {
		1.0
	}

	pub fn range_label(self) -> String {
		match self.max() {
			Some(max) => format!("Package range: {} - {} USDT", self.min(), max),
			None => format!("Package range: {} - ∞ USDT", self.min()),
		}
	}
}

#[derive(Debug, Error, PartialEq)]
pub enum PurchaseError {
	#[error("Enter an amount")]
	Empty,
	#[error("Amount cannot be lower than {0} USDT")]
	BelowMinimum(f64),
	#[error("Amount cannot exceed {0} USDT")]
	AboveMaximum(f64),
}

impl PurchaseError {
	/// Message shown under the field. An empty field disables purchase silently.
	pub fn message(&self) -> Option<String> {
		match self {
			PurchaseError::Empty => None,
			e => Some(e.to_string()),
		}
	}
}

pub fn validate_purchase(package: Package, amount: f64) -> Result<(), PurchaseError> {
	if amount == 0.0 {
		Err(PurchaseError::Empty)
	} else if amount < package.min() {
		Err(PurchaseError::BelowMinimum(package.min()))
	} else if let Some(max) = package.max().filter(|max| amount > *max) {
		Err(PurchaseError::AboveMaximum(max))
	} else {
		Ok(())
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
	pub daily: f64,
	pub total: f64,
}

pub fn estimate(package: Package, amount: f64) -> Estimate {
	let daily = amount * (package.daily_rate() / 100.0);
	Estimate {
		daily,
		total: daily * CYCLE_DAYS,
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
	Principal,
	Profit,
	Transfer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordFilter {
	#[default]
	All,
	Principal,
	Profit,
	Transfer,
}

impl RecordFilter {
	pub const ALL: [RecordFilter; 4] = [
		RecordFilter::All,
		RecordFilter::Principal,
		RecordFilter::Profit,
		RecordFilter::Transfer,
	];

	pub fn label(self) -> &'static str {
		match self {
			RecordFilter::All => "All",
			RecordFilter::Principal => "Principal",
			RecordFilter::Profit => "Profit",
			RecordFilter::Transfer => "Transfer",
		}
	}

	pub fn admits(self, kind: RecordKind) -> bool {
		match self {
			RecordFilter::All => true,
			RecordFilter::Principal => kind == RecordKind::Principal,
			RecordFilter::Profit => kind == RecordKind::Profit,
			RecordFilter::Transfer => kind == RecordKind::Transfer,
		}
	}
}

/// One row of the mock mint ledger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
	pub kind: RecordKind,
	pub title: &'static str,
	pub amount: &'static str,
	pub time: &'static str,
}

pub const RECORDS: &[Record] = &[
	Record {
		kind: RecordKind::Principal,
		title: "V-Pro purchase",
		amount: "-2.50 USDT",
		time: "2024-11-02 14:21",
	},
	Record {
		kind: RecordKind::Profit,
		title: "Daily yield",
		amount: "+0.03 USDT",
		time: "2024-11-03 00:00",
	},
	Record {
		kind: RecordKind::Profit,
		title: "Daily yield",
		amount: "+0.03 USDT",
		time: "2024-11-04 00:00",
	},
	Record {
		kind: RecordKind::Transfer,
		title: "Transfer out",
		amount: "-0.06 USDT",
		time: "2024-11-05 09:12",
	},
	Record {
		kind: RecordKind::Principal,
		title: "V-Basic purchase",
		amount: "-1.00 USDT",
		time: "2024-11-06 18:40",
	},
];

#[derive(Clone, Debug, PartialEq)]
pub enum MintEvent {
	SelectTab(MintTab),
	SelectPackage(Package),
	AmountInput(String),
	FilterRecords(RecordFilter),
	TransferInput(String),
	TransferMax,
	Purchased,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MintState {
	pub tab: MintTab,
	pub package: Package,
	pub amount: String,
	pub record_filter: RecordFilter,
	pub transfer_amount: String,
}

impl MintState {
	pub fn apply(self, event: MintEvent) -> Self {
		match event {
			MintEvent::SelectTab(tab) => Self { tab, ..self },
			MintEvent::SelectPackage(package) => Self { package, ..self },
			MintEvent::AmountInput(amount) => Self { amount, ..self },
			MintEvent::FilterRecords(record_filter) => Self {
				record_filter,
				..self
			},
			MintEvent::TransferInput(input) => {
				let transfer_amount = if parse_amount(&input) > TRANSFERABLE_BALANCE {
					TRANSFERABLE_BALANCE.to_string()
				} else {
					input
				};
				Self {
					transfer_amount,
					..self
				}
			}
			MintEvent::TransferMax => Self {
				transfer_amount: format!("{TRANSFERABLE_BALANCE:.4}"),
				..self
			},
			MintEvent::Purchased => Self {
				amount: String::new(),
				..self
			},
		}
	}

	pub fn validation(&self) -> Result<(), PurchaseError> {
		validate_purchase(self.package, parse_amount(&self.amount))
	}

	pub fn estimate(&self) -> Estimate {
		estimate(self.package, parse_amount(&self.amount))
	}

	pub fn visible_records(&self) -> impl Iterator<Item = &'static Record> + '_ {
		RECORDS
			.iter()
			.filter(move |r| self.record_filter.admits(r.kind))
	}

	/// Alert text for a successful purchase, or `None` if the amount is invalid.
	pub fn receipt(&self) -> Option<String> {
		self.validation().ok().map(|_| {
			format!(
				"Purchased {} USDT of {}",
				parse_amount(&self.amount),
				self.package.name()
			)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn purchase_bounds_per_package() {
		assert_eq!(validate_purchase(Package::Basic, 0.0), Err(PurchaseError::Empty));
		assert_eq!(
			validate_purchase(Package::Basic, 0.5),
			Err(PurchaseError::BelowMinimum(1.0))
		);
		assert_eq!(validate_purchase(Package::Basic, 2.0), Ok(()));
		assert_eq!(
			validate_purchase(Package::Pro, 3.5),
			Err(PurchaseError::AboveMaximum(3.0))
		);
		assert_eq!(validate_purchase(Package::Elite, 1_000_000.0), Ok(()));
		assert_eq!(
			validate_purchase(Package::Elite, -4.0),
			Err(PurchaseError::BelowMinimum(3.0))
		);
	}

	#[test]
	fn error_messages() {
		assert_eq!(PurchaseError::Empty.message(), None);
		assert_eq!(
			PurchaseError::BelowMinimum(2.0).message().as_deref(),
			Some("Amount cannot be lower than 2 USDT")
		);
		assert_eq!(
			PurchaseError::AboveMaximum(3.0).message().as_deref(),
			Some("Amount cannot exceed 3 USDT")
		);
	}

	#[test]
	fn estimate_uses_daily_rate_over_cycle() {
		let e = estimate(Package::Pro, 2.5);
		assert!((e.daily - 0.025).abs() < 1e-12);
		assert!((e.total - 0.3).abs() < 1e-12);
	}

	#[test]
	fn range_labels() {
		assert_eq!(Package::Basic.range_label(), "Package range: 1 - 2 USDT");
		assert_eq!(Package::Elite.range_label(), "Package range: 3 - ∞ USDT");
	}

	#[test]
	fn switching_package_revalidates_amount() {
		let s = MintState::default().apply(MintEvent::AmountInput("2.5".into()));
		assert_eq!(s.validation(), Err(PurchaseError::AboveMaximum(2.0)));
		let s = s.apply(MintEvent::SelectPackage(Package::Pro));
		assert_eq!(s.validation(), Ok(()));
		assert!(s.receipt().is_some());
		let s = s.apply(MintEvent::Purchased);
		assert_eq!(s.amount, "");
		assert_eq!(s.receipt(), None);
	}

	#[test]
	fn record_filter() {
		let mut s = MintState::default();
		assert_eq!(s.visible_records().count(), RECORDS.len());
		s = s.apply(MintEvent::FilterRecords(RecordFilter::Profit));
		assert!(s.visible_records().all(|r| r.kind == RecordKind::Profit));
		assert_eq!(s.visible_records().count(), 2);
		s = s.apply(MintEvent::FilterRecords(RecordFilter::Transfer));
		assert_eq!(s.visible_records().count(), 1);
	}

	#[test]
	fn transfer_is_clamped_to_balance() {
		let s = MintState::default().apply(MintEvent::TransferInput("5".into()));
		assert_eq!(s.transfer_amount, "0");
		let s = s.apply(MintEvent::TransferInput("".into()));
		assert_eq!(s.transfer_amount, "");
		let s = s.apply(MintEvent::TransferMax);
		assert_eq!(s.transfer_amount, "0.0000");
	}
}
