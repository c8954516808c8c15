//! Site views: ambient canvases, page panels, and the shared helpers they use.

use log::warn;

pub mod ambient;
pub mod chart;
pub mod fund;
pub mod home;
pub mod mint;
pub mod navigation;
pub mod profile;
pub mod stats;
pub mod surface;
pub mod swap;

/// Parses a numeric input the way a lenient form field would.
///
/// Reads the longest leading decimal number (`"2abc"` is 2, `"1e3x"` is
/// 1000). Input without one, and infinite values, read as zero.
pub fn parse_amount(input: &str) -> f64 {
	let text = input.trim_start();
	let bytes = text.as_bytes();
	let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	let int = digits(end);
	end += int;
	let mut frac = 0;
	if bytes.get(end) == Some(&b'.') {
		frac = digits(end + 1);
		if int > 0 || frac > 0 {
			end += 1 + frac;
		}
	}
	if int == 0 && frac == 0 {
		return 0.0;
	}
	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
		let exp = digits(end + 1 + sign);
		if exp > 0 {
			end += 1 + sign + exp;
		}
	}

	text[..end]
		.parse::<f64>()
		.ok()
		.filter(|v| v.is_finite())
		.unwrap_or(0.0)
}

/// Blocking browser alert; mock transactions resolve through this.
pub fn alert(message: &str) {
	let shown = web_sys::window().map(|w| w.alert_with_message(message));
	if !matches!(shown, Some(Ok(()))) {
		warn!("bolt-site: alert unavailable: {message}");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_is_lenient() {
		assert_eq!(parse_amount(""), 0.0);
		assert_eq!(parse_amount("abc"), 0.0);
		assert_eq!(parse_amount(" 2.5 "), 2.5);
		assert_eq!(parse_amount("inf"), 0.0);
		assert_eq!(parse_amount("NaN"), 0.0);
		assert_eq!(parse_amount("-"), 0.0);
		assert_eq!(parse_amount("."), 0.0);
	}

	#[test]
	fn parse_reads_numeric_prefix() {
		assert_eq!(parse_amount("2abc"), 2.0);
		assert_eq!(parse_amount("  -3.5kg"), -3.5);
		assert_eq!(parse_amount("1.2.3"), 1.2);
		assert_eq!(parse_amount("2."), 2.0);
		assert_eq!(parse_amount(".5"), 0.5);
		assert_eq!(parse_amount("1e3x"), 1000.0);
		assert_eq!(parse_amount("1e"), 1.0);
		assert_eq!(parse_amount("1e+"), 1.0);
		assert_eq!(parse_amount("1e400"), 0.0);
	}
}
