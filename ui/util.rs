/// How the integer part of a number is grouped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberLocale {
	/// `en-IN`: the last three digits, then groups of two, as in `12,34,567`.
	Indian,
	/// `en-US`: groups of three, as in `1,234,567`.
	International,
}

impl Default for NumberLocale {
	fn default() -> NumberLocale {
		NumberLocale::Indian
	}
}

/// Format a number the way `toLocaleString` does with its default options, which keep at most three fraction digits.
pub fn format_number(value: f64, locale: NumberLocale) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
	}
	let (integer, fraction) = round_decimal(&value.abs().to_string(), 3);
	let fraction = fraction.trim_end_matches('0');
	let is_zero = integer.chars().all(|c| c == '0') && fraction.is_empty();
	let mut formatted = String::with_capacity(integer.len() + fraction.len() + 8);
	if value < 0.0 && !is_zero {
		formatted.push('-');
	}
	formatted.push_str(&group_digits(&integer, locale));
	if !fraction.is_empty() {
		formatted.push('.');
		formatted.push_str(fraction);
	}
	formatted
}

pub fn format_currency(value: f64, symbol: &str, locale: NumberLocale) -> String {
	format!("{}{}", symbol, format_number(value, locale))
}

/// Round the shortest decimal form of a number half away from zero, keeping at most `max_fraction_digits` fraction digits. `decimal` is unsigned and has no exponent.
fn round_decimal(decimal: &str, max_fraction_digits: usize) -> (String, String) {
	let (integer, fraction) = decimal.split_once('.').unwrap_or((decimal, ""));
	if fraction.len() <= max_fraction_digits {
		return (integer.to_owned(), fraction.to_owned());
	}
	let mut digits: Vec<u8> = integer
		.bytes()
		.chain(fraction[..max_fraction_digits].bytes())
		.collect();
	if fraction.as_bytes()[max_fraction_digits] >= b'5' {
		let mut carry = true;
		for digit in digits.iter_mut().rev() {
			if *digit == b'9' {
				*digit = b'0';
			} else {
				*digit += 1;
				carry = false;
				break;
			}
		}
		if carry {
			digits.insert(0, b'1');
		}
	}
	let (integer, fraction) = digits.split_at(digits.len() - max_fraction_digits);
	let collect_digits =
		|digits: &[u8]| digits.iter().map(|&digit| digit as char).collect::<String>();
	(collect_digits(integer), collect_digits(fraction))
}

fn group_digits(digits: &str, locale: NumberLocale) -> String {
	if digits.len() <= 3 {
		return digits.to_owned();
	}
	let group_size = match locale {
		NumberLocale::Indian => 2,
		NumberLocale::International => 3,
	};
	let (mut head, tail) = digits.split_at(digits.len() - 3);
	let mut groups = vec![tail];
	while head.len() > group_size {
		let (rest, group) = head.split_at(head.len() - group_size);
		groups.push(group);
		head = rest;
	}
	groups.push(head);
	groups.reverse();
	groups.join(",")
}

#[test]
fn test_format_number_indian() {
	let locale = NumberLocale::Indian;
	assert_eq!(format_number(55000.0, locale), "55,000");
	assert_eq!(format_number(999.0, locale), "999");
	assert_eq!(format_number(1234567.0, locale), "12,34,567");
	assert_eq!(format_number(123456.789, locale), "1,23,456.789");
	assert_eq!(format_number(98765432.1, locale), "9,87,65,432.1");
	assert_eq!(format_number(-1234.5, locale), "-1,234.5");
}

#[test]
fn test_format_number_international() {
	let locale = NumberLocale::International;
	assert_eq!(format_number(55000.0, locale), "55,000");
	assert_eq!(format_number(1234567.0, locale), "1,234,567");
	assert_eq!(format_number(98765432.1, locale), "98,765,432.1");
}

#[test]
fn test_format_number_rounding() {
	let locale = NumberLocale::Indian;
	assert_eq!(format_number(0.1 + 0.2, locale), "0.3");
	assert_eq!(format_number(49999.99, locale), "49,999.99");
	assert_eq!(format_number(999.9996, locale), "1,000");
	assert_eq!(format_number(0.0001, locale), "0");
	assert_eq!(format_number(-0.0001, locale), "0");
	assert_eq!(format_number(0.0, locale), "0");
	assert_eq!(format_number(0.9996, locale), "1");
}

#[test]
fn test_format_number_rounds_ties_away_from_zero() {
	let locale = NumberLocale::Indian;
	assert_eq!(format_number(1.0005, locale), "1.001");
	assert_eq!(format_number(2.0015, locale), "2.002");
	assert_eq!(format_number(-1.0005, locale), "-1.001");
	assert_eq!(format_number(99999.9995, locale), "1,00,000");
	assert_eq!(format_number(1.0004999, locale), "1");
}

#[test]
fn test_format_number_non_finite() {
	assert_eq!(format_number(f64::NAN, NumberLocale::Indian), "NaN");
	assert_eq!(format_number(f64::INFINITY, NumberLocale::Indian), "∞");
	assert_eq!(format_number(f64::NEG_INFINITY, NumberLocale::Indian), "-∞");
}

#[test]
fn test_format_currency() {
	assert_eq!(
		format_currency(74990.0, "₹", NumberLocale::Indian),
		"₹74,990"
	);
}
