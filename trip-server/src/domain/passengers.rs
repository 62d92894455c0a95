//! Passenger count bounds and input coercion.

/// Fewest passengers a search may carry.
pub const MIN_PASSENGERS: i64 = 1;

/// Most passengers a search may carry.
pub const MAX_PASSENGERS: i64 = 10;

/// Passenger count of a fresh form, and the fallback for unusable input.
pub const DEFAULT_PASSENGERS: i64 = 1;

/// Coerce raw passenger input to a count.
///
/// Reads an optional sign followed by leading digits and ignores whatever
/// follows them, so `"3 adults"` is 3 and `"2.5"` is 2. Input with no leading
/// digits, or that reads as zero, falls back to [`DEFAULT_PASSENGERS`].
/// Out-of-range values are passed through; rejecting them is the validator's
/// job. Digit runs too long for an `i64` saturate rather than wrap.
///
/// # Examples
///
/// ```
/// use trip_server::domain::coerce_passenger_input;
///
/// assert_eq!(coerce_passenger_input("4"), 4);
/// assert_eq!(coerce_passenger_input("11"), 11);
/// assert_eq!(coerce_passenger_input("abc"), 1);
/// assert_eq!(coerce_passenger_input(""), 1);
/// ```
pub fn coerce_passenger_input(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    let digits = &digits[..end];
    if digits.is_empty() {
        return DEFAULT_PASSENGERS;
    }

    // Only overflow can fail here: every byte is a digit.
    let Ok(value) = digits.parse::<i64>() else {
        return if negative { i64::MIN } else { i64::MAX };
    };

    match value {
        0 => DEFAULT_PASSENGERS,
        v if negative => -v,
        v => v,
    }
}
