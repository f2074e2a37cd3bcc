/// Number of decimal digits in `|number|`, with `digit_length(0) == 1`
///
/// # Examples
///
/// ```
/// use pget::index::digit_length;
///
/// assert_eq!(digit_length(0), 1);
/// assert_eq!(digit_length(99), 2);
/// assert_eq!(digit_length(-100), 3);
/// ```
pub fn digit_length(number: i64) -> usize {
    match number.unsigned_abs().checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Largest integer below the smallest number with as many digits as `number`
///
/// For `number >= 10` this is `10^(digit_length(number) - 1) - 1`, e.g. `99`
/// for any three-digit number.
///
/// # Returns
///
/// * `Some(boundary)` - The all-nines number one digit shorter than `number`
/// * `None` - `number < 10`, there is no shorter boundary
pub fn nearest_shorter_same_length(number: i64) -> Option<i64> {
    if number < 10 {
        return None;
    }
    let exponent = u32::try_from(digit_length(number) - 1).ok()?;
    Some(10_i64.pow(exponent) - 1)
}
