/// Rounds a number up to the nearest integer.
pub fn ceil(value: f64) -> i64 {
    value.ceil() as i64
}

/// Rounds a number down to the nearest integer.
pub fn floor(value: f64) -> i64 {
    value.floor() as i64
}
