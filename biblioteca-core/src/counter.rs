/// Remaining-character count below which the counter switches to its
/// warning presentation.
pub const WARNING_THRESHOLD: i64 = 10;

/// What a character counter should display for the current field state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub text: String,
    pub warning: bool,
}

/// Characters left before the field reaches its nominal limit. Negative
/// when the value already exceeds the limit (possible through scripted or
/// pre-filled values); the counter displays the negative number as-is.
#[must_use]
pub const fn remaining(max_length: u32, value_length: u32) -> i64 {
    max_length as i64 - value_length as i64
}

#[must_use]
pub fn view(max_length: u32, value_length: u32) -> CounterView {
    let left = remaining(max_length, value_length);
    CounterView {
        text: format!("{left} caracteres restantes"),
        warning: left < WARNING_THRESHOLD,
    }
}
