/// The reserved input that ends the interactive loop. Case-sensitive.
pub const QUIT_SENTINEL: &str = "e";

/// What one line of user input at the amount prompt means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// The quit sentinel was entered.
    Quit,
    /// A finite CAD amount to convert.
    Amount(f64),
    /// Anything else.
    Invalid,
}

/// Classify one raw input line. Surrounding whitespace is ignored; the
/// sentinel match is exact, so `"E"` is just an invalid amount. Non-finite
/// parses (`nan`, `inf`) are invalid because the converter requires a finite
/// amount.
pub fn classify(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed == QUIT_SENTINEL {
        return Input::Quit;
    }

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Input::Amount(amount),
        _ => Input::Invalid,
    }
}
