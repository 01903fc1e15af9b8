//! Verb/noun splitting for player input.

/// Splits input into a verb and the remaining words joined as the noun.
/// Empty input yields two empty strings.
pub fn parse_input(input: &str) -> (&str, String) {
    let mut parts = input.split_whitespace();
    let verb = parts.next().unwrap_or("");
    let noun = parts.collect::<Vec<_>>().join(" ");
    (verb, noun)
}
