/// Split a raw input line into its non-empty tokens.
///
/// Any run of whitespace separates two tokens, so tokens never carry
/// leading or trailing blanks and a blank line yields no tokens at all.
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

/// Join a slice of tokens back together with single spaces.
pub fn join(tokens: &[String]) -> String {
    tokens.join(" ")
}
