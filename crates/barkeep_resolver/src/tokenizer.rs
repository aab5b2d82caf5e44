//! Input tokenization.
//!
//! Splits a raw input line into words, treating double-quoted regions as a
//! single token so multi-word item names survive intact.

/// Tokenizes player input, honoring double-quote grouping.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Splits `input` into tokens.
    ///
    /// - Outside quotes, whitespace ends the current token (empty tokens are dropped)
    /// - A `"` toggles quoting; the quote characters themselves are removed
    /// - A closing quote always emits the token, even when it is empty
    /// - An unbalanced quote is tolerated; whatever was accumulated is emitted at the end
    ///
    /// Text immediately before an opening quote is not split off, so
    /// `ab"c d"` yields the single token `abc d`.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in input.chars() {
            match ch {
                '"' => {
                    if in_quotes {
                        tokens.push(std::mem::take(&mut current));
                    }
                    in_quotes = !in_quotes;
                }
                c if c.is_whitespace() && !in_quotes => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                c => current.push(c),
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }

    /// Joins tokens back into a line that tokenizes to the same tokens.
    ///
    /// Tokens that are empty or contain whitespace are wrapped in quotes.
    #[must_use]
    pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
        tokens
            .iter()
            .map(|t| {
                let t = t.as_ref();
                if t.is_empty() || t.chars().any(char::is_whitespace) {
                    format!("\"{t}\"")
                } else {
                    t.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Splits a raw input line into tokens. See [`InputTokenizer::tokenize`].
#[must_use]
pub fn tokenize_with_quotes(raw_input: &str) -> Vec<String> {
    InputTokenizer::tokenize(raw_input)
}

/// Rejoins tokens, re-quoting where needed. See [`InputTokenizer::join`].
#[must_use]
pub fn join_with_quotes<S: AsRef<str>>(tokens: &[S]) -> String {
    InputTokenizer::join(tokens)
}
