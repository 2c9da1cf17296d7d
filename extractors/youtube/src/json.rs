use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum JsonCutError {
    #[error("can't cut unsupported JSON (need to begin with [ or {{), but got: {}", describe(.found))]
    UnsupportedInputKind { found: Option<char> },
    #[error("can't cut unsupported JSON (no matching closing bracket found)")]
    UnbalancedLiteral,
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => c.to_string(),
        None => "end of input".to_string(),
    }
}

/// Cuts the JSON array or object at the start of `mixed`, leaving out
/// whatever script follows it.
///
/// Brackets inside string literals are not counted. A quote is treated as
/// escaped when the character right before it is a backslash.
pub fn cut_after_json(mixed: &str) -> Result<&str, JsonCutError> {
    let (open, close) = match mixed.chars().next() {
        Some('[') => ('[', ']'),
        Some('{') => ('{', '}'),
        found => return Err(JsonCutError::UnsupportedInputKind { found }),
    };

    let mut in_string = false;
    let mut depth = 0usize;
    let mut previous = None;

    for (i, c) in mixed.char_indices() {
        let escaped = previous == Some('\\');
        previous = Some(c);

        if c == '"' && !escaped {
            in_string = !in_string;
            continue;
        }
        if in_string {
            continue;
        }

        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Ok(&mixed[..i + c.len_utf8()]);
            }
        }
    }

    Err(JsonCutError::UnbalancedLiteral)
}
