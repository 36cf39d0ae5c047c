//! Input normalizer
//!
//! Parses a free-form test-case input string into a typed [`Literal`]. Three
//! shapes are supported:
//! - a JSON-style array of integers: `[1, 2, 3]`
//! - an array of single-character strings: `["h","e","l","l","o"]`
//! - an integer array paired with a scalar: `[-1,0,3,5,9,12], target = 9`
//!
//! A leading `name = ` binding (as problem statements write their examples)
//! is stripped before parsing. Trailing separators are tolerated. Everything
//! else is a parse failure carrying the offending input verbatim.

use serde_json::Value;

use crate::errors::EvalError;

/// Marker separating the array segment from the scalar segment.
const TARGET_MARKER: &str = "target =";

/// Normalized, typed form of a parsed test-case input.
///
/// Knows how to render its C++ declaration statement(s) and its canonical
/// bracketed serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `vector<int> nums = {…};`
    IntArray(Vec<i64>),
    /// `vector<char> s = {…};`
    CharArray(Vec<char>),
    /// `vector<int> nums = {…}; int target = …;`
    IntArrayWithTarget { nums: Vec<i64>, target: i64 },
}

impl Literal {
    /// Name of the declared array variable the harness operates on.
    pub fn var_name(&self) -> &'static str {
        match self {
            Literal::CharArray(_) => "s",
            _ => "nums",
        }
    }

    /// Whether the declared array holds characters (affects serialization).
    pub fn is_char_array(&self) -> bool {
        matches!(self, Literal::CharArray(_))
    }

    /// C++ declaration statements for this literal.
    pub fn declarations(&self) -> Vec<String> {
        match self {
            Literal::IntArray(nums) => vec![int_array_decl(nums)],
            Literal::CharArray(chars) => {
                if chars.is_empty() {
                    vec!["vector<char> s;".to_string()]
                } else {
                    let elems: Vec<String> =
                        chars.iter().map(|c| format!("'{}'", escape_cpp_char(*c))).collect();
                    vec![format!("vector<char> s = {{{}}};", elems.join(", "))]
                }
            }
            Literal::IntArrayWithTarget { nums, target } => {
                vec![int_array_decl(nums), format!("int target = {target};")]
            }
        }
    }

    /// Canonical bracketed serialization, matching what a synthesized program
    /// prints for an unmodified array. Round-trips through [`normalize`].
    pub fn canonical_form(&self) -> String {
        match self {
            Literal::IntArray(nums) => render_int_array(nums),
            Literal::CharArray(chars) => {
                let strings: Vec<String> = chars.iter().map(|c| c.to_string()).collect();
                // serde_json of Vec<String> cannot fail
                serde_json::to_string(&strings).unwrap_or_default()
            }
            Literal::IntArrayWithTarget { nums, target } => {
                format!("{}, target = {}", render_int_array(nums), target)
            }
        }
    }
}

fn render_int_array(nums: &[i64]) -> String {
    serde_json::to_string(nums).unwrap_or_default()
}

fn int_array_decl(nums: &[i64]) -> String {
    if nums.is_empty() {
        "vector<int> nums;".to_string()
    } else {
        let elems: Vec<String> = nums.iter().map(|n| n.to_string()).collect();
        format!("vector<int> nums = {{{}}};", elems.join(", "))
    }
}

fn escape_cpp_char(c: char) -> String {
    match c {
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        other => other.to_string(),
    }
}

/// Parse a raw test-case input string into a [`Literal`].
///
/// Failures carry the offending input and the underlying parser message
/// verbatim; they must reach the caller, never be swallowed.
pub fn normalize(input: &str) -> Result<Literal, EvalError> {
    let stripped = strip_leading_binding(input);

    if let Some((array_segment, scalar_segment)) = stripped.split_once(TARGET_MARKER) {
        let nums = parse_int_array(array_segment, input)?;
        let target = scalar_segment
            .trim()
            .parse::<i64>()
            .map_err(|e| EvalError::parse(input, format!("target must be an integer: {e}")))?;
        return Ok(Literal::IntArrayWithTarget { nums, target });
    }

    let cleaned = strip_trailing_separator(stripped.trim());
    let value: Value =
        serde_json::from_str(cleaned).map_err(|e| EvalError::parse(input, e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(EvalError::parse(input, "top-level value must be an array"));
    };

    if items.is_empty() {
        return Ok(Literal::IntArray(Vec::new()));
    }

    if items[0].is_string() {
        let mut chars = Vec::with_capacity(items.len());
        for item in &items {
            let Some(text) = item.as_str() else {
                return Err(EvalError::parse(input, "mixed element types in array"));
            };
            let mut iter = text.chars();
            match (iter.next(), iter.next()) {
                (Some(c), None) => chars.push(c),
                _ => {
                    return Err(EvalError::parse(
                        input,
                        format!("element {text:?} is not a single character"),
                    ));
                }
            }
        }
        return Ok(Literal::CharArray(chars));
    }

    let mut nums = Vec::with_capacity(items.len());
    for item in &items {
        let Some(n) = item.as_i64() else {
            return Err(EvalError::parse(
                input,
                format!("element {item} is not an integer"),
            ));
        };
        nums.push(n);
    }
    Ok(Literal::IntArray(nums))
}

/// Parse the array segment of the `array, target = n` form.
fn parse_int_array(segment: &str, original: &str) -> Result<Vec<i64>, EvalError> {
    let cleaned = strip_trailing_separator(segment.trim());
    let value: Value =
        serde_json::from_str(cleaned).map_err(|e| EvalError::parse(original, e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(EvalError::parse(original, "first segment must be an array"));
    };
    let mut nums = Vec::with_capacity(items.len());
    for item in &items {
        let Some(n) = item.as_i64() else {
            return Err(EvalError::parse(
                original,
                format!("element {item} is not an integer"),
            ));
        };
        nums.push(n);
    }
    Ok(nums)
}

/// Strip one trailing comma (and surrounding whitespace) from a segment.
fn strip_trailing_separator(s: &str) -> &str {
    let trimmed = s.trim_end();
    match trimmed.strip_suffix(',') {
        Some(rest) => rest.trim_end(),
        None => trimmed,
    }
}

/// Strip a leading `name = ` binding, as written in problem examples
/// (`nums = [1, 2, 3]`). Only applies when the prefix is a purely alphabetic
/// identifier; anything else is left untouched for the parser to judge.
fn strip_leading_binding(input: &str) -> &str {
    let trimmed = input.trim_start();
    let ident_len = trimmed.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if ident_len == 0 {
        return input;
    }
    let rest = trimmed[ident_len..].trim_start();
    match rest.strip_prefix('=') {
        Some(after) => after.trim_start(),
        None => input,
    }
}
