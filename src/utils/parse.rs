use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Falsy tokens recognized in loose boolean strings. Alternation order
/// matters: at each position the first alternative that matches wins.
static FALSY_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)(false)|(off)|(no)|(n)|(0)").expect("falsy token pattern"));

/// Parse a loosely-typed boolean.
///
/// Strings have the first case-insensitive occurrence of `false`, `off`,
/// `no`, `n`, or `0` removed, and the remainder coerces by non-emptiness:
/// the result is `false` only when the whole input was one of those
/// tokens. Only the matched token is removed, so `"abc0"` cleans to
/// `"abc"` and parses as `true`.
///
/// Non-strings follow standard truthiness: `null` is false, booleans are
/// themselves, numbers are false at zero, arrays and objects are true.
pub fn parse_bool(value: &Value) -> bool {
    match value {
        Value::String(s) => !FALSY_TOKEN.replace(s, "").is_empty(),
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}
