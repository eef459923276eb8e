// rewrites the escaped-quote marker produced by the tabular parser back
// into a literal quote; a no-op for values that never carried the marker
pub fn unescape_quotes(value: &str) -> String {
    value.replace("\\\"", "\"")
}

// minimal quote-style heuristic for array-source output: double quotes only
// when the string itself contains a single quote
pub fn php_quote(value: &str) -> String {
    if value.contains('\'') {
        format!("\"{value}\"")
    } else {
        format!("'{value}'")
    }
}

pub fn json_quote(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
