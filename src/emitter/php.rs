use super::escape::{php_quote, unescape_quotes};
use crate::model::LocaleEntries;

pub fn render(entries: &LocaleEntries) -> String {
    let mut out = String::from("<?php\n\nreturn [\n");
    let total = entries.len();

    for (position, (key, value)) in entries.iter().enumerate() {
        let key = unescape_quotes(key);
        let value = unescape_quotes(value);

        out.push('\t');
        out.push_str(&php_quote(&key));
        out.push_str(" => ");
        out.push_str(&php_quote(&value));
        out.push_str(if position + 1 < total { ",\n" } else { "\n" });
    }

    out.push_str("];\n");
    out
}
