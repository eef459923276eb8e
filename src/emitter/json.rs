use super::escape::{json_quote, unescape_quotes};
use crate::model::LocaleEntries;

pub fn render(entries: &LocaleEntries) -> String {
    let mut out = String::from("{\n");
    let total = entries.len();

    for (position, (key, value)) in entries.iter().enumerate() {
        let key = unescape_quotes(key);
        let value = unescape_quotes(value);

        out.push('\t');
        out.push_str(&json_quote(&key));
        out.push_str(": ");
        out.push_str(&json_quote(&value));
        out.push_str(if position + 1 < total { ",\n" } else { "\n" });
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> LocaleEntries {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn renders_entries_in_insertion_order_without_trailing_comma() {
        let rendered = render(&entries(&[("a", "1"), ("b", "2"), ("c", "3")]));
        assert_eq!(
            rendered,
            "{\n\t\"a\": \"1\",\n\t\"b\": \"2\",\n\t\"c\": \"3\"\n}\n"
        );
    }

    #[test]
    fn single_entry_has_no_separator() {
        let rendered = render(&entries(&[("only", "one")]));
        assert_eq!(rendered, "{\n\t\"only\": \"one\"\n}\n");
    }

    #[test]
    fn empty_entries_render_an_empty_object() {
        let rendered = render(&LocaleEntries::new());
        assert_eq!(rendered, "{\n}\n");
    }

    #[test]
    fn quote_markers_round_trip_into_json_escapes() {
        let rendered = render(&entries(&[("k", "val,\\\"q\\\"")]));
        assert_eq!(rendered, "{\n\t\"k\": \"val,\\\"q\\\"\"\n}\n");
    }

    #[test]
    fn output_is_valid_json() {
        let rendered = render(&entries(&[("greeting", "say \\\"hi\\\""), ("tab", "a\tb")]));
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["greeting"], "say \"hi\"");
        assert_eq!(parsed["tab"], "a\tb");
    }
}
