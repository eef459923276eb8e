use crate::model::TranslationModel;
use crate::utils::{ConversionError, Result};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchedRowPolicy {
    #[default]
    Skip,
}

pub fn parse(bytes: &[u8]) -> Result<TranslationModel> {
    parse_with_policy(bytes, MismatchedRowPolicy::default())
}

pub fn parse_with_policy(bytes: &[u8], policy: MismatchedRowPolicy) -> Result<TranslationModel> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ConversionError::Parse(format!("input is not valid UTF-8: {e}")))?;

    let mut lines = text.lines();
    let header = match lines.next() {
        Some(line) if !line.trim().is_empty() => split_record(line),
        _ => return Ok(TranslationModel::new()),
    };

    // header field 0 labels the key column; the locales start at field 1
    let locales: Vec<String> = header.iter().skip(1).map(|f| clean_field(f)).collect();

    let mut model = TranslationModel::new();
    for locale in &locales {
        model.add_locale(locale.as_str());
    }

    for (row, line) in lines.enumerate() {
        let fields = split_record(line);
        if fields.len() != header.len() {
            match policy {
                MismatchedRowPolicy::Skip => {
                    debug!(
                        row = row + 1,
                        expected = header.len(),
                        got = fields.len(),
                        "skipping row with mismatched field count"
                    );
                    continue;
                }
            }
        }

        let key = clean_field(&fields[0]);
        for (i, locale) in locales.iter().enumerate() {
            model.insert(locale, key.clone(), clean_field(&fields[i + 1]));
        }
    }

    Ok(model)
}

fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                field.push(ch);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

// strips one layer of field quoting and rewrites doubled quotes as the
// escaped-quote marker the renderers later unescape
fn clean_field(field: &str) -> String {
    let stripped = field.strip_prefix('"').unwrap_or(field);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.replace("\"\"", "\\\"")
}
