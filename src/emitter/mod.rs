pub mod escape;
pub mod json;
pub mod php;

use crate::model::LocaleEntries;
use crate::utils::{ConversionError, Result};
use std::path::{Path, PathBuf};

pub const JSON_FILE_NAME: &str = "site.json";
pub const PHP_FILE_NAME: &str = "site.php";

pub async fn emit_locale(dir: &Path, entries: &LocaleEntries) -> Result<()> {
    tokio::try_join!(
        write_file(dir.join(JSON_FILE_NAME), json::render(entries)),
        write_file(dir.join(PHP_FILE_NAME), php::render(entries)),
    )?;
    Ok(())
}

async fn write_file(path: PathBuf, contents: String) -> Result<()> {
    tokio::fs::write(&path, contents)
        .await
        .map_err(|source| ConversionError::Write { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocaleEntries;

    fn entries() -> LocaleEntries {
        let mut entries = LocaleEntries::new();
        entries.insert("hello".to_string(), "Hello".to_string());
        entries
    }

    #[tokio::test]
    async fn writes_both_files_for_a_locale() {
        let dir = tempfile::tempdir().unwrap();

        emit_locale(dir.path(), &entries()).await.unwrap();

        let json = std::fs::read_to_string(dir.path().join(JSON_FILE_NAME)).unwrap();
        let php = std::fs::read_to_string(dir.path().join(PHP_FILE_NAME)).unwrap();
        assert_eq!(json, "{\n\t\"hello\": \"Hello\"\n}\n");
        assert_eq!(php, "<?php\n\nreturn [\n\t'hello' => 'Hello'\n];\n");
    }

    #[tokio::test]
    async fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-created");

        let err = emit_locale(&missing, &entries()).await.unwrap_err();
        match err {
            ConversionError::Write { path, .. } => {
                assert!(path.starts_with(&missing));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
