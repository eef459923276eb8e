pub mod structured;
pub mod tabular;

pub use tabular::MismatchedRowPolicy;

use crate::model::TranslationModel;
use crate::utils::{ConversionError, Result};
use std::path::Path;

pub const MEDIA_TYPE_CSV: &str = "text/csv";
pub const MEDIA_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Csv,
    Json,
}

impl MediaType {
    pub fn from_declared(declared: &str) -> Result<Self> {
        match declared {
            MEDIA_TYPE_CSV => Ok(MediaType::Csv),
            MEDIA_TYPE_JSON => Ok(MediaType::Json),
            other => Err(ConversionError::UnsupportedType(other.to_string())),
        }
    }

    pub fn from_extension(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        match extension {
            "csv" => Ok(MediaType::Csv),
            "json" => Ok(MediaType::Json),
            _ => Err(ConversionError::UnsupportedType(format!(
                "cannot infer media type of {}",
                path.display()
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Csv => MEDIA_TYPE_CSV,
            MediaType::Json => MEDIA_TYPE_JSON,
        }
    }
}

pub fn parse(media_type: MediaType, bytes: &[u8]) -> Result<TranslationModel> {
    match media_type {
        MediaType::Csv => tabular::parse(bytes),
        MediaType::Json => structured::parse(bytes),
    }
}
