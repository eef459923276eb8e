use crate::model::TranslationModel;
use crate::utils::Result;

pub fn parse(bytes: &[u8]) -> Result<TranslationModel> {
    let model: TranslationModel = serde_json::from_slice(bytes)?;
    Ok(model)
}
