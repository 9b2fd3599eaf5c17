pub mod agency_dto;
pub mod candidate_dto;
pub mod employer_dto;

use serde::{Deserialize, Serialize};

/// Body of DELETE responses: whether a row was actually removed.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// Optional id subset for bulk exports; absent or empty means "everything".
#[derive(Debug, Default, Deserialize)]
pub struct BulkExportRequest {
    pub ids: Option<Vec<uuid::Uuid>>,
}

// Custom deserializer to trim strings and convert empty strings to None
pub(crate) fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
