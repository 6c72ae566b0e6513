use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response body when a request is rejected.
///
/// `errors` carries one reason per offending field; the optional id lists
/// let callers see exactly which components were missing or duplicated.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_components: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_components: Option<Vec<i64>>,
}

impl ErrorBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
            missing_components: None,
            duplicate_components: None,
        }
    }

    pub fn with_field(
        message: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), reason.into());

        Self::with_fields(message, fields)
    }

    pub fn with_fields(message: impl Into<String>, fields: BTreeMap<String, String>) -> Self {
        Self {
            message: message.into(),
            errors: Some(fields),
            missing_components: None,
            duplicate_components: None,
        }
    }

    pub fn missing_components(mut self, ids: Vec<i64>) -> Self {
        self.missing_components = Some(ids);
        self
    }

    pub fn duplicate_components(mut self, ids: Vec<i64>) -> Self {
        self.duplicate_components = Some(ids);
        self
    }
}

/// Plain confirmation body for operations with nothing else to return.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PageMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub last_page: u64,
    pub total: u64,
}

/// Offset-paged response: `{data: [...], meta: {...}}`.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Slices an already-filtered, already-ordered row set down to one page.
    pub fn from_rows(rows: Vec<T>, page: u64, per_page: u64) -> Self {
        let total = rows.len() as u64;
        let last_page = total.div_ceil(per_page).max(1);
        let start = page.saturating_sub(1).saturating_mul(per_page);

        let data: Vec<T> = rows
            .into_iter()
            .skip(start as usize)
            .take(per_page as usize)
            .collect();

        Self {
            data,
            meta: PageMeta {
                current_page: page,
                per_page,
                last_page,
                total,
            },
        }
    }
}

/// Normalizes caller paging input: page >= 1, page size clamped to
/// `[1, max]` with a route-specific default.
pub fn clamp_paging(
    page: Option<u64>,
    per_page: Option<u64>,
    default_per_page: u64,
    max_per_page: u64,
) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let per_page = per_page.unwrap_or(default_per_page).clamp(1, max_per_page);

    (page, per_page)
}
