//! Query parameters and response metadata for `GET /users`.
//!
//! A page is addressed either by `page` (1-based) or by a raw `offset`;
//! `page` wins when both are present. The page size is `limit`, also accepted
//! as `recordPerPage`. Every derived value saturates instead of overflowing,
//! so any `i64` a client sends yields a well-formed (possibly empty) page.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// `?limit=` and friends arrive as empty strings; read them as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page size, clamped to 1..=100 (default 10). Alias: `recordPerPage`.
    #[serde(default, alias = "recordPerPage", deserialize_with = "blank_as_none")]
    pub limit: Option<i64>,
    /// Rows to skip; ignored when `page` is set
    #[serde(default, deserialize_with = "blank_as_none")]
    pub offset: Option<i64>,
    /// 1-based page number
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<i64>,
}

impl PaginationParams {
    #[must_use]
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    #[must_use]
    pub fn page(&self) -> Option<i64> {
        self.page.map(|page| page.max(1))
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        match self.page() {
            Some(page) => (page - 1).saturating_mul(self.limit()),
            None => self.offset.unwrap_or(0).max(0),
        }
    }
}

/// Echo of the applied window plus the total row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// More rows exist past this window
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn from_params(params: &PaginationParams, total: i64) -> Self {
        let limit = params.limit();
        let offset = params.offset();
        Self {
            total,
            limit,
            offset: Some(offset),
            page: params.page(),
            has_more: offset.saturating_add(limit) < total,
        }
    }
}
