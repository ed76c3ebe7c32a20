//! List window parameters
//!
//! The list endpoints take `set_offset` / `set_limit` query parameters with
//! small hard ceilings. Values beyond the ceiling are rejected, not clamped.

use serde::Deserialize;

use super::ValidationError;

/// Maximum accepted offset
const MAX_OFFSET: u32 = 4;

/// Maximum accepted page size
const MAX_LIMIT: u32 = 4;

/// Default page size when `set_limit` is absent
const DEFAULT_LIMIT: u32 = 2;

/// Validated list window
#[derive(Debug, Clone, Copy)]
pub struct Page {
    offset: u32,
    limit: u32,
}

impl Page {
    /// Create a page, rejecting out-of-range values.
    pub fn new(offset: u32, limit: u32) -> Result<Self, ValidationError> {
        if offset > MAX_OFFSET {
            return Err(ValidationError::OutOfRange {
                field: "set_offset",
                max: MAX_OFFSET,
            });
        }

        if limit > MAX_LIMIT {
            return Err(ValidationError::OutOfRange {
                field: "set_limit",
                max: MAX_LIMIT,
            });
        }

        Ok(Self { offset, limit })
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset as i64
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit as i64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Raw query parameters for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub set_offset: Option<u32>,
    pub set_limit: Option<u32>,
}

impl TryFrom<PageParams> for Page {
    type Error = ValidationError;

    fn try_from(params: PageParams) -> Result<Self, Self::Error> {
        Self::new(
            params.set_offset.unwrap_or(0),
            params.set_limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
