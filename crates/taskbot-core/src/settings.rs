//! Pagination settings and validation.
//!
//! The list endpoint serves fixed-size pages. The server enforces a
//! default page size (applied when the caller sends none) and an upper
//! bound on any caller-requested size. The two are validated together at
//! startup: a default above the bound would silently truncate every
//! default-sized request, so it is a configuration error.

use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on any caller-requested page size.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Pagination settings for the task resource service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Settings {
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }

    /// Resolve a requested page index. `None` means the first page.
    ///
    /// Page indexes are 1-based; `0` is malformed input, not an empty
    /// page.
    pub fn resolve_page(&self, requested: Option<u32>) -> Result<u32, SettingsError> {
        match requested {
            None => Ok(1),
            Some(0) => Err(SettingsError::InvalidPage),
            Some(page) => Ok(page),
        }
    }

    /// Resolve a requested page size against the configured bound.
    ///
    /// An over-bound request is rejected rather than clamped, so the
    /// caller learns the limit instead of silently getting fewer rows.
    pub fn resolve_page_size(&self, requested: Option<u32>) -> Result<u32, SettingsError> {
        match requested {
            None => Ok(self.default_page_size),
            Some(0) => Err(SettingsError::InvalidPageSize),
            Some(size) if size > self.max_page_size => Err(SettingsError::PageSizeTooLarge {
                requested: size,
                max: self.max_page_size,
            }),
            Some(size) => Ok(size),
        }
    }
}

/// Pagination settings error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("default page size {default} exceeds the maximum page size {max}")]
    DefaultExceedsMax { default: u32, max: u32 },

    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("page size {requested} exceeds the maximum of {max}")]
    PageSizeTooLarge { requested: u32, max: u32 },

    #[error("page index is 1-based and must be at least 1")]
    InvalidPage,
}

/// Validate settings at startup. Fail fast instead of truncating every
/// default-sized request at runtime.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings.default_page_size == 0 || settings.max_page_size == 0 {
        return Err(SettingsError::InvalidPageSize);
    }
    if settings.default_page_size > settings.max_page_size {
        return Err(SettingsError::DefaultExceedsMax {
            default: settings.default_page_size,
            max: settings.max_page_size,
        });
    }
    Ok(())
}
