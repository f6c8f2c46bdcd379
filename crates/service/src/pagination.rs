//! Offset pagination over an already filtered and sorted sequence.
//!
//! Page tokens have the form `page_<offset>`. A token is positional: it is
//! only meaningful against a result produced by the same filter and sort
//! parameters that minted it.

use std::ops::Range;

use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: i32 = 100;

const TOKEN_PREFIX: &str = "page_";

/// Page size actually used for a request; `0` selects the default.
///
/// Callers validate the bound first, negative values never reach here.
pub fn effective_page_size(requested: i32) -> usize {
    if requested <= 0 { DEFAULT_PAGE_SIZE } else { requested as usize }
}

pub fn encode_page_token(offset: usize) -> String {
    format!("{TOKEN_PREFIX}{offset}")
}

/// Decode a page token into an offset into a sequence of `total` items.
///
/// The empty token is offset 0. Anything else must be `page_<n>` with `n < total`,
/// where `<n>` is plain ASCII digits. A leading `+` or `-` is rejected even though
/// integer parsing would accept `+`, so every offset has exactly one token spelling.
pub fn decode_page_token(token: &str, total: usize) -> Result<usize, ServiceError> {
    if token.is_empty() {
        return Ok(0);
    }
    let digits = token
        .strip_prefix(TOKEN_PREFIX)
        .ok_or_else(|| ServiceError::invalid("invalid page token format"))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ServiceError::invalid(format!("invalid page token: {token:?} is not page_<offset>")));
    }
    let offset: usize = digits
        .parse()
        .map_err(|e| ServiceError::invalid(format!("invalid page token: {e}")))?;
    if offset >= total {
        return Err(ServiceError::invalid("page token out of range"));
    }
    Ok(offset)
}

/// One window of a sequence plus the token for the following window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub range: Range<usize>,
    /// Empty when the window reaches the end.
    pub next_page_token: String,
    pub total_count: usize,
}

/// Window `[offset, offset + page_size)` clamped to `total`.
pub fn page_window(total: usize, offset: usize, page_size: usize) -> PageWindow {
    if offset >= total {
        return PageWindow { range: total..total, next_page_token: String::new(), total_count: total };
    }
    let end = offset.saturating_add(page_size).min(total);
    let next_page_token = if end < total { encode_page_token(end) } else { String::new() };
    PageWindow { range: offset..end, next_page_token, total_count: total }
}
