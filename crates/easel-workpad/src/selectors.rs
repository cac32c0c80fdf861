//! Pure selectors over [`WorkpadState`].
//!
//! Every selector takes the state snapshot explicitly. Unknown page
//! ids resolve to empty defaults rather than errors so derivations
//! stay total.

use crate::state::{Page, PageElement, WorkpadState};
use serde_json::Value;

/// Whether the app is in fullscreen presentation mode
#[inline]
#[must_use]
pub fn fullscreen(state: &WorkpadState) -> bool {
    state.fullscreen
}

/// Whether the workpad accepts edits
#[inline]
#[must_use]
pub fn is_writeable(state: &WorkpadState) -> bool {
    state.writeable
}

/// Whether the current user holds write permission
#[inline]
#[must_use]
pub fn can_user_write(state: &WorkpadState) -> bool {
    state.can_user_write
}

/// The page with the given id, if any
#[must_use]
pub fn page_by_id<'a>(state: &'a WorkpadState, page_id: &str) -> Option<&'a Page> {
    state.pages.iter().find(|page| page.id == page_id)
}

/// Elements of the given page; empty for unknown pages
#[must_use]
pub fn nodes<'a>(state: &'a WorkpadState, page_id: &str) -> &'a [PageElement] {
    page_by_id(state, page_id).map_or(&[], |page| page.elements.as_slice())
}

/// Style document of the given page; null for unknown pages
#[must_use]
pub fn page_style(state: &WorkpadState, page_id: &str) -> Value {
    page_by_id(state, page_id).map_or(Value::Null, |page| page.style.clone())
}
