use crate::PinCatalog;

/// Id prefix for the dropdown of a selector/preview pair.
pub const SELECT_ID_PREFIX: &str = "select_";
/// Id prefix for the preview image of a selector/preview pair.
pub const PREVIEW_ID_PREFIX: &str = "preview_";

/// Element id of the dropdown for pair `index`.
pub fn select_id(index: usize) -> String {
    format!("{SELECT_ID_PREFIX}{index}")
}

/// Element id of the preview image for pair `index`.
pub fn preview_id(index: usize) -> String {
    format!("{PREVIEW_ID_PREFIX}{index}")
}

/// Pair indices for a page with `count` discovered selectors.
///
/// Indices run 1..=count and come from the selector count alone; producers
/// emit them contiguously, so they are never parsed back out of ids.
pub fn pair_indices(count: usize) -> std::ops::RangeInclusive<usize> {
    1..=count
}

/// What to do with a preview image after reading its selector's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshAction {
    /// Key is cataloged: set the preview source to this URL.
    SetSource(String),
    /// Key is not in the catalog: leave the preview untouched.
    LeaveUnchanged,
}

/// Decide how to refresh a preview for the given selected key.
pub fn refresh_action(catalog: &PinCatalog, selected_key: &str) -> RefreshAction {
    match catalog.url_for(selected_key) {
        Some(url) => RefreshAction::SetSource(url.to_string()),
        None => RefreshAction::LeaveUnchanged,
    }
}
