use std::rc::Rc;

use pinsync_common::{pairing, PinCatalog, RefreshAction, CATALOG_ELEMENT_ID};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, HtmlSelectElement};

use crate::listener::ElementEventListener;

/// An activated preview synchronizer: the parsed catalog plus one `change`
/// listener per discovered selector. Dropping it detaches the listeners.
pub struct PreviewSync {
    catalog: Rc<PinCatalog>,
    listeners: Vec<ElementEventListener>,
}

impl PreviewSync {
    /// Locate and parse the embedded catalog, refresh every discovered pair
    /// once, and wire a `change` listener per selector.
    ///
    /// Returns `None` when the page carries no catalog element (the feature
    /// is optional) or the blob does not parse; either way the page is left
    /// untouched.
    pub fn initialize(document: &Document) -> Option<Self> {
        let data = document.get_element_by_id(CATALOG_ELEMENT_ID)?;
        let text = data.text_content()?;
        let catalog = match PinCatalog::from_json(&text) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!("pin catalog did not parse: {err}");
                return None;
            }
        };
        let catalog = Rc::new(catalog);

        let pair_count = discover_pair_count(document);
        let mut listeners = Vec::with_capacity(pair_count);
        for index in pairing::pair_indices(pair_count) {
            refresh(document, &catalog, index);

            if let Some(select) = document.get_element_by_id(&pairing::select_id(index)) {
                let document = document.clone();
                let catalog = Rc::clone(&catalog);
                listeners.push(ElementEventListener::new(
                    select.into(),
                    "change",
                    move |_| refresh(&document, &catalog, index),
                ));
            }
        }

        debug!(pairs = pair_count, "pin preview sync active");
        Some(Self { catalog, listeners })
    }

    pub fn catalog(&self) -> &PinCatalog {
        &self.catalog
    }

    /// Number of selectors wired with a change listener.
    pub fn pair_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Number of selector/preview pairs on the page, by counting the selectors
/// that follow the id convention. Pair indices are 1..=count.
fn discover_pair_count(document: &Document) -> usize {
    let selector = format!("select[id^=\"{}\"]", pairing::SELECT_ID_PREFIX);
    document
        .query_selector_all(&selector)
        .map(|list| list.length() as usize)
        .unwrap_or(0)
}

/// Sync preview `index` with its selector's current value.
///
/// A missing selector or preview element and a key absent from the catalog
/// all leave the page untouched; nothing is surfaced to the user.
pub fn refresh(document: &Document, catalog: &PinCatalog, index: usize) {
    let Some(select) = document.get_element_by_id(&pairing::select_id(index)) else {
        return;
    };
    let Ok(select) = select.dyn_into::<HtmlSelectElement>() else {
        return;
    };

    match pairing::refresh_action(catalog, &select.value()) {
        RefreshAction::SetSource(url) => {
            let Some(preview) = document.get_element_by_id(&pairing::preview_id(index)) else {
                return;
            };
            if let Some(img) = preview.dyn_ref::<HtmlImageElement>() {
                img.set_src(&url);
            }
        }
        RefreshAction::LeaveUnchanged => {}
    }
}
