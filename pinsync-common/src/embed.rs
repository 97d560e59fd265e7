//! Producer-side helpers for the markup the synchronizer consumes.
//!
//! The assignment page is server-rendered: a JSON catalog blob plus one
//! selector/preview row per location. Generating both sides from the same
//! constants keeps the naming contract in one place.

use std::fmt::Write;

use crate::{pairing, PinCatalog};

/// Id of the page element carrying the JSON catalog blob.
pub const CATALOG_ELEMENT_ID: &str = "pin-data";

/// Render the embedded catalog as a JSON `<script>` element.
pub fn catalog_script_tag(catalog: &PinCatalog) -> Result<String, serde_json::Error> {
    // "</" would end the script element early if a URL contained it;
    // JSON accepts the escaped solidus.
    let json = catalog.to_json()?.replace("</", "<\\/");
    Ok(format!(
        r#"<script type="application/json" id="{CATALOG_ELEMENT_ID}">{json}</script>"#
    ))
}

/// Render one selector/preview row for pair `index`.
///
/// The dropdown gets an option per catalog key (sorted for stable output),
/// and the preview image starts on the selected key's URL when that key
/// resolves, so the markup default already matches the selection.
pub fn assignment_row(index: usize, catalog: &PinCatalog, selected: Option<&str>) -> String {
    let mut keys: Vec<&str> = catalog.keys().collect();
    keys.sort_unstable();

    let mut options = String::new();
    for key in keys {
        let escaped = escape_html(key);
        let marker = if selected == Some(key) { " selected" } else { "" };
        let _ = write!(options, r#"<option value="{escaped}"{marker}>{escaped}</option>"#);
    }

    let src = selected.and_then(|key| catalog.url_for(key)).unwrap_or("");
    format!(
        r#"<select id="{}">{options}</select><img id="{}" src="{}" alt="pin preview">"#,
        pairing::select_id(index),
        pairing::preview_id(index),
        escape_html(src),
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PinStyle;

    fn sample_catalog() -> PinCatalog {
        [
            ("red".to_string(), PinStyle::new("/img/red.png")),
            ("blue".to_string(), PinStyle::new("/img/blue.png")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn script_tag_round_trips_through_the_parser() {
        let catalog = sample_catalog();
        let tag = catalog_script_tag(&catalog).unwrap();

        let json = tag
            .strip_prefix(r#"<script type="application/json" id="pin-data">"#)
            .and_then(|rest| rest.strip_suffix("</script>"))
            .unwrap();
        assert_eq!(PinCatalog::from_json(json).unwrap(), catalog);
    }

    #[test]
    fn script_tag_cannot_be_closed_from_inside() {
        let mut catalog = PinCatalog::default();
        catalog.insert("odd", PinStyle::new("/img/</script>.png"));

        let tag = catalog_script_tag(&catalog).unwrap();
        assert_eq!(tag.matches("</script>").count(), 1);
    }

    #[test]
    fn row_follows_the_naming_contract() {
        let row = assignment_row(3, &sample_catalog(), Some("red"));
        assert!(row.contains(r#"<select id="select_3">"#));
        assert!(row.contains(r#"<img id="preview_3" src="/img/red.png""#));
        assert!(row.contains(r#"<option value="red" selected>red</option>"#));
        assert!(row.contains(r#"<option value="blue">blue</option>"#));
    }

    #[test]
    fn unresolved_selection_leaves_src_empty() {
        let row = assignment_row(1, &sample_catalog(), Some("green"));
        assert!(row.contains(r#"<img id="preview_1" src="""#));

        let row = assignment_row(1, &sample_catalog(), None);
        assert!(row.contains(r#"<img id="preview_1" src="""#));
        assert!(!row.contains("selected"));
    }

    #[test]
    fn keys_are_escaped_in_options() {
        let mut catalog = PinCatalog::default();
        catalog.insert("a\"b", PinStyle::new("/img/a.png"));

        let row = assignment_row(1, &catalog, None);
        assert!(row.contains(r#"<option value="a&quot;b">a&quot;b</option>"#));
    }
}
