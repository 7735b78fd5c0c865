//! Direct DOM access for the few things the view layer does not own:
//! classes on `<body>` and keyboard focus.

use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

pub fn document() -> Result<Document, String> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document is not available".to_string())
}

/// Adds or removes `class` on the document body.
pub fn set_body_class(class: &str, enabled: bool) -> Result<(), String> {
    let body = document()?.body().ok_or("document has no body")?;
    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    result.map_err(|e| format!("Failed to update body class '{}': {:?}", class, e))
}

/// Moves keyboard focus to the element with the given id.
pub fn focus_element(id: &str) -> Result<(), String> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| format!("Element #{} not found", id))?;
    let element = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("Element #{} cannot take focus", id))?;
    element
        .focus()
        .map_err(|e| format!("Focus on #{} failed: {:?}", id, e))
}
