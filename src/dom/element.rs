// ============================================================================
// ELEMENT HELPERS - Thin wrappers over web-sys lookups and mutations
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn get_html_element(id: &str) -> Option<HtmlElement> {
    get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn get_input(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Current value of an input, trimmed; empty when the input is missing
pub fn input_value(id: &str) -> String {
    get_input(id)
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

pub fn clear_input(id: &str) {
    if let Some(input) = get_input(id) {
        input.set_value("");
    }
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .create_element(tag)
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// `style.display` of the element with `id`; silently skipped when absent
pub fn set_display(id: &str, value: &str) {
    if let Some(el) = get_html_element(id) {
        let _ = el.style().set_property("display", value);
    }
}

/// True when the event target sits inside an element matching `selector`
pub fn target_within(event: &web_sys::Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
