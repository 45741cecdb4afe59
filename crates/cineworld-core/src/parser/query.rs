//! Defensive element queries
//!
//! Every function here is total: an invalid selector, a missing element or a
//! missing attribute produces an empty string or an empty list, never an
//! error. Callers build records field by field on top of these, so one
//! missing field never affects its siblings.

use scraper::{ElementRef, Selector};

/// First element matching `selector` within `basis`.
pub fn find<'a>(basis: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    basis.select(&selector).next()
}

/// All elements matching `selector` within `basis`, in document order.
pub fn find_all<'a>(basis: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(selector) => basis.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Trimmed text content of the first element matching `selector`.
pub fn text(basis: ElementRef<'_>, selector: &str) -> String {
    find(basis, selector).map(element_text).unwrap_or_default()
}

/// Trimmed text content of every element matching `selector`.
pub fn texts(basis: ElementRef<'_>, selector: &str) -> Vec<String> {
    find_all(basis, selector).into_iter().map(element_text).collect()
}

/// Trimmed value of `name`, read from the first element matching `selector`,
/// or from `basis` itself when no selector is given.
pub fn attribute(basis: ElementRef<'_>, name: &str, selector: Option<&str>) -> String {
    let element = match selector {
        Some(selector) => find(basis, selector),
        None => Some(basis),
    };

    element
        .and_then(|el| el.value().attr(name))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text content of an element and its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
