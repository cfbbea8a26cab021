use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// Width at or below which the site switches to mobile interaction
/// behavior (hamburger menu, tap-to-open dropdown).
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Height of the fixed header, subtracted when jumping to an anchor so
/// the section heading is not hidden behind it.
const HEADER_OFFSET: f64 = 80.0;

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    let from_window = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64());
    match from_window {
        Some(height) if height > 0.0 => height,
        _ => window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| f64::from(root.client_height()))
            .unwrap_or(0.0),
    }
}

pub fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Smooth-scrolls so the element sits just below the fixed header.
pub fn scroll_to_section(id: &str) {
    let Some(window) = window() else { return };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else { return };
    let top = element.get_bounding_client_rect().top() + scroll_offset() - HEADER_OFFSET;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
