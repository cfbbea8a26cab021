use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::utils::debounce::Debounce;
use crate::utils::scroll::viewport_height;
use crate::Route;

/// True when any part of the box overlaps the visible vertical range.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top <= viewport_height && bottom >= 0.0
}

fn reveal_visible_elements() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(nodes) = document.query_selector_all(".animate-on-scroll") {
            let viewport = viewport_height();
            for index in 0..nodes.length() {
                if let Some(element) = nodes
                    .get(index)
                    .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                {
                    let rect = element.get_bounding_client_rect();
                    if intersects_viewport(rect.top(), rect.bottom(), viewport) {
                        // The class sticks; elements never animate back out.
                        let _ = element.class_list().add_1("animated");
                    }
                }
            }
        }
    }
}

/// One-shot reveal of `.animate-on-scroll` elements as they enter the
/// viewport. Renders nothing itself; it only watches scrolling and
/// route changes.
#[function_component(ScrollReveal)]
pub fn scroll_reveal() -> Html {
    let route = use_route::<Route>();

    // Freshly routed pages render new sections, so re-check right away
    // and once more after the page has settled.
    use_effect_with_deps(
        move |_| {
            reveal_visible_elements();
            Timeout::new(100, reveal_visible_elements).forget();
            || ()
        },
        route,
    );

    use_effect_with_deps(
        move |_| {
            let debounced = Debounce::new(50, reveal_visible_elements);
            let listener = Closure::<dyn FnMut()>::new(move || debounced.call());
            if let Some(window) = web_sys::window() {
                let _ =
                    window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        },
        (),
    );

    html! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_inside_the_viewport_intersects() {
        assert!(intersects_viewport(100.0, 300.0, 800.0));
    }

    #[test]
    fn element_straddling_either_edge_intersects() {
        // Bottom edge peeking in from below.
        assert!(intersects_viewport(790.0, 900.0, 800.0));
        // Top edge still visible while scrolling out.
        assert!(intersects_viewport(-150.0, 10.0, 800.0));
    }

    #[test]
    fn element_fully_outside_does_not_intersect() {
        assert!(!intersects_viewport(810.0, 950.0, 800.0));
        assert!(!intersects_viewport(-400.0, -20.0, 800.0));
    }
}
