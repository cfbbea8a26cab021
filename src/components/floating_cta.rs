use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::utils::debounce::Debounce;
use crate::utils::scroll::scroll_offset;

/// The cluster only shows once the visitor has scrolled past this
/// depth. Recomputed on every qualifying scroll rather than
/// edge-triggered, matching the header flag's deliberate asymmetry.
pub fn cta_visible(offset: f64) -> bool {
    offset > 300.0
}

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub config: SiteConfig,
}

/// Fixed-position WhatsApp and phone buttons built from the site
/// configuration. If the page already carries a cluster this instance
/// backs off, so double mounting cannot duplicate it.
#[function_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    let root = use_node_ref();
    let duplicate = use_state(|| false);
    let visible = use_state(|| false);

    {
        let root = root.clone();
        let duplicate = duplicate.clone();
        use_effect_with_deps(
            move |_| {
                if let (Some(own), Some(document)) = (
                    root.cast::<web_sys::Element>(),
                    web_sys::window().and_then(|w| w.document()),
                ) {
                    if let Ok(nodes) = document.query_selector_all(".floating-cta") {
                        let own: web_sys::Node = own.into();
                        let earlier_cluster_exists = nodes.length() > 1
                            && nodes.get(0).map(|first| first != own).unwrap_or(false);
                        if earlier_cluster_exists {
                            duplicate.set(true);
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let debounced = Debounce::new(100, move || visible.set(cta_visible(scroll_offset())));
                let listener = Closure::<dyn FnMut()>::new(move || debounced.call());
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
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
    }

    if *duplicate {
        return html! {};
    }

    html! {
        <div ref={root} class={classes!("floating-cta", (*visible).then(|| "visible"))}>
            <a
                href={props.config.whatsapp.chat_url()}
                class="cta-button whatsapp-btn"
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Contact us on WhatsApp"
                title="WhatsApp"
            >
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z" fill="currentColor"/>
                </svg>
            </a>
            <a
                href={props.config.phone.href.clone()}
                class="cta-button call-btn"
                aria-label="Call us"
                title={format!("Call: {}", props.config.phone.display)}
            >
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M20.01 15.38c-1.23 0-2.42-.2-3.53-.56a.977.977 0 00-1.01.24l-1.57 1.97c-2.83-1.35-5.48-3.9-6.89-6.83l1.95-1.66c.27-.28.35-.67.24-1.02-.37-1.11-.56-2.3-.56-3.53 0-.54-.45-.99-.99-.99H4.19C3.65 3 3 3.24 3 3.99 3 13.28 10.73 21 20.01 21c.71 0 .99-.63.99-1.18v-3.45c0-.54-.45-.99-.99-.99z" fill="currentColor"/>
                </svg>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_follows_the_scroll_depth() {
        // hidden at the top, visible past 300, hidden again on the way back up
        let offsets = [0.0, 310.0, 280.0];
        let states: Vec<bool> = offsets.iter().map(|o| cta_visible(*o)).collect();
        assert_eq!(states, vec![false, true, false]);
    }

    #[test]
    fn threshold_itself_stays_hidden() {
        assert!(!cta_visible(300.0));
        assert!(cta_visible(300.5));
    }
}
