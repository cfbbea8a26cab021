use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use crate::pages::services::SERVICES;
use crate::utils::debounce::Debounce;
use crate::utils::scroll::{scroll_offset, viewport_width, MOBILE_BREAKPOINT};
use crate::Route;

/// Slug shown as active when the path has no trailing segment.
pub const HOME_SLUG: &str = "home";

/// Mobile menu and dropdown flags. Closing the menu always drags the
/// dropdown shut with it.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct MenuState {
    pub open: bool,
    pub dropdown_open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        let open = !self.open;
        Self {
            open,
            dropdown_open: self.dropdown_open && open,
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }

    pub fn dropdown_toggled(self) -> Self {
        Self {
            dropdown_open: !self.dropdown_open,
            ..self
        }
    }
}

/// Header style flag, edge-triggered: yields a new value only when the
/// 50px threshold crossing actually flips it.
pub fn scrolled_after(prev: bool, offset: f64) -> Option<bool> {
    let next = offset > 50.0;
    (next != prev).then_some(next)
}

/// Last non-empty path segment, used to mark the matching nav link.
pub fn page_slug(pathname: &str) -> &str {
    match pathname.trim_end_matches('/').rsplit('/').next() {
        None | Some("") => HOME_SLUG,
        Some(segment) => segment,
    }
}

fn set_body_class(name: &str, on: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = if on {
            body.class_list().add_1(name)
        } else {
            body.class_list().remove_1(name)
        };
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu = use_state(MenuState::default);
    let is_scrolled = use_state(|| false);
    // Authoritative copy readable from long-lived listeners; the
    // use_state handle above only drives rendering.
    let model = use_mut_ref(MenuState::default);

    let apply = {
        let menu = menu.clone();
        let model = model.clone();
        Rc::new(move |next: MenuState| {
            if *model.borrow() != next {
                *model.borrow_mut() = next;
                menu.set(next);
            }
        })
    };

    // Mirror the open flag onto the body so styling can lock scrolling.
    {
        let open = menu.open;
        use_effect_with_deps(
            move |open| {
                set_body_class("menu-open", *open);
                || ()
            },
            open,
        );
    }

    // Close when a click lands outside the nav while the menu is open.
    {
        let apply = apply.clone();
        let model = model.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                    if !model.borrow().open {
                        return;
                    }
                    let outside = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .map(|element| matches!(element.closest(".main-nav"), Ok(None)))
                        .unwrap_or(true);
                    if outside {
                        apply(MenuState::closed());
                    }
                });
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document
                        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Widening past the breakpoint must not leave mobile state behind.
    {
        let apply = apply.clone();
        use_effect_with_deps(
            move |_| {
                let debounced = Debounce::new(250, move || {
                    if viewport_width() > MOBILE_BREAKPOINT {
                        apply(MenuState::closed());
                    }
                });
                let listener = Closure::<dyn FnMut()>::new(move || debounced.call());
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Header restyle once scrolled past 50px. One eager evaluation at
    // mount, then a tightly debounced scroll listener.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let flag = Rc::new(Cell::new(false));
                let evaluate = {
                    let flag = flag.clone();
                    move || {
                        if let Some(next) = scrolled_after(flag.get(), scroll_offset()) {
                            flag.set(next);
                            is_scrolled.set(next);
                        }
                    }
                };
                evaluate();
                let debounced = Debounce::new(10, evaluate);
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

    let on_hamburger = {
        let apply = apply.clone();
        let model = model.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            let current = *model.borrow();
            apply(current.toggled());
        })
    };

    let on_dropdown_toggle = {
        let apply = apply.clone();
        let model = model.clone();
        Callback::from(move |event: MouseEvent| {
            if viewport_width() <= MOBILE_BREAKPOINT {
                event.prevent_default();
                event.stop_propagation();
                let current = *model.borrow();
                apply(current.dropdown_toggled());
            }
        })
    };

    let close_on_mobile = {
        let apply = apply.clone();
        Callback::from(move |_: MouseEvent| {
            if viewport_width() <= MOBILE_BREAKPOINT {
                apply(MenuState::closed());
            }
        })
    };

    let path = use_route::<Route>()
        .map(|route| route.to_path())
        .unwrap_or_else(|| "/".to_string());
    let current_slug = page_slug(&path).to_string();
    let link_class = |slug: &str| classes!("nav-link", (current_slug == slug).then(|| "active"));

    html! {
        <nav class={classes!("main-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">{"OptiGROW"}</Link<Route>>
                <button
                    class={classes!("hamburger", menu.open.then(|| "active"))}
                    onclick={on_hamburger}
                    aria-label="Toggle navigation"
                >
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                </button>
                <ul class={classes!("nav-menu", menu.open.then(|| "active"))}>
                    <li class="nav-item" onclick={close_on_mobile.clone()}>
                        <Link<Route> to={Route::Home} classes={link_class(HOME_SLUG)}>{"Home"}</Link<Route>>
                    </li>
                    <li class="nav-item" onclick={close_on_mobile.clone()}>
                        <Link<Route> to={Route::About} classes={link_class("about")}>{"About Us"}</Link<Route>>
                    </li>
                    <li class={classes!("nav-item", "dropdown", menu.dropdown_open.then(|| "active"))}>
                        <a
                            href="/services"
                            class={classes!(link_class("services"), "dropdown-toggle")}
                            onclick={on_dropdown_toggle}
                        >
                            {"Services"}
                        </a>
                        <ul class="dropdown-menu">
                            { for SERVICES.iter().map(|service| html! {
                                <li>
                                    <a
                                        class="dropdown-item"
                                        href={format!("/services#{}", service.id)}
                                        onclick={close_on_mobile.clone()}
                                    >
                                        {service.title}
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </li>
                    <li class="nav-item" onclick={close_on_mobile.clone()}>
                        <Link<Route> to={Route::HowItWorks} classes={link_class("how-it-works")}>{"How It Works"}</Link<Route>>
                    </li>
                    <li class="nav-item" onclick={close_on_mobile.clone()}>
                        <Link<Route> to={Route::WhyOutsource} classes={link_class("why-outsource")}>{"Why Outsource"}</Link<Route>>
                    </li>
                    <li class="nav-item" onclick={close_on_mobile}>
                        <Link<Route> to={Route::Contact} classes={link_class("contact")}>{"Contact"}</Link<Route>>
                    </li>
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_closed() {
        let state = MenuState::default().toggled().toggled();
        assert_eq!(state, MenuState::closed());
    }

    #[test]
    fn closing_the_menu_forces_the_dropdown_shut() {
        let state = MenuState {
            open: true,
            dropdown_open: true,
        };
        assert_eq!(state.toggled(), MenuState::closed());
    }

    #[test]
    fn opening_the_menu_leaves_the_dropdown_alone() {
        let state = MenuState::default().toggled();
        assert!(state.open);
        assert!(!state.dropdown_open);
        let with_dropdown = state.dropdown_toggled();
        assert!(with_dropdown.dropdown_open);
    }

    #[test]
    fn closed_clears_both_flags() {
        let closed = MenuState::closed();
        assert!(!closed.open);
        assert!(!closed.dropdown_open);
        // Closing again changes nothing.
        assert_eq!(closed, MenuState::closed());
    }

    #[test]
    fn scroll_flag_flips_only_at_the_threshold_edge() {
        assert_eq!(scrolled_after(false, 49.0), None);
        assert_eq!(scrolled_after(false, 51.0), Some(true));
        // Re-evaluating past the edge must not report another flip.
        assert_eq!(scrolled_after(true, 52.0), None);
        assert_eq!(scrolled_after(true, 12.0), Some(false));
    }

    #[test]
    fn exact_threshold_counts_as_not_scrolled() {
        assert_eq!(scrolled_after(true, 50.0), Some(false));
    }

    #[test]
    fn page_slug_takes_the_last_segment() {
        assert_eq!(page_slug("/services"), "services");
        assert_eq!(page_slug("/how-it-works/"), "how-it-works");
    }

    #[test]
    fn page_slug_defaults_to_home_when_empty() {
        assert_eq!(page_slug("/"), HOME_SLUG);
        assert_eq!(page_slug(""), HOME_SLUG);
    }
}
