use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::utils::scroll::{location_hash, scroll_into_view_smooth, viewport_width, MOBILE_BREAKPOINT};

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub points: [&'static str; 3],
}

pub const SERVICES: [Service; 4] = [
    Service {
        id: "payroll-processing",
        title: "Payroll Processing",
        blurb: "End-to-end monthly payroll: inputs, computation, payslips and statutory remittances, delivered on a fixed calendar you sign off once.",
        points: [
            "Attendance and variable-pay inputs consolidated from your HR tools",
            "Net pay, TDS and reimbursements computed and verified twice",
            "Bank upload files and payslips released on the agreed date",
        ],
    },
    Service {
        id: "compliance-management",
        title: "Compliance Management",
        blurb: "PF, ESI, PT and LWF filings handled by specialists who track every state's deadlines so you never pay a late fee again.",
        points: [
            "Registrations and amendments across all operating states",
            "Monthly challans prepared, paid and archived with proof",
            "Inspection support with a complete paper trail",
        ],
    },
    Service {
        id: "benefits-administration",
        title: "Benefits Administration",
        blurb: "Group health, gratuity and leave programs administered end to end, from enrolment windows to final settlements.",
        points: [
            "Insurer coordination for additions, deletions and claims",
            "Gratuity and leave-encashment workings at exit",
            "Annual benefits statements for every employee",
        ],
    },
    Service {
        id: "recruitment-support",
        title: "Recruitment Support",
        blurb: "Offer letters, onboarding documentation and background checks so new joiners hit payroll correctly from day one.",
        points: [
            "Offer and appointment letters from approved templates",
            "Document collection and verification before the first payroll",
            "Clean handover into the monthly payroll master",
        ],
    },
];

/// Single-select position over an ordered panel list. Out-of-range
/// requests are ignored; cycling wraps at both ends.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TabSelection {
    current: usize,
    len: usize,
}

impl TabSelection {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn next(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.current + 1) % self.len
        }
    }

    pub fn previous(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.current + self.len - 1) % self.len
        }
    }
}

/// Maps a URL fragment onto a panel position. Empty fragments and
/// unknown identifiers resolve to nothing.
pub fn index_for_fragment<'a, I>(hash: &str, ids: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let fragment = hash.trim_start_matches('#');
    if fragment.is_empty() {
        return None;
    }
    ids.into_iter().position(|id| id == fragment)
}

#[function_component(Services)]
pub fn services() -> Html {
    let container = use_node_ref();
    let initial = {
        let mut selection = TabSelection::new(SERVICES.len());
        if let Some(index) = index_for_fragment(&location_hash(), SERVICES.iter().map(|s| s.id)) {
            selection.select(index);
        }
        selection
    };
    let selection = use_state(|| initial);
    let model = use_mut_ref(|| initial);

    let show_service = {
        let selection = selection.clone();
        let model = model.clone();
        Rc::new(move |index: usize| {
            let mut next = *model.borrow();
            if next.select(index) {
                *model.borrow_mut() = next;
                selection.set(next);
            }
        })
    };

    // Follow in-page anchors such as /services#compliance-management.
    {
        let show_service = show_service.clone();
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut()>::new(move || {
                    if let Some(index) =
                        index_for_fragment(&location_hash(), SERVICES.iter().map(|s| s.id))
                    {
                        show_service(index);
                        if let Some(element) = container.cast::<web_sys::Element>() {
                            scroll_into_view_smooth(&element);
                        }
                    }
                });
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "hashchange",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Arrow keys cycle panels for as long as this page is mounted.
    {
        let show_service = show_service.clone();
        let model = model.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                    let current = *model.borrow();
                    match event.key().as_str() {
                        "ArrowLeft" => show_service(current.previous()),
                        "ArrowRight" => show_service(current.next()),
                        _ => {}
                    }
                });
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document
                        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div class="services-page">
            <section class="services-hero animate-on-scroll">
                <h1>{"Services built around your payroll calendar"}</h1>
                <p>{"Pick a service to see exactly what we take off your plate."}</p>
            </section>
            <section class="services-content-container" ref={container.clone()}>
                <div class="service-nav">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let onclick = {
                            let show_service = show_service.clone();
                            let container = container.clone();
                            Callback::from(move |event: MouseEvent| {
                                event.prevent_default();
                                show_service(index);
                                if viewport_width() <= MOBILE_BREAKPOINT {
                                    if let Some(element) = container.cast::<web_sys::Element>() {
                                        scroll_into_view_smooth(&element);
                                    }
                                }
                            })
                        };
                        html! {
                            <button
                                class={classes!("service-nav-btn", (selection.current() == index).then(|| "active"))}
                                onclick={onclick}
                            >
                                {service.title}
                            </button>
                        }
                    }) }
                </div>
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <section
                        id={service.id}
                        class={classes!("service-content", (selection.current() == index).then(|| "active"))}
                    >
                        <h2>{service.title}</h2>
                        <p class="service-blurb">{service.blurb}</p>
                        <ul>
                            { for service.points.iter().map(|point| html! { <li>{*point}</li> }) }
                        </ul>
                    </section>
                }) }
            </section>
            <style>
                {r#"
                .services-page {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 4rem;
                }

                .services-hero {
                    text-align: center;
                    padding: 3rem 0;
                }

                .services-hero p {
                    color: var(--muted);
                }

                .service-blurb {
                    color: var(--muted);
                    line-height: 1.7;
                    max-width: 640px;
                }

                .service-content ul {
                    padding-left: 1.2rem;
                    line-height: 1.9;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_selection_changes_nothing() {
        let mut selection = TabSelection::new(4);
        selection.select(2);
        assert!(!selection.select(4));
        assert!(!selection.select(usize::MAX));
        assert_eq!(selection.current(), 2);
    }

    #[test]
    fn cycling_right_n_times_returns_to_the_start() {
        for start in 0..4 {
            let mut selection = TabSelection::new(4);
            selection.select(start);
            for _ in 0..4 {
                let next = selection.next();
                selection.select(next);
            }
            assert_eq!(selection.current(), start);
        }
    }

    #[test]
    fn previous_wraps_below_zero() {
        let selection = TabSelection::new(4);
        assert_eq!(selection.previous(), 3);
    }

    #[test]
    fn empty_panel_list_stays_inert() {
        let mut selection = TabSelection::new(0);
        assert!(!selection.select(0));
        assert_eq!(selection.next(), 0);
        assert_eq!(selection.previous(), 0);
    }

    #[test]
    fn fragment_resolves_to_the_matching_panel() {
        let ids = ["payroll", "compliance", "pricing"];
        assert_eq!(index_for_fragment("#pricing", ids), Some(2));
        assert_eq!(index_for_fragment("#payroll", ids), Some(0));
    }

    #[test]
    fn unknown_or_empty_fragments_resolve_to_nothing() {
        let ids = ["payroll", "compliance", "pricing"];
        assert_eq!(index_for_fragment("#billing", ids), None);
        assert_eq!(index_for_fragment("#", ids), None);
        assert_eq!(index_for_fragment("", ids), None);
    }

    #[test]
    fn site_service_ids_match_their_panels() {
        let hash = format!("#{}", SERVICES[1].id);
        assert_eq!(
            index_for_fragment(&hash, SERVICES.iter().map(|s| s.id)),
            Some(1)
        );
    }
}
