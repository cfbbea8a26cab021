use web_sys::MouseEvent;
use yew::prelude::*;

struct Step {
    title: &'static str,
    body: &'static str,
}

const STEPS: [Step; 5] = [
    Step {
        title: "1. Discovery call",
        body: "We walk through your current payroll: headcount, pay structures, the states you operate in and the tools you already use. You leave the call with a fixed monthly quote.",
    },
    Step {
        title: "2. Data handover",
        body: "Your employee master, salary structures and statutory registrations move into our system. We validate every record against your last processed payroll before anything goes live.",
    },
    Step {
        title: "3. Parallel run",
        body: "For one cycle we compute payroll alongside your existing process and reconcile the two to the rupee. Discrepancies are resolved and documented before cutover.",
    },
    Step {
        title: "4. Go live",
        body: "From the next cycle we own the calendar: inputs close, computation, your sign-off, bank files and payslips. You approve one summary sheet a month.",
    },
    Step {
        title: "5. Ongoing support",
        body: "A named account manager answers employee queries, handles notices and keeps you ahead of every filing deadline, month after month.",
    },
];

/// Single-open accordion rule: clicking the open item collapses
/// everything, clicking any other item opens only that one.
pub fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    // First step starts expanded.
    let open = use_state(|| Some(0usize));

    html! {
        <div class="how-it-works-page">
            <section class="hiw-hero animate-on-scroll">
                <h1>{"From first call to first payroll in four weeks"}</h1>
                <p>{"A predictable onboarding path, then a calendar that runs itself."}</p>
            </section>
            <section class="accordion">
                { for STEPS.iter().enumerate().map(|(index, step)| {
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| open.set(toggled(*open, index)))
                    };
                    let is_open = *open == Some(index);
                    html! {
                        <div class={classes!("accordion-item", is_open.then(|| "active"))}>
                            <button class="accordion-header" onclick={onclick}>
                                <span>{step.title}</span>
                                <span class="accordion-icon">{ if is_open { "−" } else { "+" } }</span>
                            </button>
                            <div class="accordion-body">
                                <p>{step.body}</p>
                            </div>
                        </div>
                    }
                }) }
            </section>
            <style>
                {r#"
                .how-it-works-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 4rem;
                }

                .hiw-hero {
                    text-align: center;
                    padding: 3rem 0;
                }

                .hiw-hero p {
                    color: var(--muted);
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
    fn toggling_the_open_item_collapses_everything() {
        assert_eq!(toggled(Some(2), 2), None);
    }

    #[test]
    fn toggle_is_an_involution_on_a_single_header() {
        let after_two_clicks = toggled(toggled(None, 3), 3);
        assert_eq!(after_two_clicks, None);
    }

    #[test]
    fn at_most_one_item_is_open_after_any_click() {
        let mut open = Some(0);
        for clicked in [4, 1, 1, 0, 2] {
            open = toggled(open, clicked);
            assert!(open.is_none() || open.map(|i| i == clicked).unwrap_or(false));
        }
    }

    #[test]
    fn clicking_a_closed_item_switches_to_it() {
        assert_eq!(toggled(Some(0), 3), Some(3));
        assert_eq!(toggled(None, 1), Some(1));
    }
}
