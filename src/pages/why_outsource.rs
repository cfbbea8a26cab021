use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

const REASONS: [(&str, &str); 4] = [
    (
        "Cost you can plan",
        "A payroll specialist, a compliance tracker and processing software cost more than a fixed monthly fee, and they take leave in the last week of the month.",
    ),
    (
        "Deadlines without drama",
        "PF by the 15th, ESI by the 15th, PT on each state's own date. We track the calendar across every state you hire in, so nothing slips.",
    ),
    (
        "Confidentiality by default",
        "Salary data stays outside your office network and outside office gossip. Access is limited to the people who process your payroll.",
    ),
    (
        "Audit-ready records",
        "Every challan, return and register is filed and retrievable. When an inspector writes, the paper trail is already assembled.",
    ),
];

#[function_component(WhyOutsource)]
pub fn why_outsource() -> Html {
    html! {
        <div class="why-page">
            <section class="why-hero animate-on-scroll">
                <h1>{"Why companies hand us their payroll"}</h1>
            </section>
            <section class="reason-list">
                { for REASONS.iter().map(|(title, body)| html! {
                    <div class="reason animate-on-scroll">
                        <h2>{*title}</h2>
                        <p>{*body}</p>
                    </div>
                }) }
            </section>
            <section class="why-cta animate-on-scroll">
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    {"Get a fixed quote"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .why-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 4rem;
                }

                .why-hero {
                    text-align: center;
                    padding: 3rem 0 1rem;
                }

                .reason {
                    margin-top: 2.25rem;
                }

                .reason p {
                    color: var(--muted);
                    line-height: 1.8;
                }

                .why-cta {
                    text-align: center;
                    padding-top: 3rem;
                }
                "#}
            </style>
        </div>
    }
}
