use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero animate-on-scroll">
                <h1>{"Payroll people, not generalists"}</h1>
                <p>
                    {"OptiGROW started inside a chartered accountancy practice in Thane, where we watched the same story repeat: a growing company, a brilliant product, and a founder spending the last week of every month untangling payroll and compliance."}
                </p>
            </section>
            <section class="about-body">
                <div class="about-block animate-on-scroll">
                    <h2>{"What we believe"}</h2>
                    <p>
                        {"Payroll is a promise. Salaries land on the agreed date, filings reach the department before the deadline, and nobody on your team has to become an expert in four states' labour law to make that happen."}
                    </p>
                </div>
                <div class="about-block animate-on-scroll">
                    <h2>{"How we work"}</h2>
                    <p>
                        {"Every client gets a named account manager, a fixed monthly calendar and a single summary sheet to approve. No per-query billing, no surprise fees when a notice arrives."}
                    </p>
                </div>
            </section>
            <style>
                {r#"
                .about-page {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 4rem;
                }

                .about-hero {
                    text-align: center;
                    padding: 3rem 0 1.5rem;
                }

                .about-hero p,
                .about-block p {
                    color: var(--muted);
                    line-height: 1.8;
                }

                .about-block {
                    margin-top: 2.5rem;
                }
                "#}
            </style>
        </div>
    }
}
