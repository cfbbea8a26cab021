use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::components::Link;

use crate::pages::services::SERVICES;
use crate::utils::scroll::scroll_to_section;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let on_explore = Callback::from(|_: MouseEvent| scroll_to_section("services-overview"));

    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Payroll off your plate. Growth on it."}</h1>
                    <p class="hero-subtitle">
                        {"OptiGROW runs payroll, statutory compliance and benefits for growing Indian businesses, so your team can stop chasing challans and start building."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={on_explore}>{"Explore Services"}</button>
                        <Link<Route> to={Route::Contact} classes="hero-cta secondary">
                            {"Talk to Us"}
                        </Link<Route>>
                    </div>
                </div>
            </header>

            <section class="stats-section">
                <div class="stat animate-on-scroll">
                    <span class="stat-number">{"120+"}</span>
                    <span class="stat-label">{"companies on our payroll calendar"}</span>
                </div>
                <div class="stat animate-on-scroll">
                    <span class="stat-number">{"18,000"}</span>
                    <span class="stat-label">{"payslips released every month"}</span>
                </div>
                <div class="stat animate-on-scroll">
                    <span class="stat-number">{"0"}</span>
                    <span class="stat-label">{"late statutory filings last year"}</span>
                </div>
            </section>

            <section id="services-overview" class="services-overview">
                <h2 class="animate-on-scroll">{"What we take off your plate"}</h2>
                <div class="service-cards">
                    { for SERVICES.iter().map(|service| html! {
                        <a
                            class="service-card animate-on-scroll"
                            href={format!("/services#{}", service.id)}
                        >
                            <h3>{service.title}</h3>
                            <p>{service.blurb}</p>
                        </a>
                    }) }
                </div>
            </section>

            <section class="closing-cta animate-on-scroll">
                <h2>{"One fixed monthly fee. One summary sheet to approve."}</h2>
                <Link<Route> to={Route::HowItWorks} classes="hero-cta">
                    {"See how onboarding works"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .hero {
                    padding: 6rem 1.5rem 5rem;
                    text-align: center;
                    background: linear-gradient(160deg, var(--surface-alt), #ffffff);
                }

                .hero h1 {
                    font-size: 2.8rem;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    color: var(--muted);
                    max-width: 620px;
                    margin: 0 auto 2rem;
                    line-height: 1.7;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .hero-cta {
                    display: inline-block;
                    padding: 0.8rem 1.8rem;
                    border-radius: 999px;
                    border: none;
                    background: var(--brand);
                    color: #ffffff;
                    font-size: 1rem;
                    text-decoration: none;
                    cursor: pointer;
                }

                .hero-cta.secondary {
                    background: none;
                    border: 1px solid var(--brand);
                    color: var(--brand);
                }

                .stats-section {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                    flex-wrap: wrap;
                    padding: 3.5rem 1.5rem;
                }

                .stat {
                    text-align: center;
                }

                .stat-number {
                    display: block;
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: var(--brand);
                }

                .stat-label {
                    color: var(--muted);
                    font-size: 0.9rem;
                }

                .services-overview {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    text-align: center;
                }

                .service-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                    margin-top: 2rem;
                }

                .service-card {
                    display: block;
                    padding: 1.5rem;
                    border: 1px solid var(--surface-alt);
                    border-radius: 12px;
                    text-align: left;
                    text-decoration: none;
                    color: inherit;
                    transition: box-shadow 0.25s ease;
                }

                .service-card:hover {
                    box-shadow: 0 10px 26px rgba(0, 0, 0, 0.09);
                }

                .service-card p {
                    color: var(--muted);
                    font-size: 0.9rem;
                    line-height: 1.6;
                }

                .closing-cta {
                    text-align: center;
                    padding: 4rem 1.5rem 5rem;
                }

                .closing-cta h2 {
                    margin-bottom: 1.5rem;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
