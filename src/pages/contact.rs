use yew::prelude::*;

use crate::config::SiteConfig;

#[function_component(Contact)]
pub fn contact() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let address = &config.company.address;

    html! {
        <div class="contact-page">
            <section class="contact-hero animate-on-scroll">
                <h1>{"Talk to a payroll specialist"}</h1>
                <p>{"Call, write or walk in. We reply within one working day."}</p>
            </section>
            <section class="contact-grid">
                <div class="contact-card animate-on-scroll">
                    <h2>{"Reach us"}</h2>
                    <p>
                        <a href={config.phone.href.clone()}>{&config.phone.display}</a>
                    </p>
                    <p>
                        <a href={format!("mailto:{}", config.company.email)}>{&config.company.email}</a>
                    </p>
                    <p>
                        <a
                            href={config.whatsapp.chat_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Chat on WhatsApp"}
                        </a>
                    </p>
                </div>
                <div class="contact-card animate-on-scroll">
                    <h2>{&config.company.name}</h2>
                    <p>{&address.line1}</p>
                    <p>{&address.line2}</p>
                    <p>{format!("{} {}, {}", address.city, address.pincode, address.state)}</p>
                    <p>{&address.country}</p>
                </div>
            </section>
            <section class="map-section animate-on-scroll">
                <iframe
                    src={config.map.embed_url.clone()}
                    title="Office location"
                    loading="lazy"
                ></iframe>
            </section>
            <style>
                {r#"
                .contact-page {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 4rem;
                }

                .contact-hero {
                    text-align: center;
                    padding: 3rem 0;
                }

                .contact-hero p {
                    color: var(--muted);
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .contact-card {
                    border: 1px solid var(--surface-alt);
                    border-radius: 12px;
                    padding: 1.5rem;
                }

                .contact-card p {
                    margin: 0.4rem 0;
                    color: var(--muted);
                }

                .contact-card a {
                    color: var(--brand);
                    text-decoration: none;
                }

                .map-section {
                    margin-top: 2rem;
                }

                .map-section iframe {
                    width: 100%;
                    height: 360px;
                    border: none;
                    border-radius: 12px;
                }
                "#}
            </style>
        </div>
    }
}
