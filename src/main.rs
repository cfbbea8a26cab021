mod components;
mod config;
mod pages;
mod utils;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use components::floating_cta::FloatingCta;
use components::navigation::Navigation;
use components::scroll_reveal::ScrollReveal;
use config::SiteConfig;
use pages::about::About;
use pages::contact::Contact;
use pages::home::Home;
use pages::how_it_works::HowItWorks;
use pages::services::Services;
use pages::why_outsource::WhyOutsource;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/why-outsource")]
    WhyOutsource,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Services => html! { <Services /> },
        Route::HowItWorks => html! { <HowItWorks /> },
        Route::WhyOutsource => html! { <WhyOutsource /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! {
            <section class="not-found" style="text-align: center; padding: 5rem 1.5rem;">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
            </section>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = SiteConfig::default();

    {
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let _ = body.class_list().add_1("page-loaded");
                }
                log::debug!(
                    "site config: {}",
                    serde_json::to_string(&config).unwrap_or_default()
                );
                gloo_console::log!("OptiGROW website loaded successfully");

                // Fade the page out right before a hard navigation.
                let transition = Closure::<dyn FnMut()>::new(|| {
                    if let Some(body) =
                        web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
                    {
                        let _ = body.class_list().add_1("page-transitioning");
                    }
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "beforeunload",
                        transition.as_ref().unchecked_ref(),
                    );
                }
                transition.forget();
                || ()
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <ContextProvider<SiteConfig> context={config.clone()}>
                <Navigation />
                <ScrollReveal />
                <main class="page-content">
                    <Switch<Route> render={switch} />
                </main>
                <FloatingCta config={config} />
            </ContextProvider<SiteConfig>>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
