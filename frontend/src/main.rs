use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod dom;
mod icons;
mod content {
    pub mod nav;
    pub mod industries;
    pub mod blog;
    pub mod features;
}
mod search {
    pub mod index;
    pub mod modal;
}
mod scroll_spy {
    pub mod tracker;
    pub mod hook;
}
mod charts {
    pub mod options;
    pub mod registry;
    pub mod canvas;
    pub mod context;
    pub mod trend;
}
mod components {
    pub mod navbar;
    pub mod footer;
    pub mod reveal;
    pub mod faq_item;
    pub mod dashboard_preview;
    pub mod page_hero;
    pub mod legal_document;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod pricing;
    pub mod how_it_works;
    pub mod blog;
    pub mod industries;
    pub mod faq;
    pub mod privacy;
    pub mod terms;
    pub mod partners;
    pub mod not_found;
}

use charts::context::ChartsContext;
use components::{footer::Footer, navbar::Nav};
use pages::{
    about::About,
    blog::{Blog, BlogPostPage},
    faq::Faq,
    home::Home,
    how_it_works::HowItWorks,
    industries::{Industries, IndustryPage},
    not_found::NotFound,
    partners::Partners,
    pricing::Pricing,
    privacy::PrivacyPolicy,
    terms::TermsOfService,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/pricing")]
    Pricing,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/industries")]
    Industries,
    #[at("/industries/:slug")]
    Industry { slug: String },
    #[at("/faq")]
    Faq,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/partners")]
    Partners,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Router destination for a site path, `NotFound` for anything unknown.
    pub fn from_href(href: &str) -> Route {
        Route::recognize(href).unwrap_or(Route::NotFound)
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        }
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        }
        Route::Industries => {
            info!("Rendering Industries page");
            html! { <Industries /> }
        }
        Route::Industry { slug } => {
            info!("Rendering industry page {}", slug);
            html! { <IndustryPage {slug} /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Partners => {
            info!("Rendering Partners page");
            html! { <Partners /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let charts = use_state(ChartsContext::new);

    {
        let charts = (*charts).clone();
        use_effect_with_deps(
            move |_| move || charts.registry().destroy_all_charts(),
            (),
        );
    }

    html! {
        <ContextProvider<ChartsContext> context={(*charts).clone()}>
            <BrowserRouter>
                <Nav />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<ChartsContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{blog::find_post, industries::find_industry};
    use crate::search::index::build_corpus;

    #[test]
    fn every_search_entry_routes_to_a_real_page() {
        for item in build_corpus() {
            let route = Route::from_href(&item.href);
            assert_ne!(route, Route::NotFound, "{} has no route", item.href);
            match route {
                Route::Industry { slug } => assert!(find_industry(&slug).is_some(), "unknown industry {}", slug),
                Route::BlogPost { slug } => assert!(find_post(&slug).is_some(), "unknown post {}", slug),
                _ => {}
            }
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::from_href("/definitely/not/here"), Route::NotFound);
        assert_eq!(Route::from_href("/industries/hvac"), Route::Industry { slug: "hvac".into() });
    }
}
