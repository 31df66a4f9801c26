use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::PageHero;
use crate::config;
use crate::content::industries::{find_industry, INDUSTRIES};
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Industries)]
pub fn industries() -> Html {
    html! {
        <div class="industries-page">
            <PageHero
                title="Review requests for every local business"
                subtitle="Pick your industry to see how MoreStars fits the way you already work."
            />
            <div class="page-body">
                <div class="card-grid">
                    {
                        for INDUSTRIES.iter().map(|industry| html! {
                            <Link<Route> to={Route::Industry { slug: industry.slug.to_string() }} classes="card">
                                { industry.icon.render() }
                                <h3>{ industry.name }</h3>
                                <p>{ industry.tagline }</p>
                            </Link<Route>>
                        })
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IndustryProps {
    pub slug: String,
}

#[function_component(IndustryPage)]
pub fn industry_page(props: &IndustryProps) -> Html {
    let Some(industry) = find_industry(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <div class="industry-page">
            <PageHero title={format!("MoreStars for {}", industry.name)} subtitle={industry.tagline} />
            <div class="page-body">
                <h2>{"Sound familiar?"}</h2>
                <ul>
                    { for industry.pain_points.iter().map(|point| html! { <li>{ *point }</li> }) }
                </ul>
                <h2>{"What your customers receive"}</h2>
                <blockquote class="sample-message">
                    { industry.sample_message.replace("{link}", "g.page/r/your-business/review") }
                </blockquote>
                <p>
                    {"Every message is sent from your own local number, and every customer can opt out with a single reply."}
                </p>
                <div class="industry-cta">
                    <a href={config::signup_url()} class="hero-cta">{ format!("Start collecting {} reviews", industry.name) }</a>
                    <Link<Route> to={Route::Industries}>{"See other industries"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .sample-message {
                    background: #1f2937;
                    border-left: 4px solid #FBBF24;
                    border-radius: 8px;
                    padding: 1rem 1.25rem;
                    color: #eee;
                    margin: 1.5rem 0;
                }
                .industry-cta {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                    margin-top: 2rem;
                }
                .industry-cta .hero-cta {
                    background: #FBBF24;
                    color: #1a1a1a;
                    padding: 0.8rem 1.5rem;
                    border-radius: 10px;
                    font-weight: 700;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
