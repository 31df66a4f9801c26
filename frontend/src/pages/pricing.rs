use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::PageHero;
use crate::config;
use crate::Route;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    highlight: bool,
    features: &'static [&'static str],
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$49",
        period: "/month",
        highlight: false,
        features: &[
            "1 location",
            "250 SMS review requests per month",
            "Printable QR code cards",
            "Automatic reminder after 3 days",
        ],
    },
    Plan {
        name: "Growth",
        price: "$99",
        period: "/month",
        highlight: true,
        features: &[
            "Up to 3 locations",
            "1,000 SMS review requests per month",
            "Team leaderboards and analytics",
            "Shopify and Zapier integrations",
        ],
    },
    Plan {
        name: "Agency",
        price: "$249",
        period: "/month",
        highlight: false,
        features: &[
            "Unlimited locations",
            "5,000 SMS review requests per month",
            "White-label dashboard",
            "Priority support",
        ],
    },
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <div class="pricing-page">
            <PageHero
                title="Simple, predictable pricing"
                subtitle="Every plan starts with a 14-day free trial. No setup fees, no contracts."
            />
            <div class="page-body">
                <div class="pricing-grid">
                    {
                        for PLANS.iter().map(|plan| html! {
                            <div class={classes!("pricing-card", plan.highlight.then_some("highlight"))}>
                                <h3>{ plan.name }</h3>
                                <div class="price">
                                    <span class="amount">{ plan.price }</span>
                                    <span class="period">{ plan.period }</span>
                                </div>
                                <ul>
                                    { for plan.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                                </ul>
                                <a href={config::signup_url()} class="pricing-cta">{"Start free trial"}</a>
                            </div>
                        })
                    }
                </div>
                <p class="pricing-footnote">
                    {"Questions about billing? Check the "}
                    <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                    {" or read our "}
                    <Link<Route> to={Route::Terms}>{"terms"}</Link<Route>>
                    {"."}
                </p>
            </div>
            <style>
                {r#"
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .pricing-card {
                    background: rgba(30, 30, 30, 0.8);
                    border: 1px solid rgba(251, 191, 36, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }
                .pricing-card.highlight {
                    border-color: #FBBF24;
                    transform: scale(1.03);
                }
                .pricing-card h3 {
                    color: #fff;
                }
                .price .amount {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #FBBF24;
                }
                .price .period {
                    color: #999;
                }
                .pricing-card ul {
                    flex: 1;
                    padding-left: 1.2rem;
                }
                .pricing-cta {
                    text-align: center;
                    background: #FBBF24;
                    color: #1a1a1a;
                    padding: 0.75rem;
                    border-radius: 8px;
                    font-weight: 700;
                    text-decoration: none;
                }
                .pricing-footnote {
                    text-align: center;
                    margin-top: 2rem;
                }
                @media (max-width: 800px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
