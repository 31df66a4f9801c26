use yew::prelude::*;

use crate::components::page_hero::PageHero;
use crate::components::reveal::Reveal;
use crate::content::features::FEATURES;

const STEPS: [(&str, &str); 4] = [
    ("Connect your Google profile", "Sign in with Google and we find your review link automatically."),
    ("Add customers", "Type a phone number, upload a list, or connect Shopify, Stripe or Zapier to add them as jobs close."),
    ("We send the ask", "A short, friendly text goes out at the best time, with your review link one tap away."),
    ("Watch the stars roll in", "New reviews show up on your dashboard, with a gentle reminder to anyone who hasn't responded."),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <div class="how-it-works-page">
            <PageHero
                title="How MoreStars works"
                subtitle="Four steps from finished job to fresh five-star review."
            />
            <div class="page-body">
                <ol class="steps">
                    {
                        for STEPS.iter().enumerate().map(|(i, (title, detail))| html! {
                            <Reveal class={classes!("step")} delay_ms={i as u32 * 100}>
                                <span class="step-number">{ (i + 1).to_string() }</span>
                                <div>
                                    <h3>{ *title }</h3>
                                    <p>{ *detail }</p>
                                </div>
                            </Reveal>
                        })
                    }
                </ol>
                <h2>{"Two ways to ask"}</h2>
                <div class="card-grid">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <div class="card">
                                { feature.icon.render() }
                                <h3>{ feature.name }</h3>
                                <p>{ feature.summary }</p>
                            </div>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .steps {
                    list-style: none;
                    padding: 0;
                }
                .step {
                    display: flex;
                    gap: 1.25rem;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }
                .step-number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #FBBF24;
                    color: #1a1a1a;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step h3 {
                    color: #fff;
                    margin: 0.3rem 0;
                }
                "#}
            </style>
        </div>
    }
}
