use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard_preview::DashboardPreview;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::features::FEATURES;
use crate::content::industries::INDUSTRIES;
use crate::dom;
use crate::icons::Icon;
use crate::Route;

const CHANNEL_WORDS: [&str; 3] = ["one text message", "one QR code scan", "one tap"];

#[function_component(Home)]
pub fn home() -> Html {
    let word_index = use_state(|| 0usize);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        |_| {
            dom::scroll_to_top();
            || ()
        },
        (),
    );

    {
        let word_index = word_index.clone();
        use_effect_with_deps(
            move |_| {
                let mut next = 0;
                let interval = Interval::new(2500, move || {
                    next = (next + 1) % CHANNEL_WORDS.len();
                    word_index.set(next);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"More 5-star Google reviews, on autopilot"}</h1>
                    <p class="hero-subtitle">
                        {"Your happiest customers are one step away from leaving a review. MoreStars gets them there with "}
                        <span class="hero-rotating-word">{ CHANNEL_WORDS[*word_index % CHANNEL_WORDS.len()] }</span>
                        {"."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={config::signup_url()} class="hero-cta">{"Start your free trial"}</a>
                        <Link<Route> to={Route::HowItWorks} classes="hero-secondary">
                            {"See how it works"}
                        </Link<Route>>
                    </div>
                    <p class="hero-note">{"14 days free. No credit card. Cancel anytime."}</p>
                </div>
            </header>

            <section class="home-features">
                {
                    for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal class={classes!("feature-card")} delay_ms={i as u32 * 120}>
                            { feature.icon.render() }
                            <h3>{ feature.name }</h3>
                            <p>{ feature.summary }</p>
                        </Reveal>
                    })
                }
                <Reveal class={classes!("feature-card")} delay_ms={240}>
                    { Icon::Chart.render() }
                    <h3>{"Review Analytics"}</h3>
                    <p>{"Track requests, clicks and new reviews per location and per team member."}</p>
                </Reveal>
            </section>

            <Reveal>
                <DashboardPreview />
            </Reveal>

            <section class="home-industries">
                <h2>{"Built for businesses that live on local search"}</h2>
                <div class="industry-chips">
                    {
                        for INDUSTRIES.iter().map(|industry| html! {
                            <Link<Route> to={Route::Industry { slug: industry.slug.to_string() }} classes="industry-chip">
                                { industry.icon.render() }
                                <span>{ industry.name }</span>
                            </Link<Route>>
                        })
                    }
                </div>
            </section>

            <section class="footer-cta">
                <h2>{"Ready to outshine the competition?"}</h2>
                <p>{"Set up takes five minutes. Your first review request can go out today."}</p>
                <a href={config::signup_url()} class="hero-cta">{"Get started"}</a>
            </section>

            <style>
                {r#"
                .home-page {
                    color: #fff;
                }
                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                    background: radial-gradient(circle at top, rgba(251, 191, 36, 0.15), transparent 60%);
                }
                .hero h1 {
                    font-size: 3.5rem;
                    max-width: 900px;
                    margin: 0 auto 1.5rem;
                    background: linear-gradient(45deg, #fff, #FBBF24);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #bbb;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }
                .hero-rotating-word {
                    color: #FBBF24;
                    font-weight: 600;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                }
                .hero-cta {
                    background: #FBBF24;
                    color: #1a1a1a;
                    padding: 0.9rem 1.8rem;
                    border-radius: 10px;
                    font-weight: 700;
                    text-decoration: none;
                }
                .hero-secondary {
                    color: #fff;
                    text-decoration: underline;
                }
                .hero-note {
                    color: #777;
                    font-size: 0.9rem;
                    margin-top: 1rem;
                }
                .home-features {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .feature-card {
                    background: rgba(30, 30, 30, 0.8);
                    border: 1px solid rgba(251, 191, 36, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }
                .home-industries {
                    text-align: center;
                    padding: 4rem 2rem;
                }
                .industry-chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    justify-content: center;
                    max-width: 900px;
                    margin: 2rem auto 0;
                }
                .industry-chip {
                    display: flex;
                    gap: 0.4rem;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.06);
                    color: #ddd;
                    text-decoration: none;
                }
                .industry-chip:hover {
                    background: rgba(251, 191, 36, 0.15);
                }
                .footer-cta {
                    text-align: center;
                    padding: 5rem 2rem;
                }
                @media (max-width: 800px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                    .home-features {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
