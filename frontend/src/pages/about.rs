use yew::prelude::*;

use crate::components::page_hero::PageHero;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <PageHero
                title="About MoreStars"
                subtitle="We help the businesses that keep towns running get the credit they deserve online."
            />
            <div class="page-body">
                <h2>{"Why we started"}</h2>
                <p>
                    {"We grew up around family-owned shops, clinics and service companies. They did great work, but their Google profiles told a different story: a handful of reviews, mostly from the one bad day a year."}
                </p>
                <p>
                    {"Big chains have marketing teams to fix that. Local businesses have a phone, a truck and not enough hours. MoreStars is the review follow-up they never have time for, running quietly in the background."}
                </p>
                <h2>{"What we believe"}</h2>
                <div class="card-grid">
                    <div class="card">
                        <h3>{"Honest reviews only"}</h3>
                        <p>{"We never gate, filter or incentivise reviews. Every customer gets the same simple ask."}</p>
                    </div>
                    <div class="card">
                        <h3>{"Respect the inbox"}</h3>
                        <p>{"One request, one optional reminder. Opt-outs are honoured instantly."}</p>
                    </div>
                    <div class="card">
                        <h3>{"Five-minute setup"}</h3>
                        <p>{"If it takes longer than a coffee break to start, we did something wrong."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
