use yew::prelude::*;

use crate::components::page_hero::PageHero;

const PARTNER_PERKS: [(&str, &str); 3] = [
    ("30% recurring commission", "Earn on every client you refer for as long as they stay."),
    ("White-label dashboard", "Put your agency's logo on the reports your clients see."),
    ("Partner support line", "A direct line to our team for onboarding and questions."),
];

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <div class="partners-page">
            <PageHero
                title="Partner with MoreStars"
                subtitle="For marketing agencies, web designers and consultants who serve local businesses."
            />
            <div class="page-body">
                <div class="card-grid">
                    {
                        for PARTNER_PERKS.iter().map(|(title, detail)| html! {
                            <div class="card">
                                <h3>{ *title }</h3>
                                <p>{ *detail }</p>
                            </div>
                        })
                    }
                </div>
                <p>
                    {"Interested? Email "}
                    <a href="mailto:partners@morestars.io">{"partners@morestars.io"}</a>
                    {" with a little about your agency and the clients you work with."}
                </p>
            </div>
        </div>
    }
}
