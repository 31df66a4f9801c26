use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::PageHero;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <PageHero title="Page not found" subtitle="That page doesn't exist, or it moved." />
            <div class="page-body" style="text-align: center;">
                <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
            </div>
        </div>
    }
}
