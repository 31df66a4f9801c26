use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::page_hero::PageHero;
use crate::content::blog::{find_post, BLOG_POSTS};
use crate::pages::not_found::NotFound;
use crate::Route;

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="blog-list-page">
            <PageHero
                title="The MoreStars Blog"
                subtitle="Practical advice on earning more reviews and winning local search."
            />
            <div class="page-body">
                <div class="card-grid">
                    {
                        for BLOG_POSTS.iter().map(|post| html! {
                            <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="card blog-post-preview">
                                <span class="blog-date">
                                    { format!("{} · {} min read", post.published_label(), post.read_minutes) }
                                </span>
                                <h3>{ post.title }</h3>
                                <p>{ post.excerpt }</p>
                            </Link<Route>>
                        })
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    let Some(post) = find_post(&props.slug) else {
        return html! { <NotFound /> };
    };

    html! {
        <article class="blog-post-page">
            <PageHero title={post.title} subtitle={post.excerpt} />
            <div class="page-body">
                <p class="blog-date">
                    { format!("{} · {} min read", post.published_label(), post.read_minutes) }
                </p>
                { for post.body.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                <p>
                    <Link<Route> to={Route::Blog}>{"← All articles"}</Link<Route>>
                </p>
            </div>
            <script type="application/ld+json">{ post.json_ld().to_string() }</script>
        </article>
    }
}
