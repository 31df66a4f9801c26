use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Heading block shared by the content pages. Also resets scroll on mount.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    use_effect_with_deps(
        |_| {
            dom::scroll_to_top();
            || ()
        },
        props.title.clone(),
    );

    html! {
        <section class="page-hero">
            <h1>{ props.title.clone() }</h1>
            if let Some(subtitle) = &props.subtitle {
                <p>{ subtitle.clone() }</p>
            }
            <style>
                {r#"
                .page-hero {
                    text-align: center;
                    padding: 8rem 2rem 3rem;
                    color: #fff;
                }
                .page-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #FBBF24);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .page-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .page-body {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 0 2rem 5rem;
                    color: #ccc;
                    line-height: 1.7;
                }
                .page-body h2 {
                    color: #FBBF24;
                    margin-top: 2.5rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.25rem;
                    margin: 2rem 0;
                }
                .card {
                    background: rgba(30, 30, 30, 0.8);
                    border: 1px solid rgba(251, 191, 36, 0.1);
                    border-radius: 12px;
                    padding: 1.5rem;
                    color: #ccc;
                    text-decoration: none;
                    transition: border-color 0.3s ease;
                }
                a.card:hover {
                    border-color: rgba(251, 191, 36, 0.4);
                }
                .card h3 {
                    color: #fff;
                    margin-top: 0.5rem;
                }
                .toc-layout {
                    display: flex;
                    gap: 2.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem 5rem;
                }
                .toc-layout .page-body {
                    padding: 0;
                    flex: 1;
                }
                .toc-layout section {
                    scroll-margin-top: 100px;
                }
                "#}
            </style>
        </section>
    }
}
