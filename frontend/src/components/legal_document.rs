use yew::prelude::*;

use crate::components::page_hero::PageHero;
use crate::scroll_spy::hook::{use_scroll_spy, TableOfContents};
use crate::scroll_spy::tracker::Section;

/// Legal pages sit under a taller hero, so sections activate a little earlier.
pub const LEGAL_SCROLL_OFFSET: f64 = 200.0;
pub const LEGAL_HEADER_CLEARANCE: f64 = 80.0;

#[derive(Properties, PartialEq)]
pub struct LegalDocumentProps {
    pub title: AttrValue,
    pub last_updated: AttrValue,
    pub sections: &'static [Section],
    /// Paragraphs per section, in the same order as `sections`.
    pub bodies: &'static [&'static [&'static str]],
}

#[function_component(LegalDocument)]
pub fn legal_document(props: &LegalDocumentProps) -> Html {
    let spy = use_scroll_spy(props.sections, LEGAL_SCROLL_OFFSET, LEGAL_HEADER_CLEARANCE);

    html! {
        <div class="legal-page">
            <PageHero title={props.title.clone()} subtitle={AttrValue::from(format!("Last updated {}", props.last_updated))} />
            <div class="toc-layout">
                <TableOfContents
                    sections={props.sections}
                    active_id={spy.active_id}
                    on_select={spy.on_select}
                />
                <div class="page-body">
                    {
                        for props.sections.iter().zip(props.bodies.iter()).map(|(section, paragraphs)| html! {
                            <section id={section.id} key={section.id}>
                                <h2>{ section.title }</h2>
                                { for paragraphs.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                            </section>
                        })
                    }
                </div>
            </div>
        </div>
    }
}
