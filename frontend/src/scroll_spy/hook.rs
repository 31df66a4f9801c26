use std::cell::RefCell;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::scroll_spy::tracker::{DomLayout, ScrollSpy, Section};

pub struct ScrollSpyHandle {
    pub active_id: &'static str,
    pub on_select: Callback<&'static str>,
}

fn sync(spy: &RefCell<ScrollSpy>, active: &UseStateHandle<&'static str>) {
    let mut spy = spy.borrow_mut();
    if spy.refresh(&DomLayout) {
        active.set(spy.active_id());
    }
}

/// Tracks which of `sections` is under the sticky header. The scroll
/// listener lives exactly as long as the calling component.
#[hook]
pub fn use_scroll_spy(sections: &'static [Section], offset: f64, clearance: f64) -> ScrollSpyHandle {
    let spy = use_mut_ref(|| ScrollSpy::new(sections, offset, clearance));
    let active = {
        let spy = spy.clone();
        use_state(move || spy.borrow().active_id())
    };

    {
        let spy = spy.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                sync(&spy, &active);

                let on_scroll = Closure::<dyn Fn()>::new(move || sync(&spy, &active));
                let window = dom::window().ok();
                if let Some(window) = &window {
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    {
                        warn!("scroll spy listener not attached: {}", dom::DomError::from(err));
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    drop(on_scroll);
                }
            },
            (),
        );
    }

    let on_select = {
        let active = active.clone();
        Callback::from(move |id: &'static str| {
            let target = spy.borrow_mut().select(id, &DomLayout);
            if let Some(top) = target {
                active.set(id);
                if let Err(err) = dom::smooth_scroll_to(top) {
                    warn!("could not scroll to #{}: {}", id, err);
                }
            }
        })
    };

    ScrollSpyHandle { active_id: *active, on_select }
}

#[derive(Properties, PartialEq)]
pub struct TableOfContentsProps {
    pub sections: &'static [Section],
    pub active_id: &'static str,
    pub on_select: Callback<&'static str>,
    #[prop_or(AttrValue::Static("On this page"))]
    pub heading: AttrValue,
}

#[function_component(TableOfContents)]
pub fn table_of_contents(props: &TableOfContentsProps) -> Html {
    html! {
        <nav class="toc" aria-label="Table of contents">
            <h4 class="toc-heading">{ props.heading.clone() }</h4>
            <ul>
                {
                    for props.sections.iter().map(|section| {
                        let id = section.id;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(id);
                            })
                        };
                        html! {
                            <li key={id}>
                                <a
                                    href={format!("#{}", id)}
                                    class={classes!("toc-link", (id == props.active_id).then_some("active"))}
                                    {onclick}
                                >
                                    { section.icon.render() }
                                    <span>{ section.title }</span>
                                </a>
                            </li>
                        }
                    })
                }
            </ul>
            <style>
                {r#"
                .toc {
                    position: sticky;
                    top: 100px;
                    align-self: flex-start;
                    min-width: 220px;
                    padding: 1.25rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(251, 191, 36, 0.1);
                    border-radius: 12px;
                }
                .toc-heading {
                    color: #999;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                    letter-spacing: 0.05em;
                    margin: 0 0 1rem;
                }
                .toc ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .toc-link {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.4rem 0.6rem;
                    border-radius: 6px;
                    color: #bbb;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .toc-link:hover {
                    color: #fff;
                }
                .toc-link.active {
                    color: #FBBF24;
                    background: rgba(251, 191, 36, 0.1);
                }
                @media (max-width: 900px) {
                    .toc {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
