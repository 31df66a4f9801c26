use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::nav::NAV_LINKS;
use crate::dom;
use crate::search::modal::SiteSearch;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    is_scrolled.set(dom::scroll_y() > 40.0);
                });

                let window = dom::window().ok();
                if let Some(window) = &window {
                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    {
                        warn!("navbar scroll listener not attached: {}", dom::DomError::from(err));
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-star">{"★"}</span>
                    {"MoreStars"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for NAV_LINKS.iter().filter(|link| link.href != "/").map(|link| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={Route::from_href(link.href)} classes="nav-link">
                                    { link.label }
                                </Link<Route>>
                            </div>
                        })
                    }
                    <SiteSearch />
                    <a href={config::signup_url()} class="nav-cta">
                        {"Start Free Trial"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 2rem;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.92);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(251, 191, 36, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    color: #fff;
                    font-size: 1.4rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-logo-star {
                    color: #FBBF24;
                    margin-right: 0.3rem;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #FBBF24;
                }
                .nav-cta {
                    background: #FBBF24;
                    color: #1a1a1a;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    font-weight: 600;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        background: rgba(26, 26, 26, 0.97);
                    }
                }
                "#}
            </style>
        </nav>
    }
}
