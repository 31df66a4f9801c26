use log::{debug, warn};
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::dom::{navigate_external, ScrollLock};
use crate::search::index::{build_corpus, SearchItem, SearchOutcome};
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    Open,
    Close,
}

/// Cmd+K / Ctrl+K opens the search dialog from anywhere, Escape closes it.
pub fn shortcut_action(key: &str, meta: bool, ctrl: bool) -> Option<ShortcutAction> {
    if (meta || ctrl) && key.eq_ignore_ascii_case("k") {
        Some(ShortcutAction::Open)
    } else if key == "Escape" {
        Some(ShortcutAction::Close)
    } else {
        None
    }
}

/// Dialog visibility and query after `action`. Closing forgets the query no
/// matter how the dialog was dismissed.
pub fn dialog_after(action: ShortcutAction, query: &str) -> (bool, String) {
    match action {
        ShortcutAction::Open => (true, query.to_string()),
        ShortcutAction::Close => (false, String::new()),
    }
}

#[function_component(SiteSearch)]
pub fn site_search() -> Html {
    let corpus = use_memo(|_| build_corpus(), ());
    let is_open = use_state(|| false);
    let query = use_state(String::new);
    let input_ref = use_node_ref();
    let navigator = use_navigator();

    // Focus the input and hold the page still while the dialog is up. The
    // lock is dropped by the effect destructor, which also runs on unmount.
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let lock = if *open {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                    match ScrollLock::acquire() {
                        Ok(lock) => Some(lock),
                        Err(err) => {
                            warn!("search opened without scroll lock: {}", err);
                            None
                        }
                    }
                } else {
                    None
                };
                move || drop(lock)
            },
            *is_open,
        );
    }

    let transition = {
        let is_open = is_open.clone();
        let query = query.clone();
        Callback::from(move |action: ShortcutAction| {
            let (open, next_query) = dialog_after(action, &query);
            is_open.set(open);
            query.set(next_query);
        })
    };

    let open = {
        let transition = transition.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            transition.emit(ShortcutAction::Open);
        })
    };

    let close = {
        let transition = transition.clone();
        Callback::from(move |_: ()| transition.emit(ShortcutAction::Close))
    };

    {
        let transition = transition.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = shortcut_action(&e.key(), e.meta_key(), e.ctrl_key()) {
                if action == ShortcutAction::Open {
                    e.prevent_default();
                }
                transition.emit(action);
            }
        });
    }

    let select = {
        let close = close.clone();
        Callback::from(move |href: String| {
            debug!("search selected {}", href);
            match (Route::from_href(&href), &navigator) {
                (Route::NotFound, _) | (_, None) => navigate_external(&href),
                (route, Some(navigator)) => navigator.push(&route),
            }
            close.emit(());
        })
    };

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let outcome = SearchOutcome::evaluate(corpus.as_slice(), &query);

    let onkeydown = {
        let select = select.clone();
        let first = match &outcome {
            SearchOutcome::Matches(items) => items.first().map(|item| item.href.clone()),
            _ => None,
        };
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                if let Some(href) = first.clone() {
                    e.prevent_default();
                    select.emit(href);
                }
            }
        })
    };

    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let body = match &outcome {
        SearchOutcome::Matches(items) => html! {
            <ul class="search-results">
                { for items.iter().map(|item| render_result(item, &select)) }
            </ul>
        },
        _ => html! {
            <p class="search-empty">{ outcome.message(&query).unwrap_or_default() }</p>
        },
    };

    html! {
        <>
            <button class="search-trigger" onclick={open} aria-label="Search the site">
                <span>{"Search"}</span>
                <kbd>{"⌘K"}</kbd>
            </button>
            {
                if *is_open {
                    html! {
                        <div class="search-backdrop" onclick={on_backdrop}>
                            <div
                                class="search-dialog"
                                role="dialog"
                                aria-modal="true"
                                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                            >
                                <input
                                    ref={input_ref}
                                    class="search-input"
                                    type="search"
                                    placeholder="Search pages, industries, articles..."
                                    value={(*query).clone()}
                                    {oninput}
                                    {onkeydown}
                                />
                                { body }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .search-trigger {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(251, 191, 36, 0.2);
                    border-radius: 8px;
                    color: #ccc;
                    padding: 0.4rem 0.8rem;
                    cursor: pointer;
                }
                .search-trigger kbd {
                    font-size: 0.75rem;
                    color: #888;
                }
                .search-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(4px);
                    display: flex;
                    justify-content: center;
                    align-items: flex-start;
                    padding-top: 12vh;
                    z-index: 1000;
                }
                .search-dialog {
                    width: min(600px, 92vw);
                    background: #1a1a1a;
                    border: 1px solid rgba(251, 191, 36, 0.2);
                    border-radius: 12px;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.4);
                    overflow: hidden;
                }
                .search-input {
                    width: 100%;
                    padding: 1rem 1.25rem;
                    background: transparent;
                    border: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    color: #fff;
                    font-size: 1.1rem;
                    outline: none;
                }
                .search-results {
                    list-style: none;
                    margin: 0;
                    padding: 0.5rem;
                    max-height: 60vh;
                    overflow-y: auto;
                }
                .search-result {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    width: 100%;
                    padding: 0.6rem 0.75rem;
                    background: none;
                    border: none;
                    border-radius: 8px;
                    color: #eee;
                    text-align: left;
                    cursor: pointer;
                }
                .search-result:hover {
                    background: rgba(251, 191, 36, 0.1);
                }
                .search-result-kind {
                    margin-left: auto;
                    font-size: 0.75rem;
                    color: #999;
                }
                .search-empty {
                    padding: 1.5rem;
                    color: #999;
                    text-align: center;
                }
                "#}
            </style>
        </>
    }
}

fn render_result(item: &SearchItem, select: &Callback<String>) -> Html {
    let onclick = {
        let select = select.clone();
        let href = item.href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            select.emit(href.clone());
        })
    };
    html! {
        <li key={item.href.clone() + &item.name}>
            <button class="search-result" {onclick}>
                { item.icon.render() }
                <span class="search-result-name">{ item.name.clone() }</span>
                <span class="search-result-kind">{ item.kind.label() }</span>
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_or_control_k_opens() {
        assert_eq!(shortcut_action("k", true, false), Some(ShortcutAction::Open));
        assert_eq!(shortcut_action("K", false, true), Some(ShortcutAction::Open));
    }

    #[test]
    fn plain_k_does_nothing() {
        assert_eq!(shortcut_action("k", false, false), None);
        assert_eq!(shortcut_action("j", true, false), None);
    }

    #[test]
    fn escape_closes() {
        assert_eq!(shortcut_action("Escape", false, false), Some(ShortcutAction::Close));
    }

    #[test]
    fn every_close_forgets_the_query() {
        let (open, query) = dialog_after(ShortcutAction::Open, "");
        assert!(open);
        assert_eq!(query, "");

        let (open, query) = dialog_after(ShortcutAction::Close, "hvac");
        assert!(!open);
        assert_eq!(query, "");

        let (open, query) = dialog_after(ShortcutAction::Open, "hvac");
        assert!(open);
        assert_eq!(query, "hvac");
    }
}
