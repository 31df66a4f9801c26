use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::dom;

/// Fraction of the viewport an element's top must rise above before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.85;

pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

/// Next revealed state. Once shown an element stays shown, and a detached
/// node (`top` is `None`) changes nothing.
pub fn next_revealed(revealed: bool, top: Option<f64>, viewport_height: f64) -> bool {
    revealed || top.is_some_and(|top| should_reveal(top, viewport_height))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay_ms: u32,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed_handle = revealed.clone();
        // The listener is only needed until the first reveal.
        use_effect_with_deps(
            move |already: &bool| {
                let listener = if *already {
                    None
                } else {
                    let check = move || {
                        let top = node
                            .cast::<Element>()
                            .map(|element| element.get_bounding_client_rect().top());
                        if next_revealed(false, top, dom::viewport_height()) {
                            revealed_handle.set(true);
                        }
                    };
                    check();

                    let on_scroll = Closure::<dyn Fn()>::new(check);
                    match dom::window() {
                        Ok(window) => {
                            if let Err(err) = window
                                .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                            {
                                warn!("reveal listener not attached: {}", dom::DomError::from(err));
                            }
                            Some((window, on_scroll))
                        }
                        Err(err) => {
                            warn!("reveal listener not attached: {}", err);
                            None
                        }
                    }
                };

                move || {
                    if let Some((window, on_scroll)) = listener {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            *revealed,
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("revealed"))}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_top_enters_lower_viewport() {
        assert!(should_reveal(100.0, 800.0));
        assert!(should_reveal(679.0, 800.0));
        assert!(!should_reveal(680.0, 800.0));
        assert!(!should_reveal(1500.0, 800.0));
    }

    #[test]
    fn revealed_elements_stay_revealed() {
        assert!(next_revealed(false, Some(100.0), 800.0));
        assert!(next_revealed(true, Some(5000.0), 800.0));
        assert!(next_revealed(true, None, 800.0));
        assert!(!next_revealed(false, None, 800.0));
        assert!(!next_revealed(false, Some(700.0), 800.0));
    }
}
