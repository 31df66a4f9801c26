use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    #[prop_or_default]
    pub initially_open: bool,
    pub children: Children,
}

/// Turns a question into an id for `aria-controls`.
pub fn answer_id(question: &str) -> String {
    let slug: Vec<String> = question
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    format!("faq-{}", slug.join("-"))
}

/// Collapsible question and answer.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let expanded = use_state(|| props.initially_open);
    let panel_id = answer_id(&props.question);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expanded.set(!*expanded);
        })
    };

    html! {
        <div class={classes!("faq-item", (*expanded).then_some("open"))}>
            <button
                class="faq-question"
                onclick={on_toggle}
                aria-expanded={expanded.to_string()}
                aria-controls={panel_id.clone()}
            >
                <span class="question-text">{ props.question.clone() }</span>
                <span class="toggle-icon">{ if *expanded { "−" } else { "+" } }</span>
            </button>
            <div id={panel_id} class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_ids_are_slugged() {
        assert_eq!(answer_id("How long does setup take?"), "faq-how-long-does-setup-take");
        assert_eq!(answer_id("Is it TCPA-compliant?"), "faq-is-it-tcpa-compliant");
    }
}
