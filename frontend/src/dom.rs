use log::warn;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{id}` is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

pub fn typed_element_by_id<T: JsCast>(id: &str, expected: &'static str) -> Result<T, DomError> {
    element_by_id(id)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElement { id: id.to_string(), expected })
}

/// Current vertical scroll, 0 when there is no window.
pub fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .ok()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Distance from the top of the document to the element's top edge.
pub fn absolute_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Full page load for destinations the router does not own.
pub fn navigate_external(href: &str) {
    let result = window().and_then(|w| w.location().set_href(href).map_err(DomError::from));
    if let Err(err) = result {
        warn!("could not navigate to {}: {}", href, err);
    }
}

/// What to do with an element's `overflow` when a [`ScrollLock`] is released.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverflowRestore {
    /// There was no inline value before the lock, so the property is removed.
    Remove,
    Set(String),
}

impl OverflowRestore {
    pub fn from_previous(previous: &str) -> Self {
        if previous.is_empty() {
            OverflowRestore::Remove
        } else {
            OverflowRestore::Set(previous.to_string())
        }
    }
}

/// Inline `overflow` access on whatever a [`ScrollLock`] freezes.
pub trait OverflowStyle {
    fn overflow(&self) -> Result<String, DomError>;
    fn set_overflow(&self, value: &str) -> Result<(), DomError>;
    fn clear_overflow(&self) -> Result<(), DomError>;
}

impl OverflowStyle for HtmlElement {
    fn overflow(&self) -> Result<String, DomError> {
        Ok(self.style().get_property_value("overflow")?)
    }

    fn set_overflow(&self, value: &str) -> Result<(), DomError> {
        Ok(self.style().set_property("overflow", value)?)
    }

    fn clear_overflow(&self) -> Result<(), DomError> {
        self.style().remove_property("overflow")?;
        Ok(())
    }
}

/// Disables page scroll until dropped.
///
/// The previous `overflow` value is restored on drop, so every way of
/// discarding the guard (closing a dialog, unmounting its component) gives
/// the page its scrollbar back.
pub struct ScrollLock<S: OverflowStyle = HtmlElement> {
    target: S,
    restore: OverflowRestore,
}

impl ScrollLock<HtmlElement> {
    /// Locks the document body.
    pub fn acquire() -> Result<Self, DomError> {
        Self::lock(body()?)
    }
}

impl<S: OverflowStyle> ScrollLock<S> {
    pub fn lock(target: S) -> Result<Self, DomError> {
        let restore = OverflowRestore::from_previous(&target.overflow()?);
        target.set_overflow("hidden")?;
        Ok(Self { target, restore })
    }
}

impl<S: OverflowStyle> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        let result = match &self.restore {
            OverflowRestore::Remove => self.target.clear_overflow(),
            OverflowRestore::Set(previous) => self.target.set_overflow(previous),
        };
        if let Err(err) = result {
            warn!("failed to restore body scroll: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Inline style stand-in; `None` means the property is not set.
    #[derive(Clone, Default)]
    struct FakeStyle(Rc<RefCell<Option<String>>>);

    impl FakeStyle {
        fn with(value: &str) -> Self {
            Self(Rc::new(RefCell::new(Some(value.to_string()))))
        }

        fn current(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl OverflowStyle for FakeStyle {
        fn overflow(&self) -> Result<String, DomError> {
            Ok(self.current().unwrap_or_default())
        }

        fn set_overflow(&self, value: &str) -> Result<(), DomError> {
            *self.0.borrow_mut() = Some(value.to_string());
            Ok(())
        }

        fn clear_overflow(&self) -> Result<(), DomError> {
            *self.0.borrow_mut() = None;
            Ok(())
        }
    }

    #[test]
    fn restore_removes_when_nothing_was_set() {
        assert_eq!(OverflowRestore::from_previous(""), OverflowRestore::Remove);
        assert_eq!(OverflowRestore::from_previous("auto"), OverflowRestore::Set("auto".into()));
    }

    #[test]
    fn lock_hides_overflow_and_drop_removes_it() {
        let style = FakeStyle::default();
        let lock = ScrollLock::lock(style.clone()).expect("lock");
        assert_eq!(style.current().as_deref(), Some("hidden"));
        drop(lock);
        assert_eq!(style.current(), None);
    }

    #[test]
    fn drop_puts_back_the_previous_value() {
        let style = FakeStyle::with("scroll");
        {
            let _lock = ScrollLock::lock(style.clone()).expect("lock");
            assert_eq!(style.current().as_deref(), Some("hidden"));
        }
        assert_eq!(style.current().as_deref(), Some("scroll"));
    }

    #[test]
    fn teardown_of_a_held_lock_restores_scroll() {
        // The search dialog keeps its lock in an effect destructor closure.
        let style = FakeStyle::with("auto");
        let held = Some(ScrollLock::lock(style.clone()).expect("lock"));
        let teardown = move || drop(held);
        assert_eq!(style.current().as_deref(), Some("hidden"));
        teardown();
        assert_eq!(style.current().as_deref(), Some("auto"));
    }
}
