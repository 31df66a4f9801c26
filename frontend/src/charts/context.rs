use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::charts::canvas::CanvasSurface;
use crate::charts::registry::ChartRegistry;

/// The page-wide chart registry, handed down through a yew context.
#[derive(Clone)]
pub struct ChartsContext(Rc<RefCell<ChartRegistry<CanvasSurface>>>);

impl ChartsContext {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(ChartRegistry::new(CanvasSurface))))
    }

    pub fn registry(&self) -> RefMut<'_, ChartRegistry<CanvasSurface>> {
        self.0.borrow_mut()
    }
}

impl Default for ChartsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ChartsContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
