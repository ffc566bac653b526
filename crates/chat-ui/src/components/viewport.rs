use std::rc::Rc;
use web_sys::Element;
use yew::NodeRef;

/// Scroll control for the transcript pane
pub trait Viewport {
    fn scroll_to_latest(&self);
}

/// Scrolls a DOM element to its bottom edge
#[derive(Clone, Default, PartialEq)]
pub struct ElementViewport {
    node: NodeRef,
}

impl ElementViewport {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl Viewport for ElementViewport {
    fn scroll_to_latest(&self) {
        if let Some(element) = self.node.cast::<Element>() {
            element.set_scroll_top(element.scroll_height());
        }
    }
}

/// Shared viewport that can be passed as a component property
#[derive(Clone)]
pub struct ViewportHandle(Rc<dyn Viewport>);

impl ViewportHandle {
    pub fn new(viewport: impl Viewport + 'static) -> Self {
        Self(Rc::new(viewport))
    }

    pub fn scroll_to_latest(&self) {
        self.0.scroll_to_latest();
    }
}

impl PartialEq for ViewportHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
