//! Element wrappers measured against the live layout.
//!
//! [`SimpleElement`] only reports geometry. [`StickyElement`] also carries the
//! synthetic vertical offset it renders with, so callers can ask where the
//! element would sit without it (its *pristine* position).

use crate::accessor::{AccessorFactory, LimitAccessor};
use dom::transform::{TRANSFORM_PROPERTIES, translate_y};
use dom::{LayoutHost, NodeKey};
use log::trace;
use std::fmt;
use std::rc::Rc;

/// Viewport-relative edges of a wrapped DOM node.
///
/// Every call re-queries the host; nothing is cached.
pub trait ElementGeometry {
    fn node(&self) -> NodeKey;
    fn host(&self) -> &Rc<dyn LayoutHost>;

    /// Distance of the top edge from the viewport top.
    fn top(&self) -> f64 {
        self.host().bounding_rect(self.node()).top()
    }

    /// Distance of the bottom edge from the viewport top.
    fn bottom(&self) -> f64 {
        self.host().bounding_rect(self.node()).bottom()
    }
}

#[derive(Clone)]
pub struct SimpleElement {
    node: NodeKey,
    host: Rc<dyn LayoutHost>,
}

impl SimpleElement {
    pub fn new(node: NodeKey, host: Rc<dyn LayoutHost>) -> Self {
        Self { node, host }
    }
}

impl ElementGeometry for SimpleElement {
    fn node(&self) -> NodeKey {
        self.node
    }

    fn host(&self) -> &Rc<dyn LayoutHost> {
        &self.host
    }
}

impl fmt::Debug for SimpleElement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SimpleElement")
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}

/// What the last update computed. Maintained by the update routine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UpdateState {
    pub last_primary: Option<f64>,
    pub last_secondary: Option<f64>,
    pub last_scroll_y: Option<f64>,
    /// Whether the last update displaced the element from normal flow.
    pub stuck: bool,
    pub updates: u64,
}

/// Construction input for [`StickyElement::new`].
#[derive(Debug, Clone)]
pub struct StickyOptions {
    pub element: SimpleElement,
    pub primary_limit: Option<String>,
    pub secondary_limit: Option<String>,
}

pub struct StickyElement {
    element: SimpleElement,
    pub state: UpdateState,
    synthetic_offset: i32,
    primary_limit: LimitAccessor,
    secondary_limit: LimitAccessor,
}

impl StickyElement {
    /// Wrap `options.element`, resolving both limit accessors once through
    /// `factory` with the raw configuration values.
    pub fn new(options: StickyOptions, factory: &dyn AccessorFactory) -> Self {
        let primary_limit = factory.create_primary_limit_accessor(options.primary_limit.as_deref());
        let secondary_limit =
            factory.create_secondary_limit_accessor(options.secondary_limit.as_deref());
        Self {
            element: options.element,
            state: UpdateState::default(),
            synthetic_offset: 0,
            primary_limit,
            secondary_limit,
        }
    }

    pub fn element(&self) -> &SimpleElement {
        &self.element
    }

    pub fn primary_limit(&self) -> f64 {
        (self.primary_limit)()
    }

    pub fn secondary_limit(&self) -> f64 {
        (self.secondary_limit)()
    }

    pub fn primary_limit_accessor(&self) -> &LimitAccessor {
        &self.primary_limit
    }

    pub fn secondary_limit_accessor(&self) -> &LimitAccessor {
        &self.secondary_limit
    }

    /// Currently applied vertical offset in pixels.
    pub fn synthetic_offset(&self) -> i32 {
        self.synthetic_offset
    }

    /// Store `offset` and render it as a translate on the wrapped node.
    pub fn set_synthetic_offset(&mut self, offset: i32) {
        self.synthetic_offset = offset;
        let value = translate_y(offset);
        let declarations = TRANSFORM_PROPERTIES.map(|property| (property, value.as_str()));
        trace!("{:?} offset -> {offset}", self.element.node);
        self.element.host.set_styles(self.element.node, &declarations);
    }

    /// Put the element back in normal flow and forget the last update.
    /// The update counter is kept.
    pub fn reset(&mut self) {
        self.set_synthetic_offset(0);
        self.state = UpdateState {
            updates: self.state.updates,
            ..UpdateState::default()
        };
    }

    /// Top edge as it would be with no synthetic offset.
    pub fn pristine_top(&self) -> f64 {
        self.top() - f64::from(self.synthetic_offset)
    }

    /// Bottom edge as it would be with no synthetic offset.
    pub fn pristine_bottom(&self) -> f64 {
        self.bottom() - f64::from(self.synthetic_offset)
    }
}

impl ElementGeometry for StickyElement {
    fn node(&self) -> NodeKey {
        self.element.node
    }

    fn host(&self) -> &Rc<dyn LayoutHost> {
        &self.element.host
    }
}

impl fmt::Debug for StickyElement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StickyElement")
            .field("element", &self.element)
            .field("state", &self.state)
            .field("synthetic_offset", &self.synthetic_offset)
            .finish_non_exhaustive()
    }
}
