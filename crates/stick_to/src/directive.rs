//! Wires a sticky element to viewport events.
//!
//! `StickTo` owns one sticky element for the lifetime of its host node. It is
//! driven entirely by [`StickTo::handle`]; the caller forwards scroll, resize
//! and rendering-settled notifications and decides when to [`StickTo::destroy`].

use crate::accessor::AccessorFactory;
use crate::config::StickToConfig;
use crate::element::{SimpleElement, StickyElement, StickyOptions};
use crate::mode::{StickyMode, Transition};
use crate::registry::{SharedSticky, StickyRegistry};
use crate::update::update_element;
use dom::{LayoutHost, NodeKey};
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;

/// Viewport notifications a mounted sticky element reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    Scroll,
    Resize,
    /// Layout has settled after a render pass.
    RenderingSettled,
}

/// Viewport events currently bound to the update routine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Subscriptions {
    pub scroll: bool,
    pub resize: bool,
    pub rendering_settled: bool,
}

impl Subscriptions {
    pub const ALL: Self = Self {
        scroll: true,
        resize: true,
        rendering_settled: true,
    };

    pub const fn is_bound(self, event: ViewportEvent) -> bool {
        match event {
            ViewportEvent::Scroll => self.scroll,
            ViewportEvent::Resize => self.resize,
            ViewportEvent::RenderingSettled => self.rendering_settled,
        }
    }

    pub const fn is_empty(self) -> bool {
        !(self.scroll || self.resize || self.rendering_settled)
    }
}

pub struct StickTo {
    sticky: SharedSticky,
    host: Rc<dyn LayoutHost>,
    name: Option<String>,
    breakpoint: Option<f64>,
    mode: StickyMode,
    subscriptions: Subscriptions,
}

impl StickTo {
    /// Build the sticky element for `node`, register it under the configured
    /// name and subscribe if the viewport is wider than the breakpoint.
    ///
    /// No offset is computed here; the first `RenderingSettled` event does it.
    pub fn mount(
        config: &StickToConfig,
        node: NodeKey,
        host: Rc<dyn LayoutHost>,
        factory: &dyn AccessorFactory,
        registry: &mut StickyRegistry,
    ) -> Self {
        let options = StickyOptions {
            element: SimpleElement::new(node, Rc::clone(&host)),
            primary_limit: config.primary_limit.clone(),
            secondary_limit: config.secondary_limit.clone(),
        };
        let sticky = Rc::new(RefCell::new(StickyElement::new(options, factory)));
        let name = config.registry_name().map(str::to_owned);
        if let Some(name) = &name {
            registry.insert(name.clone(), Rc::clone(&sticky));
        }

        let breakpoint = config.breakpoint_px();
        let mode = StickyMode::for_width(host.viewport().effective_width(), breakpoint);
        let subscriptions = if mode.is_enabled() {
            Subscriptions::ALL
        } else {
            Subscriptions::default()
        };
        info!("mounted sticky {node:?} (name {name:?}, breakpoint {breakpoint:?}, {mode:?})");

        Self {
            sticky,
            host,
            name,
            breakpoint,
            mode,
            subscriptions,
        }
    }

    /// React to a viewport notification.
    ///
    /// Resize always re-checks the breakpoint first, so a resize that enables
    /// stickiness recomputes immediately and one that disables it resets the
    /// offset to zero without recomputing.
    pub fn handle(&mut self, event: ViewportEvent) {
        if event == ViewportEvent::Resize && self.apply_breakpoint() == Transition::Enable {
            return;
        }
        if self.subscriptions.is_bound(event) {
            self.update();
        }
    }

    /// Re-evaluate the breakpoint against the current viewport width.
    pub fn apply_breakpoint(&mut self) -> Transition {
        let width = self.host.viewport().effective_width();
        let next = StickyMode::for_width(width, self.breakpoint);
        let transition = self.mode.transition_to(next);
        match transition {
            Transition::Stay => {}
            Transition::Enable => {
                info!("viewport {width}px above breakpoint, enabling sticky");
                self.subscriptions = Subscriptions::ALL;
                self.update();
            }
            Transition::Disable => {
                info!("viewport {width}px at or below breakpoint, disabling sticky");
                self.subscriptions = Subscriptions::default();
                self.sticky.borrow_mut().reset();
            }
        }
        self.mode = next;
        transition
    }

    fn update(&self) {
        let offset = update_element(&mut self.sticky.borrow_mut());
        debug!("sticky {:?} updated, offset {offset}", self.name);
    }

    /// Tear down: subscriptions go with `self`, and the registry entry is
    /// removed if it still refers to this element.
    pub fn destroy(self, registry: &mut StickyRegistry) {
        if let Some(name) = &self.name {
            registry.remove_if_same(name, &self.sticky);
        }
        info!("destroyed sticky {:?}", self.name);
    }

    pub fn sticky(&self) -> &SharedSticky {
        &self.sticky
    }

    pub const fn mode(&self) -> StickyMode {
        self.mode
    }

    pub const fn subscriptions(&self) -> Subscriptions {
        self.subscriptions
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
