//! Sticky positioning for DOM elements.
//!
//! A sticky element is rendered with a synthetic vertical offset (a
//! `translate`) that keeps it between a primary limit (e.g. below a header)
//! and a secondary limit (e.g. above a footer) while the viewport scrolls.
//! Below a configurable viewport width the element falls back to normal
//! layout.

pub mod accessor;
pub mod config;
/// Event wiring for a single mounted sticky element.
pub mod directive;
pub mod element;
pub mod mode;
mod numeric;
pub mod registry;
/// Offset computation run on every scroll, resize and settled render.
pub mod update;

pub use accessor::{AccessorFactory, DomAccessorFactory, Edge, LimitAccessor, LimitRole, LimitSpec};
pub use config::StickToConfig;
pub use directive::{StickTo, Subscriptions, ViewportEvent};
pub use element::{ElementGeometry, SimpleElement, StickyElement, StickyOptions, UpdateState};
pub use mode::{StickyMode, Transition, parse_breakpoint};
pub use registry::{SharedSticky, StickyRegistry};
pub use update::{compute_offset, update_element};
