//! Limit specifications and the factory that turns them into accessors.
//!
//! A limit is configured as a string. Numeric strings are pixel offsets from
//! the viewport top, anything else names an element whose edge is the limit,
//! and an absent or blank value leaves that side unconstrained.

use crate::numeric::leading_number;
use dom::LayoutHost;
use log::debug;
use std::fmt;
use std::rc::Rc;

/// Resolved limit, re-evaluated on every call.
pub type LimitAccessor = Rc<dyn Fn() -> f64>;

/// Which edge of a referenced element bounds the sticky element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// The two limits of a sticky element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LimitRole {
    /// Lower bound for the element's top edge (e.g. below a header).
    Primary,
    /// Upper bound for the element's bottom edge (e.g. above a footer).
    Secondary,
}

impl LimitRole {
    /// Value reported when nothing constrains this side.
    pub const fn unbounded(self) -> f64 {
        match self {
            Self::Primary => f64::NEG_INFINITY,
            Self::Secondary => f64::INFINITY,
        }
    }

    /// Edge of a referenced element used when the reference has no suffix.
    pub const fn default_edge(self) -> Edge {
        match self {
            Self::Primary => Edge::Bottom,
            Self::Secondary => Edge::Top,
        }
    }
}

/// A parsed limit configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum LimitSpec {
    /// Fixed pixel offset from the viewport top.
    Numeric(f64),
    /// Edge of the element found by `target` (`#id`, `.class` or bare id).
    ElementEdge { edge: Edge, target: String },
    Unbounded,
}

impl LimitSpec {
    /// Parse a raw configuration value for the given role.
    ///
    /// An element reference may end in `:top` or `:bottom` to pick the edge
    /// explicitly; otherwise [`LimitRole::default_edge`] applies.
    pub fn parse(raw: Option<&str>, role: LimitRole) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::Unbounded;
        };
        if let Some(px) = leading_number(raw) {
            return Self::Numeric(px);
        }
        let (target, edge) = if let Some(target) = raw.strip_suffix(":top") {
            (target, Edge::Top)
        } else if let Some(target) = raw.strip_suffix(":bottom") {
            (target, Edge::Bottom)
        } else {
            (raw, role.default_edge())
        };
        Self::ElementEdge {
            edge,
            target: target.trim().to_owned(),
        }
    }

    /// Resolve this limit into an accessor reading live geometry from `host`.
    pub fn into_accessor(self, host: Rc<dyn LayoutHost>, role: LimitRole) -> LimitAccessor {
        match self {
            Self::Numeric(px) => Rc::new(move || px),
            Self::Unbounded => Rc::new(move || role.unbounded()),
            Self::ElementEdge { edge, target } => Rc::new(move || {
                let Some(node) = host.find(&target) else {
                    debug!("{role:?} limit target {target:?} not found, treating as unbounded");
                    return role.unbounded();
                };
                let rect = host.bounding_rect(node);
                match edge {
                    Edge::Top => rect.top(),
                    Edge::Bottom => rect.bottom(),
                }
            }),
        }
    }
}

impl fmt::Display for LimitSpec {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(px) => write!(formatter, "{px}px"),
            Self::ElementEdge { edge, target } => write!(formatter, "{target} ({edge:?} edge)"),
            Self::Unbounded => formatter.write_str("unbounded"),
        }
    }
}

/// Builds the limit accessors of a sticky element from raw configuration.
pub trait AccessorFactory {
    fn create_primary_limit_accessor(&self, config: Option<&str>) -> LimitAccessor;
    fn create_secondary_limit_accessor(&self, config: Option<&str>) -> LimitAccessor;
}

/// Default factory resolving element references through a layout host.
#[derive(Clone)]
pub struct DomAccessorFactory {
    host: Rc<dyn LayoutHost>,
}

impl DomAccessorFactory {
    pub fn new(host: Rc<dyn LayoutHost>) -> Self {
        Self { host }
    }

    fn create(&self, config: Option<&str>, role: LimitRole) -> LimitAccessor {
        let spec = LimitSpec::parse(config, role);
        debug!("{role:?} limit resolved to {spec}");
        spec.into_accessor(Rc::clone(&self.host), role)
    }
}

impl AccessorFactory for DomAccessorFactory {
    fn create_primary_limit_accessor(&self, config: Option<&str>) -> LimitAccessor {
        self.create(config, LimitRole::Primary)
    }

    fn create_secondary_limit_accessor(&self, config: Option<&str>) -> LimitAccessor {
        self.create(config, LimitRole::Secondary)
    }
}
