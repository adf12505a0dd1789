//! DOM query surface shared by the sticky positioning subsystems.
//!
//! This crate centralizes the stable node keys, the DOM update model, and the
//! `LayoutHost` trait through which geometry is read and inline styles are
//! written. `HeadlessDom` is an in-memory host used by tests and tooling.

use anyhow::Result;

/// Id, tag and class lookups mirrored from DOM updates.
pub mod dom_index;
pub use dom_index::DomIndex;

/// In-memory layout host backed by an `indextree` arena.
pub mod headless;
pub use headless::HeadlessDom;

pub mod settings;
pub use settings::HostSettings;

/// `translate(...)` formatting and parsing for inline transforms.
pub mod transform;

// ============================
// Stable Node keys
// ============================

/// A 64-bit stable key for DOM nodes.
/// The default key is the document root.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

impl NodeKey {
    /// The root node key (always present).
    pub const ROOT: Self = Self(0);
}

// ============================
// Geometry
// ============================

/// A bounding box in CSS pixels.
///
/// When returned from [`LayoutHost::bounding_rect`] the box is relative to
/// the viewport's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Distance of the top edge from the origin.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Distance of the bottom edge from the origin.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Same box moved vertically by `delta`.
    #[inline]
    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self {
            y: self.y + delta,
            ..self
        }
    }
}

/// Width sources for the viewport, in the order they are consulted.
///
/// Some hosts report an `inner_width` of zero before the first layout; the
/// document and body client widths are used as fallbacks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub inner_width: Option<f64>,
    pub document_client_width: Option<f64>,
    pub body_client_width: Option<f64>,
    pub height: f64,
}

impl ViewportMetrics {
    /// Metrics where every width source agrees.
    pub const fn uniform(width: f64, height: f64) -> Self {
        Self {
            inner_width: Some(width),
            document_client_width: Some(width),
            body_client_width: Some(width),
            height,
        }
    }

    /// First width source that is present and non-zero, else `0.0`.
    pub fn effective_width(&self) -> f64 {
        [
            self.inner_width,
            self.document_client_width,
            self.body_client_width,
        ]
        .into_iter()
        .flatten()
        .find(|width| *width != 0.0)
        .unwrap_or(0.0)
    }
}

// ============================
// Host surface
// ============================

/// Everything the sticky subsystem needs from a rendering host.
///
/// All methods take `&self`; hosts that store state use interior mutability
/// so elements can share a host through `Rc<dyn LayoutHost>`.
pub trait LayoutHost {
    /// Current border box of `node` relative to the viewport.
    fn bounding_rect(&self, node: NodeKey) -> Rect;
    /// Current viewport metrics.
    fn viewport(&self) -> ViewportMetrics;
    /// Current vertical scroll position of the document.
    fn scroll_y(&self) -> f64;
    /// Write inline style declarations to `node` in a single batch.
    fn set_styles(&self, node: NodeKey, declarations: &[(&str, &str)]);
    /// Read an inline style declaration.
    fn style(&self, node: NodeKey, name: &str) -> Option<String>;
    /// Resolve an element reference (`#id`, `.class`, or a bare id).
    fn find(&self, target: &str) -> Option<NodeKey>;
}

// ============================
// DOM Update model
// ============================

/// A batchable update applied to a DOM mirror.
#[derive(Debug, Clone, PartialEq)]
pub enum DOMUpdate {
    InsertElement {
        parent: NodeKey,
        node: NodeKey,
        tag: String,
        pos: usize,
    },
    SetAttr {
        node: NodeKey,
        name: String,
        value: String,
    },
    /// Set the document-space layout box of a node.
    SetLayout { node: NodeKey, rect: Rect },
    RemoveNode { node: NodeKey },
    EndOfDocument,
}

/// A subscriber that receives DOMUpdate values and mirrors them into its own state.
pub trait DOMSubscriber {
    /// Apply a single DOMUpdate to the subscriber state.
    fn apply_update(&mut self, update: DOMUpdate) -> Result<()>;
}
