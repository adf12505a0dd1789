//! Breakpoint-driven enabled/disabled mode.

use crate::numeric::leading_integer;

/// Parse a breakpoint attribute. Values without a leading integer disable the
/// breakpoint entirely, which keeps stickiness always on.
pub fn parse_breakpoint(raw: Option<&str>) -> Option<f64> {
    raw.and_then(leading_integer)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StickyMode {
    Enabled,
    Disabled,
}

/// What has to happen when the mode is re-evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    /// Subscribe to viewport events and recompute immediately.
    Enable,
    /// Drop subscriptions and reset the synthetic offset to zero.
    Disable,
}

impl StickyMode {
    /// `Enabled` only while the viewport is wider than the breakpoint.
    pub fn for_width(width: f64, breakpoint: Option<f64>) -> Self {
        match breakpoint {
            Some(breakpoint) if width <= breakpoint => Self::Disabled,
            _ => Self::Enabled,
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    pub const fn transition_to(self, next: Self) -> Transition {
        match (self, next) {
            (Self::Disabled, Self::Enabled) => Transition::Enable,
            (Self::Enabled, Self::Disabled) => Transition::Disable,
            _ => Transition::Stay,
        }
    }
}
