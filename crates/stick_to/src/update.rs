use crate::element::{ElementGeometry, StickyElement};
use log::debug;

/// Offset that keeps an element between its limits.
///
/// The element is pushed down until its top reaches `primary`, but never so
/// far that its bottom passes `secondary`, and never above its normal-flow
/// position. Non-finite intermediate values collapse to `0`.
pub fn compute_offset(
    pristine_top: f64,
    pristine_bottom: f64,
    primary: f64,
    secondary: f64,
) -> i32 {
    let raw = primary - pristine_top;
    let capped = raw.min(secondary - pristine_bottom);
    let offset = capped.max(0.0);
    if offset.is_finite() {
        offset.round() as i32
    } else {
        0
    }
}

/// Recompute and apply the synthetic offset of `sticky` for the current
/// scroll position. Returns the offset now applied.
pub fn update_element(sticky: &mut StickyElement) -> i32 {
    let scroll_y = sticky.element().host().scroll_y();
    let primary = sticky.primary_limit();
    let secondary = sticky.secondary_limit();
    let offset = compute_offset(
        sticky.pristine_top(),
        sticky.pristine_bottom(),
        primary,
        secondary,
    );

    sticky.state.last_primary = Some(primary);
    sticky.state.last_secondary = Some(secondary);
    sticky.state.last_scroll_y = Some(scroll_y);
    sticky.state.stuck = offset != 0;
    sticky.state.updates += 1;

    if offset != sticky.synthetic_offset() {
        debug!(
            "sticky offset {} -> {offset} (scroll {scroll_y}, limits {primary}..{secondary})",
            sticky.synthetic_offset()
        );
        sticky.set_synthetic_offset(offset);
    }
    offset
}
