/// Transform properties written together so every engine sees the same value.
pub const TRANSFORM_PROPERTIES: [&str; 3] = ["-ms-transform", "-webkit-transform", "transform"];

/// Format a vertical-only 2-D translate, e.g. `translate(0px,10px)`.
pub fn translate_y(offset: i32) -> String {
    format!("translate(0px,{offset}px)")
}

/// Parse `translate(<x>px,<y>px)` into its `(x, y)` components.
///
/// Whitespace around the components is tolerated. Anything else, including
/// other transform functions, yields `None`.
pub fn parse_translate(value: &str) -> Option<(f64, f64)> {
    let inner = value
        .trim()
        .strip_prefix("translate(")?
        .strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    Some((parse_px(x)?, parse_px(y)?))
}

fn parse_px(component: &str) -> Option<f64> {
    let component = component.trim();
    let number = component.strip_suffix("px").unwrap_or(component);
    number.trim().parse::<f64>().ok().filter(|px| px.is_finite())
}
