// Inline CSS for the three image layers. Pure string helpers so they can be
// tested on the host.

pub const CONTAINER_CSS: &str =
    "position: relative; overflow: hidden; display: inline-block; width: 100%; height: 100%;";

pub const BASE_LAYER_CSS: &str = "display: block; width: 100%; height: 100%; object-fit: cover;";

pub const CHANNEL_LAYER_CSS: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
     object-fit: cover; pointer-events: none; mix-blend-mode: screen;";

pub const SVG_DEFS_CSS: &str = "position: absolute; width: 0; height: 0; pointer-events: none;";

/// Inline style with `base` first so caller-supplied declarations win.
#[inline]
pub fn merge_inline(base: &str, existing: Option<&str>) -> String {
    match existing.map(str::trim) {
        Some(css) if !css.is_empty() => format!("{} {}", base, css),
        _ => base.to_string(),
    }
}

/// `transform` value for a channel offset in CSS pixels.
#[inline]
pub fn translate(x: f32, y: f32) -> String {
    format!("translate({}px, {}px)", tidy(x), tidy(y))
}

/// `will-change` hint: only promote layers while the effect can move them.
#[inline]
pub fn will_change(disabled: bool) -> &'static str {
    if disabled {
        "auto"
    } else {
        "transform, filter"
    }
}

// Sub-hundredth pixel precision is invisible; also folds -0 into 0.
#[inline]
fn tidy(v: f32) -> f32 {
    if !v.is_finite() {
        return 0.0;
    }
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
