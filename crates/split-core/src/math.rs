use glam::Vec2;

#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

/// Component-wise [`lerp`]; kept scalar so each axis matches the 1-D form exactly.
#[inline]
pub fn lerp_vec(start: Vec2, end: Vec2, factor: f32) -> Vec2 {
    Vec2::new(lerp(start.x, end.x, factor), lerp(start.y, end.y, factor))
}

/// Uniformly scale `v` down so its length is at most `max`. Direction is preserved.
#[inline]
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    // f64 so the squared length cannot overflow for any finite f32 input.
    let wide = v.as_dvec2();
    let len = wide.length();
    if len > max as f64 && len > 0.0 {
        (wide * (max as f64 / len)).as_vec2()
    } else {
        v
    }
}

/// Replace non-finite components with 0.
#[inline]
pub fn finite_or_zero(v: Vec2) -> Vec2 {
    Vec2::new(
        if v.x.is_finite() { v.x } else { 0.0 },
        if v.y.is_finite() { v.y } else { 0.0 },
    )
}
