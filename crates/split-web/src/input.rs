use split_core::Rect;
use web_sys as web;

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn bounding_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}
