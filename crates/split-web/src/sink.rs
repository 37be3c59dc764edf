use crate::style;
use glam::Vec2;
use split_core::ChannelSink;
use web_sys as web;

/// Writes channel offsets to a layer element's inline `transform`.
pub struct StyleSink {
    element: web::HtmlElement,
}

impl StyleSink {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl ChannelSink for StyleSink {
    fn translate(&mut self, offset: Vec2) {
        _ = self
            .element
            .style()
            .set_property("transform", &style::translate(offset.x, offset.y));
    }
}
