use crate::constants::{FILTER_ID_PREFIX, SVG_NS};
use crate::style;
use anyhow::{anyhow, Result};
use split_core::{filter_css, filter_id, matrix_values, ColorSpace, Layer};
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

static NEXT_FILTER_ID: AtomicU32 = AtomicU32::new(0);

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// The elements making up one split image: the container, the hidden SVG
/// holding the colour filters, and the three image layers.
pub struct Layers {
    pub container: web::HtmlElement,
    pub svg: web::Element,
    pub base: web::HtmlImageElement,
    pub red: web::HtmlImageElement,
    pub green: web::HtmlImageElement,
    filter_id: String,
    // feColorMatrix per layer, in `Layer::ALL` order
    matrices: [web::Element; 3],
    // Container `style` attribute before we touched it
    original_style: Option<String>,
}

impl Layers {
    pub fn build(
        container: web::HtmlElement,
        src: &str,
        alt: &str,
        space: ColorSpace,
        grayscale: bool,
    ) -> Result<Self> {
        let document = container
            .owner_document()
            .or_else(window_document)
            .ok_or_else(|| anyhow!("no document"))?;
        let base_id = format!(
            "{}-{}",
            FILTER_ID_PREFIX,
            NEXT_FILTER_ID.fetch_add(1, Ordering::Relaxed)
        );

        let original_style = append_css(&container, style::CONTAINER_CSS)?;

        let svg = document.create_element_ns(Some(SVG_NS), "svg").map_err(js_err)?;
        svg.set_attribute("style", style::SVG_DEFS_CSS).map_err(js_err)?;
        svg.set_attribute("aria-hidden", "true").map_err(js_err)?;
        let defs = document.create_element_ns(Some(SVG_NS), "defs").map_err(js_err)?;
        svg.append_child(&defs).map_err(js_err)?;

        let mut matrices = Vec::with_capacity(3);
        for layer in Layer::ALL {
            let filter = document.create_element_ns(Some(SVG_NS), "filter").map_err(js_err)?;
            filter
                .set_attribute("id", &filter_id(&base_id, layer))
                .map_err(js_err)?;
            filter
                .set_attribute("color-interpolation-filters", "sRGB")
                .map_err(js_err)?;
            let matrix = document
                .create_element_ns(Some(SVG_NS), "feColorMatrix")
                .map_err(js_err)?;
            matrix.set_attribute("type", "matrix").map_err(js_err)?;
            matrix
                .set_attribute("values", &matrix_values(space, layer))
                .map_err(js_err)?;
            filter.append_child(&matrix).map_err(js_err)?;
            defs.append_child(&filter).map_err(js_err)?;
            matrices.push(matrix);
        }
        let matrices: [web::Element; 3] = matrices
            .try_into()
            .map_err(|_| anyhow!("expected three colour matrices"))?;

        let base = create_image(&document, src, alt, style::BASE_LAYER_CSS)?;
        let red = create_image(&document, src, "", style::CHANNEL_LAYER_CSS)?;
        let green = create_image(&document, src, "", style::CHANNEL_LAYER_CSS)?;
        for channel in [&red, &green] {
            channel.set_attribute("aria-hidden", "true").map_err(js_err)?;
        }

        container.append_child(&svg).map_err(js_err)?;
        container.append_child(&base).map_err(js_err)?;
        container.append_child(&red).map_err(js_err)?;
        container.append_child(&green).map_err(js_err)?;

        let layers = Self {
            container,
            svg,
            base,
            red,
            green,
            filter_id: base_id,
            matrices,
            original_style,
        };
        layers.set_grayscale(grayscale);
        layers.set_will_change(false);
        log::info!("[dom] built split image layers #{}", layers.filter_id);
        Ok(layers)
    }

    fn image(&self, layer: Layer) -> &web::HtmlImageElement {
        match layer {
            Layer::Red => &self.red,
            Layer::Green => &self.green,
            Layer::Base => &self.base,
        }
    }

    pub fn set_color_space(&self, space: ColorSpace) {
        for (layer, matrix) in Layer::ALL.into_iter().zip(&self.matrices) {
            _ = matrix.set_attribute("values", &matrix_values(space, layer));
        }
    }

    pub fn set_grayscale(&self, grayscale: bool) {
        for layer in Layer::ALL {
            let css = filter_css(grayscale, &filter_id(&self.filter_id, layer));
            _ = self.image(layer).style().set_property("filter", &css);
        }
    }

    pub fn set_will_change(&self, disabled: bool) {
        for layer in Layer::ALL {
            _ = self
                .image(layer)
                .style()
                .set_property("will-change", style::will_change(disabled));
        }
    }

    pub fn channel_elements(&self) -> (web::HtmlElement, web::HtmlElement) {
        (
            self.red.clone().unchecked_into(),
            self.green.clone().unchecked_into(),
        )
    }

    /// Detach the generated markup and give the container back its own style.
    pub fn remove(&self) {
        self.svg.remove();
        self.base.remove();
        self.red.remove();
        self.green.remove();
        _ = match &self.original_style {
            Some(css) => self.container.set_attribute("style", css),
            None => self.container.remove_attribute("style"),
        };
    }
}

fn create_image(
    document: &web::Document,
    src: &str,
    alt: &str,
    css: &str,
) -> Result<web::HtmlImageElement> {
    let img: web::HtmlImageElement = document
        .create_element("img")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    img.set_src(src);
    img.set_alt(alt);
    img.set_attribute("style", css).map_err(js_err)?;
    Ok(img)
}

/// Prepend `css` to the element's inline style; returns the style it replaced.
fn append_css(el: &web::HtmlElement, css: &str) -> Result<Option<String>> {
    let existing = el.get_attribute("style");
    let merged = style::merge_inline(css, existing.as_deref());
    el.set_attribute("style", &merged).map_err(js_err)?;
    Ok(existing)
}
