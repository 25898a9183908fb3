use crate::constants::*;
use crate::dom;
use crate::style::{self, ItemStyle};
use ring_core::{Cursor, RotationSink, SliderOptions};
use web_sys as web;

/// The ring's DOM: container > stage (perspective) > ring > cards.
///
/// Acts as the carousel's rotation sink, so every angle change lands on the
/// ring element in the same update that produced it.
pub struct DomRenderer {
    pub container: web::HtmlElement,
    pub ring: web::HtmlElement,
    pub items: Vec<web::HtmlElement>,
    transition_applied: bool,
}

impl DomRenderer {
    pub fn build(
        document: &web::Document,
        host: &web::Element,
        options: &SliderOptions,
    ) -> anyhow::Result<Self> {
        let container = dom::create_div(document, CONTAINER_CLASS)?;
        let width_pct = format!("{}%", CONTAINER_WIDTH_PCT);
        let height_pct = format!("{}%", CONTAINER_HEIGHT_PCT);
        dom::set_styles(
            &container,
            &[
                ("width", width_pct.as_str()),
                ("height", height_pct.as_str()),
                ("overflow", "hidden"),
                ("user-select", "none"),
                ("position", "relative"),
                ("transform-origin", "center center"),
                ("transform", style::container_transform(1.0).as_str()),
            ],
        );
        if let Some(color) = &options.background_color {
            dom::set_styles(&container, &[("background-color", color.as_str())]);
        }

        let stage = dom::create_div(document, STAGE_CLASS)?;
        let width = style::px(options.width);
        let height = style::px(options.height());
        dom::set_styles(
            &stage,
            &[
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("position", "absolute"),
                ("left", "50%"),
                ("top", "50%"),
                ("transform", "translate(-50%, -50%)"),
            ],
        );
        if let Some(p) = options.perspective {
            dom::set_styles(&stage, &[("perspective", style::px(p).as_str())]);
        }

        let ring = dom::create_div(document, RING_CLASS)?;
        let cursor = if options.draggable {
            Cursor::Grab
        } else {
            Cursor::Default
        };
        dom::set_styles(
            &ring,
            &[
                ("width", "100%"),
                ("height", "100%"),
                ("position", "absolute"),
                ("transform-style", "preserve-3d"),
                ("cursor", cursor.css()),
            ],
        );

        let radius = style::px(ITEM_BORDER_RADIUS_PX);
        let mut items = Vec::with_capacity(options.images.len());
        for url in &options.images {
            let item = dom::create_div(document, ITEM_CLASS)?;
            dom::set_styles(
                &item,
                &[
                    ("width", "100%"),
                    ("height", "100%"),
                    ("position", "absolute"),
                    ("border", ITEM_BORDER),
                    ("border-radius", radius.as_str()),
                    ("transform-style", "preserve-3d"),
                    ("background-image", style::background_image(url).as_str()),
                    ("background-size", "cover"),
                    ("background-repeat", "no-repeat"),
                    ("background-position", "center center"),
                    ("backface-visibility", "hidden"),
                    ("opacity", "0"),
                ],
            );
            dom::append(&ring, &item)?;
            items.push(item);
        }

        dom::append(&stage, &ring)?;
        dom::append(&container, &stage)?;
        dom::append(host, &container)?;
        log::info!("[render] built ring with {} cards", items.len());

        Ok(Self {
            container,
            ring,
            items,
            transition_applied: false,
        })
    }

    pub fn set_cursor(&self, cursor: Cursor) {
        dom::set_styles(&self.ring, &[("cursor", cursor.css())]);
    }

    pub fn set_scale(&self, scale: f64) {
        dom::set_styles(
            &self.container,
            &[("transform", style::container_transform(scale).as_str())],
        );
    }

    /// Write per-card styles. The hover fade transition is only switched on
    /// once the entrance is over, so it does not lag the entrance fade.
    pub fn apply_items(&mut self, styles: &[ItemStyle], entrance_finished: bool) {
        let add_transition = entrance_finished && !self.transition_applied;
        let transition = style::hover_transition();
        for (item, s) in self.items.iter().zip(styles) {
            dom::set_styles(
                item,
                &[
                    ("transform", s.transform.as_str()),
                    ("transform-origin", s.transform_origin.as_str()),
                    ("opacity", s.opacity.as_str()),
                ],
            );
            if add_transition {
                dom::set_styles(item, &[("transition", transition.as_str())]);
            }
        }
        self.transition_applied |= add_transition;
    }

    pub fn remove(&self) {
        self.container.remove();
    }
}

impl RotationSink for DomRenderer {
    fn publish(&mut self, angle_deg: f64) {
        let transform = style::ring_transform(angle_deg);
        dom::set_styles(&self.ring, &[("transform", transform.as_str())]);
    }
}
