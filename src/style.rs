// CSS text for the ring, its cards and the scaled container.
// Pure string formatting so it can be checked on the host.

use ring_core::{Carousel, ItemEntrance, ItemTransform, RotationSink, HOVER_TRANSITION_SEC};

/// Inline style written to one card.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStyle {
    pub transform: String,
    pub transform_origin: String,
    pub opacity: String,
}

#[inline]
pub fn ring_transform(angle_deg: f64) -> String {
    format!("rotateY({:.3}deg)", angle_deg)
}

#[inline]
pub fn container_transform(scale: f64) -> String {
    format!("scale({:.3})", scale)
}

#[inline]
pub fn px(value: f64) -> String {
    format!("{:.3}px", value)
}

/// Translations first, then the slot rotation.
pub fn item_transform(t: &ItemTransform, entrance: &ItemEntrance) -> String {
    format!(
        "translateY({:.3}px) translateZ({:.3}px) rotateY({:.3}deg)",
        entrance.offset_y, t.translate_z, t.rotate_y_deg
    )
}

#[inline]
pub fn item_transform_origin(t: &ItemTransform) -> String {
    format!("50% 50% {:.3}px", t.origin_z)
}

#[inline]
pub fn opacity(value: f64) -> String {
    format!("{:.3}", value.clamp(0.0, 1.0))
}

#[inline]
pub fn hover_transition() -> String {
    format!("opacity {}s", HOVER_TRANSITION_SEC)
}

pub fn background_image(url: &str) -> String {
    let escaped = url.replace('\\', "\\\\").replace('"', "\\\"");
    format!("url(\"{}\")", escaped)
}

pub fn item_style<S: RotationSink>(carousel: &Carousel<S>, index: usize) -> ItemStyle {
    let t = carousel.item_transform(index);
    let entrance = carousel.item_entrance(index);
    ItemStyle {
        transform: item_transform(&t, &entrance),
        transform_origin: item_transform_origin(&t),
        opacity: opacity(carousel.item_opacity(index)),
    }
}
