// Reads ring options from `data-*` attributes of the host element.

use anyhow::{Context, Result};
use ring_core::{Easing, SliderOptions};

pub const ATTR_IMAGES: &str = "data-images";
pub const ATTR_WIDTH: &str = "data-width";
pub const ATTR_PERSPECTIVE: &str = "data-perspective";
pub const ATTR_IMAGE_DISTANCE: &str = "data-image-distance";
pub const ATTR_INITIAL_ROTATION: &str = "data-initial-rotation";
pub const ATTR_ANIMATION_DURATION: &str = "data-animation-duration";
pub const ATTR_STAGGER_DELAY: &str = "data-stagger-delay";
pub const ATTR_HOVER_OPACITY: &str = "data-hover-opacity";
pub const ATTR_BACKGROUND_COLOR: &str = "data-background-color";
pub const ATTR_DRAGGABLE: &str = "data-draggable";
pub const ATTR_EASE: &str = "data-ease";
pub const ATTR_MOBILE_BREAKPOINT: &str = "data-mobile-breakpoint";
pub const ATTR_MOBILE_SCALE_FACTOR: &str = "data-mobile-scale-factor";
pub const ATTR_INERTIA_POWER: &str = "data-inertia-power";
pub const ATTR_INERTIA_TIME_CONSTANT: &str = "data-inertia-time-constant";
pub const ATTR_INERTIA_VELOCITY_MULTIPLIER: &str = "data-inertia-velocity-multiplier";

type AttrLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Build validated options; missing attributes keep their defaults.
pub fn options_from_attrs(attr: impl Fn(&str) -> Option<String>) -> Result<SliderOptions> {
    let attr: AttrLookup = &attr;
    let mut o = SliderOptions {
        images: attr(ATTR_IMAGES)
            .map(|raw| split_images(&raw))
            .unwrap_or_default(),
        ..SliderOptions::default()
    };

    set_number(attr, ATTR_WIDTH, &mut o.width)?;
    set_number(attr, ATTR_IMAGE_DISTANCE, &mut o.image_distance)?;
    o.perspective = number(attr, ATTR_PERSPECTIVE)?;
    set_number(attr, ATTR_INITIAL_ROTATION, &mut o.initial_rotation)?;
    set_number(attr, ATTR_ANIMATION_DURATION, &mut o.animation_duration)?;
    set_number(attr, ATTR_STAGGER_DELAY, &mut o.stagger_delay)?;
    set_number(attr, ATTR_HOVER_OPACITY, &mut o.hover_opacity)?;
    set_number(attr, ATTR_MOBILE_BREAKPOINT, &mut o.mobile_breakpoint)?;
    set_number(attr, ATTR_MOBILE_SCALE_FACTOR, &mut o.mobile_scale_factor)?;
    set_number(attr, ATTR_INERTIA_POWER, &mut o.inertia_power)?;
    set_number(attr, ATTR_INERTIA_TIME_CONSTANT, &mut o.inertia_time_constant)?;
    set_number(
        attr,
        ATTR_INERTIA_VELOCITY_MULTIPLIER,
        &mut o.inertia_velocity_multiplier,
    )?;

    if let Some(flag) = flag(attr, ATTR_DRAGGABLE)? {
        o.draggable = flag;
    }
    if let Some(raw) = attr(ATTR_EASE) {
        o.ease = raw
            .parse::<Easing>()
            .with_context(|| format!("{}=\"{}\"", ATTR_EASE, raw))?;
    }
    o.background_color = attr(ATTR_BACKGROUND_COLOR)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    o.validate().context("invalid ring options")?;
    Ok(o)
}

/// Comma separated URLs; blanks are skipped.
pub fn split_images(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn number(attr: AttrLookup, name: &str) -> Result<Option<f64>> {
    attr(name)
        .map(|raw| {
            raw.trim()
                .parse::<f64>()
                .with_context(|| format!("{}=\"{}\" is not a number", name, raw))
        })
        .transpose()
}

fn set_number(attr: AttrLookup, name: &str, slot: &mut f64) -> Result<()> {
    if let Some(v) = number(attr, name)? {
        *slot = v;
    }
    Ok(())
}

// A bare attribute (`data-draggable`) counts as true.
fn flag(attr: AttrLookup, name: &str) -> Result<Option<bool>> {
    match attr(name).as_deref().map(str::trim) {
        None => Ok(None),
        Some("") | Some("true") => Ok(Some(true)),
        Some("false") => Ok(Some(false)),
        Some(other) => anyhow::bail!("{}=\"{}\" is not a boolean", name, other),
    }
}
