//! Construction-time configuration for the ring.
//!
//! `SliderOptions` mirrors the knobs a host page can set. Everything is
//! checked once in [`SliderOptions::validate`] so the drag and inertia code
//! downstream only ever sees finite, positive values.

use crate::constants::*;
use crate::easing::Easing;
use crate::inertia::InertiaParams;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image list is empty")]
    NoImages,
    #[error("ring needs at least one item")]
    InvalidItemCount,
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("`{field}` must lie within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown easing `{0}`")]
    UnknownEasing(String),
}

/// Item count and the angular slot each item occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingConfig {
    item_count: usize,
    slot_angle: f64,
}

impl RingConfig {
    pub fn new(item_count: usize) -> Result<Self, ConfigError> {
        if item_count == 0 {
            return Err(ConfigError::InvalidItemCount);
        }
        Ok(Self {
            item_count,
            slot_angle: FULL_TURN_DEG / item_count as f64,
        })
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Degrees between adjacent items; `item_count * slot_angle == 360`.
    #[inline]
    pub fn slot_angle(&self) -> f64 {
        self.slot_angle
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderOptions {
    pub images: Vec<String>,
    /// Card width in px; height follows `CARD_ASPECT`.
    pub width: f64,
    pub perspective: Option<f64>,
    pub image_distance: f64,
    pub initial_rotation: f64,
    pub animation_duration: f64,
    pub stagger_delay: f64,
    pub hover_opacity: f64,
    pub background_color: Option<String>,
    pub draggable: bool,
    pub ease: Easing,
    pub mobile_breakpoint: f64,
    pub mobile_scale_factor: f64,
    pub inertia_power: f64,
    pub inertia_time_constant: f64,
    pub inertia_velocity_multiplier: f64,
    pub rest_delta: f64,
    pub drag_sensitivity: f64,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            width: DEFAULT_WIDTH_PX,
            perspective: None,
            image_distance: DEFAULT_IMAGE_DISTANCE_PX,
            initial_rotation: DEFAULT_INITIAL_ROTATION_DEG,
            animation_duration: DEFAULT_ANIMATION_DURATION_SEC,
            stagger_delay: DEFAULT_STAGGER_DELAY_SEC,
            hover_opacity: DEFAULT_HOVER_OPACITY,
            background_color: None,
            draggable: true,
            ease: Easing::EaseOut,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT_PX,
            mobile_scale_factor: DEFAULT_MOBILE_SCALE_FACTOR,
            inertia_power: DEFAULT_INERTIA_POWER,
            inertia_time_constant: DEFAULT_INERTIA_TIME_CONSTANT_MS,
            inertia_velocity_multiplier: DEFAULT_INERTIA_VELOCITY_MULTIPLIER,
            rest_delta: DEFAULT_REST_DELTA_DEG,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }
}

impl SliderOptions {
    /// Options with the required fields set and every other field defaulted.
    pub fn new(images: Vec<String>, width: f64, image_distance: f64) -> Self {
        Self {
            images,
            width,
            image_distance,
            ..Self::default()
        }
    }

    /// Check every numeric option and derive the ring geometry.
    pub fn validate(&self) -> Result<RingConfig, ConfigError> {
        if self.images.is_empty() {
            return Err(ConfigError::NoImages);
        }
        positive("width", self.width)?;
        positive("image_distance", self.image_distance)?;
        if let Some(p) = self.perspective {
            positive("perspective", p)?;
        }
        finite("initial_rotation", self.initial_rotation)?;
        non_negative("animation_duration", self.animation_duration)?;
        non_negative("stagger_delay", self.stagger_delay)?;
        in_range("hover_opacity", self.hover_opacity, 0.0, 1.0)?;
        non_negative("mobile_breakpoint", self.mobile_breakpoint)?;
        positive("mobile_scale_factor", self.mobile_scale_factor)?;
        positive("inertia_power", self.inertia_power)?;
        positive("inertia_time_constant", self.inertia_time_constant)?;
        finite(
            "inertia_velocity_multiplier",
            self.inertia_velocity_multiplier,
        )?;
        positive("rest_delta", self.rest_delta)?;
        finite("drag_sensitivity", self.drag_sensitivity)?;
        RingConfig::new(self.images.len())
    }

    /// Card height in px.
    #[inline]
    pub fn height(&self) -> f64 {
        self.width * CARD_ASPECT
    }

    pub fn inertia(&self) -> InertiaParams {
        InertiaParams {
            power: self.inertia_power,
            time_constant_ms: self.inertia_time_constant,
            rest_delta: self.rest_delta,
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
