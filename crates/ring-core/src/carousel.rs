//! The ring component: owns the rotation and arbitrates between the two
//! writers that may change it, an active drag or a release animation.

use crate::config::{ConfigError, RingConfig, SliderOptions};
use crate::drag::DragTracker;
use crate::entrance::{Entrance, ItemEntrance};
use crate::hover::HoverDimmer;
use crate::inertia::{InertiaAnimation, InertiaParams};
use crate::layout::{self, ItemTransform};
use crate::rotation::{RotationSink, RotationState};
use crate::scale::ResponsiveScale;
use std::time::Duration;

/// Cursor the host should show over the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

pub struct Carousel<S: RotationSink> {
    ring: RingConfig,
    rotation: RotationState,
    drag: DragTracker,
    inertia: Option<InertiaAnimation>,
    inertia_params: InertiaParams,
    velocity_multiplier: f64,
    draggable: bool,
    image_distance: f64,
    scale: ResponsiveScale,
    entrance: Entrance,
    hover: HoverDimmer,
    items_dirty: bool,
    sink: S,
}

impl<S: RotationSink> Carousel<S> {
    /// Validate `options` and publish the initial rotation to `sink`.
    pub fn new(options: &SliderOptions, mut sink: S) -> Result<Self, ConfigError> {
        let ring = options.validate()?;
        let rotation = RotationState::new(options.initial_rotation);
        sink.publish(rotation.angle());
        log::debug!(
            "[ring] items={} slot={:.2} initial={:.2}",
            ring.item_count(),
            ring.slot_angle(),
            rotation.angle()
        );
        Ok(Self {
            ring,
            rotation,
            drag: DragTracker::new(options.drag_sensitivity),
            inertia: None,
            inertia_params: options.inertia(),
            velocity_multiplier: options.inertia_velocity_multiplier,
            draggable: options.draggable,
            image_distance: options.image_distance,
            scale: ResponsiveScale::new(options.mobile_breakpoint, options.mobile_scale_factor),
            entrance: Entrance::new(
                ring.item_count(),
                options.animation_duration,
                options.stagger_delay,
                options.ease,
            ),
            hover: HoverDimmer::new(options.hover_opacity),
            items_dirty: true,
            sink,
        })
    }

    /// Begin a drag at `pointer_x`. Stops any release animation where it is.
    /// Returns `false` when dragging is disabled.
    pub fn on_drag_start(&mut self, pointer_x: f64) -> bool {
        if !self.draggable {
            return false;
        }
        if let Some(anim) = self.inertia.take() {
            log::debug!(
                "[drag] cancel inertia at {:.2} (target {:.2})",
                self.rotation.angle(),
                anim.target()
            );
        }
        self.drag.start(pointer_x);
        log::debug!("[drag] start x={:.1}", pointer_x);
        true
    }

    pub fn on_drag_move(&mut self, pointer_x: f64) {
        if let Some(delta) = self.drag.move_to(pointer_x) {
            self.write_angle(self.rotation.angle() + delta);
        }
    }

    /// Release the drag and start the snap animation. No-op without a drag.
    pub fn on_drag_end(&mut self) {
        let Some(velocity) = self.drag.end() else {
            return;
        };
        let start = self.rotation.angle();
        let boosted = velocity * self.velocity_multiplier;
        let anim =
            InertiaAnimation::new(start, boosted, self.ring.slot_angle(), self.inertia_params);
        log::debug!(
            "[drag] end at {:.2} velocity={:.2} target raw={:.2} snapped={:.2}",
            start,
            boosted,
            anim.raw_target(),
            anim.target()
        );
        if anim.is_settled() {
            self.write_angle(anim.target());
        } else {
            self.inertia = Some(anim);
        }
    }

    /// Advance time-based animations by one frame.
    ///
    /// Returns `true` while something is still animating and the host should
    /// keep requesting frames.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if let Some(anim) = self.inertia.as_mut() {
            let angle = anim.advance(dt);
            let settled = anim.is_settled();
            self.write_angle(angle);
            if settled {
                log::debug!("[inertia] settled at {:.2}", angle);
                self.inertia = None;
            }
        }
        if !self.entrance.is_finished() {
            self.entrance.advance(dt);
            self.items_dirty = true;
        }
        self.is_animating()
    }

    /// Update the responsive scale; returns the scale now in effect.
    pub fn on_resize(&mut self, viewport_width: f64) -> f64 {
        if self.scale.on_resize(viewport_width) {
            log::debug!("[ring] scale -> {:.2}", self.scale.current());
            self.items_dirty = true;
        }
        self.scale.current()
    }

    /// Ignored while dragging.
    pub fn on_hover_start(&mut self, index: usize) {
        if self.drag.is_active() || index >= self.ring.item_count() {
            return;
        }
        self.items_dirty |= self.hover.start(index);
    }

    /// Ignored while dragging.
    pub fn on_hover_end(&mut self) {
        if self.drag.is_active() {
            return;
        }
        self.items_dirty |= self.hover.end();
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    #[inline]
    pub fn ring(&self) -> &RingConfig {
        &self.ring
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[inline]
    pub fn inertia(&self) -> Option<&InertiaAnimation> {
        self.inertia.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.inertia.is_some() || !self.entrance.is_finished()
    }

    /// Whether a frame is needed: something is animating or item styles
    /// have not been flushed yet.
    pub fn needs_frame(&self) -> bool {
        self.is_animating() || self.items_dirty
    }

    #[inline]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn cursor(&self) -> Cursor {
        if !self.draggable {
            Cursor::Default
        } else if self.drag.is_active() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale.current()
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hover.hovered()
    }

    pub fn item_transform(&self, index: usize) -> ItemTransform {
        layout::project(index, &self.ring, self.image_distance, self.scale.current())
    }

    pub fn item_entrance(&self, index: usize) -> ItemEntrance {
        self.entrance.sample(index)
    }

    /// Entrance fade combined with hover dimming.
    pub fn item_opacity(&self, index: usize) -> f64 {
        self.entrance.sample(index).opacity * self.hover.opacity(index)
    }

    #[inline]
    pub fn entrance_finished(&self) -> bool {
        self.entrance.is_finished()
    }

    pub fn facing_index(&self) -> usize {
        layout::facing_index(self.rotation.angle(), &self.ring)
    }

    /// Whether per-item styling changed since the last call.
    pub fn take_items_dirty(&mut self) -> bool {
        std::mem::take(&mut self.items_dirty)
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn write_angle(&mut self, angle_deg: f64) {
        self.rotation.set(angle_deg);
        self.sink.publish(angle_deg);
    }
}
