//! Release animation that decelerates the ring onto a slot.
//!
//! The target is committed once, when the animation is created:
//! `snap_to_slot(start + velocity)`. The remaining distance then decays as
//! `amplitude * exp(-(t / time_constant)^power)`, so `power < 1` stretches
//! the tail of the curve. The animation settles exactly on the target once
//! the remaining distance drops below `rest_delta`.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaParams {
    pub power: f64,
    pub time_constant_ms: f64,
    pub rest_delta: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InertiaPhase {
    Running { elapsed_ms: f64 },
    Settled,
}

#[derive(Clone, Debug)]
pub struct InertiaAnimation {
    start_angle: f64,
    initial_velocity: f64,
    raw_target: f64,
    target: f64,
    current: f64,
    params: InertiaParams,
    phase: InertiaPhase,
}

/// Nearest multiple of `slot_angle`; halves round up, towards +infinity.
#[inline]
pub fn snap_to_slot(angle: f64, slot_angle: f64) -> f64 {
    if slot_angle <= 0.0 || !slot_angle.is_finite() {
        return angle;
    }
    (angle / slot_angle + 0.5).floor() * slot_angle
}

impl InertiaAnimation {
    pub fn new(start_angle: f64, velocity: f64, slot_angle: f64, params: InertiaParams) -> Self {
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        let raw_target = start_angle + velocity;
        let target = snap_to_slot(raw_target, slot_angle);
        let mut anim = Self {
            start_angle,
            initial_velocity: velocity,
            raw_target,
            target,
            current: start_angle,
            params,
            phase: InertiaPhase::Running { elapsed_ms: 0.0 },
        };
        if (target - start_angle).abs() < params.rest_delta {
            anim.settle();
        }
        anim
    }

    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[inline]
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Unsnapped `start + velocity`.
    #[inline]
    pub fn raw_target(&self) -> f64 {
        self.raw_target
    }

    /// Slot the animation comes to rest on.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn phase(&self) -> InertiaPhase {
        self.phase
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.phase == InertiaPhase::Settled
    }

    /// Angle on the decay curve `elapsed_ms` after release, ignoring rest.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let amplitude = self.target - self.start_angle;
        let t = (elapsed_ms.max(0.0) / self.params.time_constant_ms).powf(self.params.power);
        self.target - amplitude * (-t).exp()
    }

    /// Step the animation forward and return the angle to display.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        let InertiaPhase::Running { elapsed_ms } = self.phase else {
            return self.current;
        };
        let elapsed_ms = elapsed_ms + dt.as_secs_f64() * 1000.0;
        let latest = self.value_at(elapsed_ms);
        if (self.target - latest).abs() < self.params.rest_delta {
            self.settle();
        } else {
            self.current = latest;
            self.phase = InertiaPhase::Running { elapsed_ms };
        }
        self.current
    }

    fn settle(&mut self) {
        self.current = self.target;
        self.phase = InertiaPhase::Settled;
    }
}
