/// Receives the ring angle after every change.
///
/// The carousel calls [`RotationSink::publish`] synchronously from inside the
/// same update that mutated the angle, so a sink always sees the latest value
/// and never two writers in one frame.
pub trait RotationSink {
    fn publish(&mut self, angle_deg: f64);
}

/// Discards every update; handy when only the final angle matters.
impl RotationSink for () {
    fn publish(&mut self, _angle_deg: f64) {}
}

/// Records the full history of published angles.
impl RotationSink for Vec<f64> {
    fn publish(&mut self, angle_deg: f64) {
        self.push(angle_deg);
    }
}

/// Current ring rotation in degrees. Unbounded: it keeps accumulating across
/// drags instead of wrapping into \[0, 360).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    angle_deg: f64,
}

impl RotationState {
    pub fn new(angle_deg: f64) -> Self {
        Self { angle_deg }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle_deg
    }

    #[inline]
    pub(crate) fn set(&mut self, angle_deg: f64) {
        self.angle_deg = angle_deg;
    }
}
