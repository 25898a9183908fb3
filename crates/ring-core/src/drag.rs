//! Pointer drag tracking.
//!
//! Converts horizontal pointer positions into rotation deltas. Moving the
//! pointer right turns the ring as if seen from behind, so the delta is the
//! negated pointer movement scaled by the drag sensitivity.

/// Lives from drag start to drag end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub last_pointer_x: f64,
    /// Signed rotation applied by the latest move, in degrees.
    pub velocity: f64,
}

#[derive(Clone, Debug)]
pub struct DragTracker {
    sensitivity: f64,
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            session: None,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Open a session at `pointer_x`, replacing any session left open.
    pub fn start(&mut self, pointer_x: f64) {
        self.session = Some(DragSession {
            last_pointer_x: pointer_x,
            velocity: 0.0,
        });
    }

    /// Rotation delta for a move to `pointer_x`, or `None` without a session.
    pub fn move_to(&mut self, pointer_x: f64) -> Option<f64> {
        let sensitivity = self.sensitivity;
        let session = self.session.as_mut()?;
        if !pointer_x.is_finite() {
            return Some(0.0);
        }
        let delta = pointer_x - session.last_pointer_x;
        session.velocity = -delta * sensitivity;
        session.last_pointer_x = pointer_x;
        Some(session.velocity)
    }

    /// Close the session and hand back the last velocity.
    pub fn end(&mut self) -> Option<f64> {
        self.session.take().map(|s| s.velocity)
    }
}
