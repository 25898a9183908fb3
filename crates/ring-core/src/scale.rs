/// Scale applied to the whole ring: `mobile_factor` at or below the
/// breakpoint, 1 above it.
#[inline]
pub fn scale_for_viewport(viewport_width: f64, breakpoint: f64, mobile_factor: f64) -> f64 {
    if viewport_width <= breakpoint {
        mobile_factor
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsiveScale {
    breakpoint: f64,
    mobile_factor: f64,
    current: f64,
}

impl ResponsiveScale {
    pub fn new(breakpoint: f64, mobile_factor: f64) -> Self {
        Self {
            breakpoint,
            mobile_factor,
            current: 1.0,
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Recompute for a new viewport width; returns whether the scale changed.
    pub fn on_resize(&mut self, viewport_width: f64) -> bool {
        let next = scale_for_viewport(viewport_width, self.breakpoint, self.mobile_factor);
        let changed = next != self.current;
        self.current = next;
        changed
    }
}
