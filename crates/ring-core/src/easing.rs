//! Easing curves for the staggered entrance animation.
//!
//! Names follow the CSS/animation vocabulary (`easeOut`, `backInOut`, ...)
//! so hosts can pass the same strings they would hand to a web animation.

use crate::config::ConfigError;
use std::str::FromStr;

const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 24;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    Anticipate,
}

impl Easing {
    /// Map linear progress `t` in \[0, 1\] onto the eased curve.
    ///
    /// The back variants overshoot, so the result may leave \[0, 1\] in the
    /// middle of the curve; both endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CircIn => circ_in(t),
            Easing::CircOut => 1.0 - circ_in(1.0 - t),
            Easing::CircInOut => mirror(circ_in, t),
            Easing::BackIn => back_in(t),
            Easing::BackOut => back_out(t),
            Easing::BackInOut => mirror(back_in, t),
            Easing::Anticipate => {
                let p = t * 2.0;
                if p < 1.0 {
                    0.5 * back_in(p)
                } else {
                    0.5 * (2.0 - 2f64.powf(-10.0 * (p - 1.0)))
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "easeIn",
            Easing::EaseOut => "easeOut",
            Easing::EaseInOut => "easeInOut",
            Easing::CircIn => "circIn",
            Easing::CircOut => "circOut",
            Easing::CircInOut => "circInOut",
            Easing::BackIn => "backIn",
            Easing::BackOut => "backOut",
            Easing::BackInOut => "backInOut",
            Easing::Anticipate => "anticipate",
        }
    }
}

impl FromStr for Easing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let easing = match s.trim() {
            "linear" => Easing::Linear,
            "easeIn" => Easing::EaseIn,
            "easeOut" => Easing::EaseOut,
            "easeInOut" => Easing::EaseInOut,
            "circIn" => Easing::CircIn,
            "circOut" => Easing::CircOut,
            "circInOut" => Easing::CircInOut,
            "backIn" => Easing::BackIn,
            "backOut" => Easing::BackOut,
            "backInOut" => Easing::BackInOut,
            "anticipate" => Easing::Anticipate,
            other => return Err(ConfigError::UnknownEasing(other.to_string())),
        };
        Ok(easing)
    }
}

#[inline]
fn circ_in(t: f64) -> f64 {
    1.0 - t.acos().sin()
}

#[inline]
fn back_out(t: f64) -> f64 {
    cubic_bezier(0.33, 1.53, 0.69, 0.99, t)
}

#[inline]
fn back_in(t: f64) -> f64 {
    1.0 - back_out(1.0 - t)
}

#[inline]
fn mirror(ease_in: fn(f64) -> f64, t: f64) -> f64 {
    if t <= 0.5 {
        ease_in(2.0 * t) / 2.0
    } else {
        (2.0 - ease_in(2.0 * (1.0 - t))) / 2.0
    }
}

// Bezier component at parameter `t` for control values `a1`, `a2`
// (endpoints fixed at 0 and 1).
#[inline]
fn calc_bezier(t: f64, a1: f64, a2: f64) -> f64 {
    (((1.0 - 3.0 * a2 + 3.0 * a1) * t + (3.0 * a2 - 6.0 * a1)) * t + 3.0 * a1) * t
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x1 == y1 && x2 == y2 {
        return x;
    }
    // x(t) is monotonic for x1, x2 in [0, 1], so bisect for t.
    let mut lower = 0.0;
    let mut upper = 1.0;
    let mut t = 0.5;
    for _ in 0..SUBDIVISION_MAX_ITERATIONS {
        t = lower + (upper - lower) / 2.0;
        let dx = calc_bezier(t, x1, x2) - x;
        if dx.abs() <= SUBDIVISION_PRECISION {
            break;
        }
        if dx > 0.0 {
            upper = t;
        } else {
            lower = t;
        }
    }
    calc_bezier(t, y1, y2)
}
