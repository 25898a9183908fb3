//! Staggered entrance: each card rises into place and fades in, item `i`
//! starting `i * stagger` seconds after mount.

use crate::constants::ENTRANCE_OFFSET_Y_PX;
use crate::easing::Easing;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemEntrance {
    pub offset_y: f64,
    pub opacity: f64,
}

impl ItemEntrance {
    pub const HIDDEN: ItemEntrance = ItemEntrance {
        offset_y: ENTRANCE_OFFSET_Y_PX,
        opacity: 0.0,
    };
    pub const VISIBLE: ItemEntrance = ItemEntrance {
        offset_y: 0.0,
        opacity: 1.0,
    };
}

#[derive(Clone, Debug)]
pub struct Entrance {
    item_count: usize,
    duration_sec: f64,
    stagger_sec: f64,
    easing: Easing,
    elapsed_sec: f64,
}

impl Entrance {
    pub fn new(item_count: usize, duration_sec: f64, stagger_sec: f64, easing: Easing) -> Self {
        Self {
            item_count,
            duration_sec,
            stagger_sec,
            easing,
            elapsed_sec: 0.0,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if !self.is_finished() {
            self.elapsed_sec += dt.as_secs_f64();
        }
    }

    #[inline]
    pub fn total_duration_sec(&self) -> f64 {
        let last = self.item_count.saturating_sub(1) as f64;
        last * self.stagger_sec + self.duration_sec
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed_sec >= self.total_duration_sec()
    }

    /// Linear progress of `index` in \[0, 1\].
    pub fn progress(&self, index: usize) -> f64 {
        let local = self.elapsed_sec - index as f64 * self.stagger_sec;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        (local / self.duration_sec).min(1.0)
    }

    pub fn sample(&self, index: usize) -> ItemEntrance {
        let p = self.progress(index);
        if p >= 1.0 {
            return ItemEntrance::VISIBLE;
        }
        let eased = self.easing.apply(p);
        ItemEntrance {
            offset_y: ENTRANCE_OFFSET_Y_PX * (1.0 - eased),
            opacity: eased.clamp(0.0, 1.0),
        }
    }
}
