//! Static placement of each card on the ring.

use crate::config::RingConfig;

/// Per-item transform, combined by the renderer with the ring rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub rotate_y_deg: f64,
    pub translate_z: f64,
    /// Depth of the transform origin, so the card swings around the ring centre.
    pub origin_z: f64,
}

pub fn project(index: usize, ring: &RingConfig, image_distance: f64, scale: f64) -> ItemTransform {
    let depth = image_distance * scale;
    ItemTransform {
        rotate_y_deg: -(index as f64) * ring.slot_angle(),
        translate_z: -depth,
        origin_z: depth,
    }
}

/// Index of the item turned towards the viewer at `angle_deg`.
pub fn facing_index(angle_deg: f64, ring: &RingConfig) -> usize {
    let n = ring.item_count() as i64;
    let slot = (angle_deg / ring.slot_angle() + 0.5).floor() as i64;
    slot.rem_euclid(n) as usize
}
