/// DOM hooks and fixed styling for the ring.
///
/// Tuning of the interaction itself lives in `ring_core::constants`; this
/// file only names what the web front-end creates and looks up.
// Mount point used by the auto-start entry
pub const RING_ROOT_ID: &str = "image-ring";

// Class names of generated elements
pub const CONTAINER_CLASS: &str = "ring-container";
pub const STAGE_CLASS: &str = "ring-stage";
pub const RING_CLASS: &str = "ring";
pub const ITEM_CLASS: &str = "ring-item";

// Container size relative to the host element
pub const CONTAINER_WIDTH_PCT: f64 = 90.0;
pub const CONTAINER_HEIGHT_PCT: f64 = 100.0;

// Card chrome
pub const ITEM_BORDER: &str = "4px solid rgba(255, 255, 255, 0.1)";
pub const ITEM_BORDER_RADIUS_PX: f64 = 16.0;

