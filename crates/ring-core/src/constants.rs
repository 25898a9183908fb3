// Default tuning for the ring, shared by the web front-end and host tests.

// Geometry
pub const FULL_TURN_DEG: f64 = 360.0;
pub const CARD_ASPECT: f64 = 1.33; // card height = width * aspect
pub const DEFAULT_WIDTH_PX: f64 = 350.0;
pub const DEFAULT_IMAGE_DISTANCE_PX: f64 = 700.0;
pub const DEFAULT_INITIAL_ROTATION_DEG: f64 = 60.0;

// Entrance
pub const DEFAULT_ANIMATION_DURATION_SEC: f64 = 1.5;
pub const DEFAULT_STAGGER_DELAY_SEC: f64 = 0.1;
pub const ENTRANCE_OFFSET_Y_PX: f64 = 200.0; // cards rise from this far below

// Hover
pub const DEFAULT_HOVER_OPACITY: f64 = 0.5;
pub const HOVER_TRANSITION_SEC: f64 = 0.15;

// Responsive scale
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_MOBILE_SCALE_FACTOR: f64 = 0.7;

// Drag and inertia
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 0.5; // degrees per pointer px, sign inverted
pub const DEFAULT_INERTIA_POWER: f64 = 0.8;
pub const DEFAULT_INERTIA_TIME_CONSTANT_MS: f64 = 200.0;
pub const DEFAULT_INERTIA_VELOCITY_MULTIPLIER: f64 = 14.0;
pub const DEFAULT_REST_DELTA_DEG: f64 = 0.5;
