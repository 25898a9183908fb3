pub mod carousel;
pub mod config;
pub mod constants;
pub mod drag;
pub mod easing;
pub mod entrance;
pub mod hover;
pub mod inertia;
pub mod layout;
pub mod rotation;
pub mod scale;

pub use carousel::*;
pub use config::*;
pub use constants::*;
pub use drag::*;
pub use easing::*;
pub use entrance::*;
pub use hover::*;
pub use inertia::*;
pub use layout::*;
pub use rotation::*;
pub use scale::*;
