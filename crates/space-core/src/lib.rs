//! Frame-driven motion for the space scene: a pointer-following cursor,
//! scroll-controlled depth and time-driven orbits.
//!
//! Nothing here touches a platform API. Front-ends feed [`FrameSample`]s in
//! and apply the resulting [`Pose`]s to their own scene nodes.

pub mod clock;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod orbit;
pub mod pose;
pub mod scroll;
pub mod smoothing;
pub mod starfield;
pub mod system;
pub mod trigger;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use cursor::*;
pub use error::*;
pub use orbit::*;
pub use pose::*;
pub use scroll::*;
pub use smoothing::*;
pub use starfield::*;
pub use system::*;
pub use trigger::*;
