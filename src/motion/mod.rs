pub mod interpolate;
pub mod spring;
pub mod velocity;

pub use interpolate::{lerp, map_range};
pub use spring::Spring;
pub use velocity::VelocityTracker;
