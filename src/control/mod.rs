pub mod motion;
pub mod nav;

pub use motion::MotionController;
pub use nav::NavConfig;
