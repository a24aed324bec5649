#![doc = r"Time-based settle animations for the slipsheet gesture engine."]

pub mod easing;
pub mod settle;
pub mod tween;

pub use easing::Easing;
pub use settle::SettleAnimation;
pub use tween::TweenSpec;
