pub mod audio;
pub mod frame;
pub mod intro;
pub mod parallax;
pub mod reveal;
pub mod storage;
pub mod tween;

pub use audio::{AudioGate, AudioSource, settle_attempt, start_playback};
pub use frame::FrameLoop;
pub use intro::IntroSequencer;
pub use parallax::ParallaxOffsets;
pub use reveal::{Layer, RevealScene};
pub use storage::{LocalStore, has_interacted};
pub use tween::Transform;
