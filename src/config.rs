// Page-wide constants: asset paths, audio, persistence and animation tuning.

pub const INTRO_AUDIO_SRC: &str = "./static/plasma.mp3";
pub const INTRO_VOLUME: f64 = 0.4;

/// localStorage key recording that a user gesture once unlocked the intro audio.
pub const AUDIO_INTERACTED_KEY: &str = "audio-interacted";
pub const AUDIO_INTERACTED_VALUE: &str = "true";

/// Own progress of the intro scale stage past which the page is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.9;

// Parallax: percent of layer width per pixel of pointer distance from centre.
pub const PARALLAX_GAIN: f64 = 0.05;
pub const PARALLAX_TEXT_FACTOR: f64 = 1.0;
pub const PARALLAX_SKY_FACTOR: f64 = 1.0;
pub const PARALLAX_BG_FACTOR: f64 = 0.1;
pub const PARALLAX_FOLLOW_SECS: f64 = 0.5;

pub const INTRO_NIGHT_SKY: &str = "./static/nightsky.png";
pub const SKY_IMAGE: &str = "./static/sky.png";
pub const BG_IMAGE: &str = "./static/bg.png";
pub const CHARACTER_IMAGE: &str = "./static/girlbg.png";
pub const PLATFORM_BADGE: &str = "./static/ps5.png";
pub const INFO_IMAGE: &str = "./static/imag.png";
pub const DOWNLOAD_URL: &str = "https://www.rockstargames.com/";
