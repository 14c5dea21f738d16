use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use super::storage::{KeyValueStore, remember_interaction};
use crate::config::INTRO_VOLUME;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioSource {
    Autoplay,
    Interaction,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// `play()` promise rejected, typically the autoplay policy.
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("playback unavailable: {0}")]
    Unavailable(String),
}

/// One-shot guards around the intro sound. Both start paths share `played`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioGate {
    played: bool,
    autoplay_attempted: bool,
    unlock_pending: bool,
}

impl AudioGate {
    #[cfg(test)]
    pub fn has_played(&self) -> bool {
        self.played
    }

    /// True the first time only, and never once audio is playing.
    pub fn try_autoplay(&mut self) -> bool {
        if self.played || self.autoplay_attempted {
            return false;
        }
        self.autoplay_attempted = true;
        true
    }

    /// True while audio has not played and no gesture attempt is in flight.
    pub fn try_unlock(&mut self) -> bool {
        if self.played || self.unlock_pending {
            return false;
        }
        self.unlock_pending = true;
        true
    }

    /// Records a successful start. Returns true when the interaction flag
    /// should be persisted.
    pub fn confirm(&mut self, source: AudioSource) -> bool {
        if source == AudioSource::Interaction {
            self.unlock_pending = false;
        }
        if self.played {
            return false;
        }
        self.played = true;
        source == AudioSource::Interaction
    }

    pub fn reject(&mut self, source: AudioSource) {
        if source == AudioSource::Interaction {
            self.unlock_pending = false;
        }
    }
}

/// Feeds the outcome of a playback attempt back into the gate. Persists the
/// interaction flag when a gesture was the first start, and returns whether it
/// did so.
pub fn settle_attempt(
    gate: &mut AudioGate,
    source: AudioSource,
    outcome: &Result<(), PlaybackError>,
    store: &impl KeyValueStore,
) -> bool {
    match outcome {
        Ok(()) => {
            log::debug!("intro audio started ({:?})", source);
            if gate.confirm(source) {
                remember_interaction(store);
                return true;
            }
            false
        }
        Err(e) => {
            log::debug!("intro audio not started ({:?}): {}", source, e);
            gate.reject(source);
            false
        }
    }
}

/// Position to seek to before `play()`. A running element is left alone so an
/// overlapping attempt does not restart the sound.
pub fn rewind_target(paused: bool) -> Option<f64> {
    paused.then_some(0.0)
}

/// Unmutes, rewinds and plays `audio` at the intro volume. `play()` is issued
/// synchronously so a calling gesture handler still counts as user activation;
/// the returned future resolves once playback has actually started.
pub fn start_playback(
    audio: &HtmlAudioElement,
) -> impl Future<Output = Result<(), PlaybackError>> + use<> {
    audio.set_muted(false);
    audio.set_volume(INTRO_VOLUME);
    if let Some(at) = rewind_target(audio.paused()) {
        audio.set_current_time(at);
    }
    let started: Result<js_sys::Promise, wasm_bindgen::JsValue> = audio.play();
    async move {
        let promise = started.map_err(|e| PlaybackError::Unavailable(format!("{:?}", e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AUDIO_INTERACTED_KEY;
    use crate::state::storage::{MemoryStore, has_interacted};

    #[test]
    fn autoplay_is_attempted_once() {
        let mut gate = AudioGate::default();
        assert!(gate.try_autoplay());
        gate.reject(AudioSource::Autoplay);
        assert!(!gate.try_autoplay());
    }

    #[test]
    fn successful_autoplay_disables_unlock() {
        let mut gate = AudioGate::default();
        assert!(gate.try_autoplay());
        assert!(!gate.confirm(AudioSource::Autoplay));
        assert!(gate.has_played());
        assert!(!gate.try_unlock());
    }

    #[test]
    fn blocked_autoplay_then_click_persists() {
        let mut gate = AudioGate::default();
        assert!(gate.try_autoplay());
        gate.reject(AudioSource::Autoplay);
        assert!(!gate.has_played());
        assert!(gate.try_unlock());
        assert!(gate.confirm(AudioSource::Interaction));
        assert!(gate.has_played());
        // later taps are no-ops
        assert!(!gate.try_unlock());
    }

    #[test]
    fn click_and_touch_from_one_tap_yield_one_attempt() {
        let mut gate = AudioGate::default();
        assert!(gate.try_unlock());
        assert!(!gate.try_unlock());
        assert!(gate.confirm(AudioSource::Interaction));
        assert!(!gate.try_unlock());
    }

    #[test]
    fn rejected_gesture_rearms_unlock() {
        let mut gate = AudioGate::default();
        assert!(gate.try_unlock());
        gate.reject(AudioSource::Interaction);
        assert!(gate.try_unlock());
    }

    #[test]
    fn audio_starts_at_most_once() {
        let mut gate = AudioGate::default();
        assert!(gate.try_autoplay());
        assert!(gate.try_unlock());
        // both promises resolve: only the first flips the flag
        assert!(!gate.confirm(AudioSource::Autoplay));
        assert!(!gate.confirm(AudioSource::Interaction));
        assert!(gate.has_played());
    }

    #[test]
    fn rewinds_only_a_paused_element() {
        assert_eq!(rewind_target(true), Some(0.0));
        assert_eq!(rewind_target(false), None);
    }

    #[test]
    fn settled_gesture_persists_the_flag() {
        let store = MemoryStore::default();
        let mut gate = AudioGate::default();
        assert!(gate.try_unlock());
        assert!(settle_attempt(&mut gate, AudioSource::Interaction, &Ok(()), &store));
        assert_eq!(store.get(AUDIO_INTERACTED_KEY).as_deref(), Some("true"));
        // the next load sees it
        assert!(has_interacted(&store));
        assert!(!gate.try_unlock());
    }

    #[test]
    fn settled_autoplay_writes_nothing() {
        let store = MemoryStore::default();
        let mut gate = AudioGate::default();
        assert!(gate.try_autoplay());
        assert!(!settle_attempt(&mut gate, AudioSource::Autoplay, &Ok(()), &store));
        assert_eq!(store.get(AUDIO_INTERACTED_KEY), None);
        assert!(!has_interacted(&store));
        assert!(gate.has_played());
    }

    #[test]
    fn rejected_gesture_writes_nothing_and_rearms() {
        let store = MemoryStore::default();
        let mut gate = AudioGate::default();
        assert!(gate.try_unlock());
        let refused = Err(PlaybackError::Rejected("NotAllowedError".into()));
        assert!(!settle_attempt(&mut gate, AudioSource::Interaction, &refused, &store));
        assert_eq!(store.get(AUDIO_INTERACTED_KEY), None);
        assert!(!gate.has_played());
        assert!(gate.try_unlock());
        assert!(settle_attempt(&mut gate, AudioSource::Interaction, &Ok(()), &store));
        assert!(has_interacted(&store));
    }

    #[test]
    fn gesture_after_autoplay_started_writes_nothing() {
        let store = MemoryStore::default();
        let mut gate = AudioGate::default();
        assert!(gate.try_autoplay());
        assert!(gate.try_unlock());
        assert!(!settle_attempt(&mut gate, AudioSource::Autoplay, &Ok(()), &store));
        assert!(!settle_attempt(&mut gate, AudioSource::Interaction, &Ok(()), &store));
        assert!(!has_interacted(&store));
    }
}
