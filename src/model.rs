//! Page-level view state and the static character roster.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::state::ParallaxOffsets;

const ROSTER_JSON: &str = include_str!("../assets/characters.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Masked logo overlay is on screen; content is not mounted.
    #[default]
    Intro,
    /// Terminal for the session.
    Revealed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub phase: Phase,
}

pub enum PageAction {
    Reveal,
}

impl PageState {
    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Parallax target for a pointer position; pointer movement before the
    /// reveal has no effect.
    pub fn pointer_parallax(&self, client_x: f64, viewport_width: f64) -> Option<ParallaxOffsets> {
        self.is_revealed()
            .then(|| ParallaxOffsets::for_pointer(client_x, viewport_width))
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::Reveal => {
                if self.is_revealed() {
                    return self;
                }
                log::info!("intro finished; revealing page");
                Rc::new(PageState {
                    phase: Phase::Revealed,
                })
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub image: String,
    pub link: String,
    pub title: String,
    pub description: String,
}

/// The six showcased characters, in display order.
pub fn roster() -> Vec<Character> {
    match serde_json::from_str(ROSTER_JSON) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("character roster is malformed: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_starts_in_intro() {
        let state = PageState::default();
        assert_eq!(state.phase, Phase::Intro);
        assert!(!state.is_revealed());
    }

    #[test]
    fn reveal_is_one_way_and_idempotent() {
        let state = Rc::new(PageState::default());
        let revealed = state.reduce(PageAction::Reveal);
        assert!(revealed.is_revealed());
        let again = revealed.clone().reduce(PageAction::Reveal);
        assert!(Rc::ptr_eq(&revealed, &again));
    }

    #[test]
    fn pointer_ignored_until_revealed() {
        let intro = Rc::new(PageState::default());
        assert_eq!(intro.pointer_parallax(0.0, 1000.0), None);
        let revealed = intro.reduce(PageAction::Reveal);
        let offsets = revealed.pointer_parallax(0.0, 1000.0);
        assert_eq!(offsets, Some(ParallaxOffsets::for_pointer(0.0, 1000.0)));
    }

    #[test]
    fn roster_has_six_fixed_entries() {
        let list = roster();
        assert_eq!(list.len(), 6);
        let titles: Vec<&str> = list.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Brian Heder",
                "Drequan Priest",
                "JASON Duval",
                "Raul Bautista",
                "Lucia Caminos",
                "Boobie ike"
            ]
        );
        for c in &list {
            assert!(!c.title.is_empty());
            assert!(!c.description.is_empty());
            assert!(c.image.starts_with("./static/"), "{}", c.image);
            assert!(c.link.starts_with("https://"));
        }
    }

    #[test]
    fn roster_copy_is_kept_verbatim() {
        let list = roster();
        assert!(list[2].description.contains("getting harder.Jason grew up"));
        assert!(list[3].description.starts_with("Confidence, charm, and cunning \u{2014} Raul's"));
        assert!(list[5].description.contains("legend \u{2014} and acts like it"));
        assert!(list[5].description.contains("recording studio \u{2014} Boobie's"));
    }
}
