use super::{intro_overlay::IntroOverlay, revealed_page::RevealedPage};
use crate::config::INTRO_AUDIO_SRC;
use crate::model::{PageAction, PageState, Phase};
use crate::state::{
    AudioGate, AudioSource, LocalStore, has_interacted, settle_attempt, start_playback,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let page = use_reducer(PageState::default);
    let audio_ref = use_node_ref();
    let gate = use_mut_ref(AudioGate::default);
    let interacted_before = use_state(|| has_interacted(&LocalStore));

    // Unprompted attempt on mount; browsers without a prior gesture usually block it.
    {
        let audio_ref = audio_ref.clone();
        let gate = gate.clone();
        let interacted = *interacted_before;
        use_effect_with((), move |_| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                if gate.borrow_mut().try_autoplay() {
                    log::debug!("intro audio autoplay (interacted before: {})", interacted);
                    let playback = start_playback(&audio);
                    spawn_local(async move {
                        let outcome = playback.await;
                        settle_attempt(
                            &mut gate.borrow_mut(),
                            AudioSource::Autoplay,
                            &outcome,
                            &LocalStore,
                        );
                    });
                }
            }
            || ()
        });
    }

    let unlock_audio = {
        let audio_ref = audio_ref.clone();
        let gate = gate.clone();
        let interacted_before = interacted_before.clone();
        Callback::from(move |_: ()| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                return;
            };
            if !gate.borrow_mut().try_unlock() {
                return;
            }
            let playback = start_playback(&audio);
            let gate = gate.clone();
            let interacted_before = interacted_before.clone();
            spawn_local(async move {
                let outcome = playback.await;
                let persisted = settle_attempt(
                    &mut gate.borrow_mut(),
                    AudioSource::Interaction,
                    &outcome,
                    &LocalStore,
                );
                if persisted {
                    interacted_before.set(true);
                }
            });
        })
    };

    let on_reveal = {
        let page = page.clone();
        Callback::from(move |_| page.dispatch(PageAction::Reveal))
    };

    html! {
        <>
            <audio
                ref={audio_ref}
                id="intro-audio"
                src={INTRO_AUDIO_SRC}
                preload="auto"
                playsinline=true
                crossorigin="anonymous"
            ></audio>
            {
                match page.phase {
                    Phase::Intro => html! {
                        <IntroOverlay
                            on_reveal={on_reveal}
                            on_unlock={unlock_audio}
                            show_hint={!*interacted_before}
                        />
                    },
                    Phase::Revealed => html! { <RevealedPage page={(*page).clone()} /> },
                }
            }
        </>
    }
}
