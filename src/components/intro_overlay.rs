use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::INTRO_NIGHT_SKY;
use crate::state::{FrameLoop, IntroSequencer, Transform};
use crate::util::{apply_pose, pose_style};

const MASK_GROUP_STYLE: &str = "transform-origin:50% 50%; transform-box:fill-box;";

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub on_reveal: Callback<()>,
    pub on_unlock: Callback<()>,
    /// Shown only until a gesture has ever unlocked audio on this browser.
    pub show_hint: bool,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    let mask_ref = use_node_ref();

    {
        let mask_ref = mask_ref.clone();
        let on_reveal = props.on_reveal.clone();
        use_effect_with((), move |_| {
            let mut sequencer = IntroSequencer::new();
            let mut origin = None;
            let frames = FrameLoop::start(move |now| {
                let start = *origin.get_or_insert(now);
                let frame = sequencer.step(now - start);
                apply_pose(&mask_ref, MASK_GROUP_STYLE, &frame.mask);
                if frame.reveal {
                    // Emitted after this frame returns: the reveal unmounts us and drops the loop.
                    let on_reveal = on_reveal.clone();
                    spawn_local(async move { on_reveal.emit(()) });
                    return false;
                }
                true
            });
            move || drop(frames)
        });
    }

    let onclick = {
        let cb = props.on_unlock.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let ontouchstart = {
        let cb = props.on_unlock.clone();
        Callback::from(move |_: TouchEvent| cb.emit(()))
    };

    html! {
        <div
            class="svg"
            style="position:fixed; top:0; left:0; z-index:100; width:100%; height:100vh; display:flex; justify-content:center; align-items:center; overflow:hidden; cursor:pointer; background-color:#000;"
            {onclick}
            {ontouchstart}
        >
            <svg viewBox="0 0 800 600" preserveAspectRatio="xMidYMid meet">
                <defs>
                    <mask id="viMask">
                        <rect width="100%" height="100%" fill="black" />
                        <g
                            ref={mask_ref}
                            class="vi-mask-group"
                            style={pose_style(MASK_GROUP_STYLE, &Transform::default())}
                        >
                            <text
                                x="50%"
                                y="50%"
                                font-size="250"
                                text-anchor="middle"
                                fill="white"
                                dominant-baseline="middle"
                                font-family="Arial Black"
                            >{"VI"}</text>
                        </g>
                    </mask>
                </defs>
                <rect width="100%" height="100%" fill="black" />
                <image
                    href={INTRO_NIGHT_SKY}
                    width="100%"
                    height="100%"
                    preserveAspectRatio="xMidYMid meet"
                    transform="translate(400 300) scale(0.95) translate(-400 -300)"
                    mask="url(#viMask)"
                />
            </svg>
            if props.show_hint {
                <div style="position:absolute; bottom:32px; width:100%; text-align:center; color:rgba(255,255,255,0.55); font-family:sans-serif; font-size:13px; letter-spacing:0.2em; pointer-events:none;">
                    {"TAP FOR SOUND"}
                </div>
            }
        </div>
    }
}
