use yew::prelude::*;

use super::revealed_page::initial_layer_style;
use crate::config::{BG_IMAGE, CHARACTER_IMAGE, PLATFORM_BADGE, SKY_IMAGE};
use crate::state::Layer;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub sky_ref: NodeRef,
    pub bg_ref: NodeRef,
    pub title_ref: NodeRef,
    pub character_ref: NodeRef,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <div class="landing" style="width:100%; min-height:100vh; background:#000;">
            <div class="navbar" style="position:absolute; top:0; left:0; width:100%; display:flex; gap:28px; padding:40px; z-index:11; box-sizing:border-box;">
                <div class="logo" style="display:flex; gap:28px;">
                    <div class="lines" style="display:flex; flex-direction:column; gap:5px;">
                        <div style="height:6px; width:52px; background:#fff;"></div>
                        <div style="height:6px; width:32px; background:#fff;"></div>
                        <div style="height:6px; width:20px; background:#fff;"></div>
                    </div>
                </div>
                <h3 style="margin:-8.8px 0 0 0; font-size:36px; color:#fff;">{"ROCKSTAR"}</h3>
            </div>

            <div class="imagesdiv" style="position:relative; overflow:hidden; width:100%; height:100vh;">
                <img
                    ref={props.sky_ref.clone()}
                    class="sky"
                    style={initial_layer_style(Layer::Sky)}
                    src={SKY_IMAGE}
                    alt="sky"
                />
                <img
                    ref={props.bg_ref.clone()}
                    class="bg"
                    style={initial_layer_style(Layer::Background)}
                    src={BG_IMAGE}
                    alt="background"
                />
                <div ref={props.title_ref.clone()} class="text" style={initial_layer_style(Layer::Title)}>
                    <h1 style="margin:0 0 0 -1.75em; font-size:1em; font-weight:normal;">{"grand"}</h1>
                    <h1 style="margin:0 0 0 1.4em; font-size:1em; font-weight:normal;">{"theft"}</h1>
                    <h1 style="margin:0 0 0 -1.7em; font-size:1em; font-weight:normal;">{"auto"}</h1>
                </div>
                <img
                    ref={props.character_ref.clone()}
                    class="girl"
                    style={initial_layer_style(Layer::Character)}
                    src={CHARACTER_IMAGE}
                    alt="lucia"
                />
                <div class="bottom-bar" style="position:absolute; bottom:0; left:0; width:100%; display:flex; color:#fff; padding:36px 40px; box-sizing:border-box; background:linear-gradient(to top, #000, transparent); z-index:10;">
                    <div style="display:flex; align-items:center; gap:12px;">
                        <span style="font-size:24px;">{"\u{2193}"}</span>
                        <h3 style="margin:0; font-family:sans-serif; font-size:20px;">{"Scroll Down"}</h3>
                    </div>
                    <img
                        class="psimg"
                        style="position:absolute; height:54px; width:300px; top:50%; left:50%; transform:translate(-50%, -50%);"
                        src={PLATFORM_BADGE}
                        alt="platform"
                    />
                </div>
            </div>
        </div>
    }
}
