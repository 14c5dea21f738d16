use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{characters::CharactersSection, hero::Hero, info::InfoSection};
use crate::model::PageState;
use crate::state::{FrameLoop, Layer, RevealScene};
use crate::util::{apply_pose, pose_style, viewport_width};

/// Static layout rules of each animated layer; the pose is appended per frame.
pub fn layer_base_style(layer: Layer) -> &'static str {
    match layer {
        Layer::Main => {
            "position:fixed; inset:0; z-index:50; width:100%; overflow-y:auto; background:#000;"
        }
        Layer::Sky => {
            "position:absolute; top:0; left:0; width:100%; height:100vh; object-fit:cover; z-index:0;"
        }
        Layer::Background => {
            "position:absolute; top:0; left:0; width:100%; height:100vh; object-fit:cover; z-index:10;"
        }
        Layer::Character => "position:absolute; bottom:-49%; left:26%; z-index:10;",
        Layer::Title => {
            "position:absolute; top:0; left:0; z-index:10; display:flex; flex-direction:column; gap:4px; line-height:1; margin-top:.5em; margin-left:4.5em; color:#fff;"
        }
    }
}

pub fn initial_layer_style(layer: Layer) -> String {
    pose_style(layer_base_style(layer), &layer.initial_pose())
}

#[derive(Properties, PartialEq, Clone)]
pub struct RevealedPageProps {
    pub page: PageState,
}

#[function_component(RevealedPage)]
pub fn revealed_page(props: &RevealedPageProps) -> Html {
    let main_ref = use_node_ref();
    let sky_ref = use_node_ref();
    let bg_ref = use_node_ref();
    let character_ref = use_node_ref();
    let title_ref = use_node_ref();

    {
        let layers = [
            (Layer::Main, main_ref.clone()),
            (Layer::Sky, sky_ref.clone()),
            (Layer::Background, bg_ref.clone()),
            (Layer::Character, character_ref.clone()),
            (Layer::Title, title_ref.clone()),
        ];
        let main_ref = main_ref.clone();
        let page = props.page.clone();
        use_effect_with((), move |_| {
            let scene = Rc::new(RefCell::new(RevealScene::new()));
            // Timestamp of the first reveal frame; scene time is measured from it.
            let origin: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
            let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

            // The loop stops once the scene is at rest; pointer moves start a new one.
            let start_frames: Rc<dyn Fn()> = {
                let scene = scene.clone();
                let origin = origin.clone();
                let frames = frames.clone();
                Rc::new(move || {
                    let scene = scene.clone();
                    let origin = origin.clone();
                    let layers = layers.clone();
                    let frame_loop = FrameLoop::start(move |now| {
                        let start = origin.get().unwrap_or(now);
                        origin.set(Some(start));
                        let frame = scene.borrow().frame(now - start);
                        for (layer, pose) in frame.poses.iter() {
                            if let Some((_, node)) = layers.iter().find(|(l, _)| l == layer) {
                                apply_pose(node, layer_base_style(*layer), pose);
                            }
                        }
                        frame.keep_running
                    });
                    *frames.borrow_mut() = Some(frame_loop);
                })
            };
            start_frames();

            let mousemove_cb = {
                let frames = frames.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let Some(target) = page.pointer_parallax(e.client_x() as f64, viewport_width())
                    else {
                        return;
                    };
                    let now = e.time_stamp() / 1000.0;
                    let elapsed = origin.get().map_or(0.0, |start| now - start);
                    scene.borrow_mut().aim(target, elapsed);
                    let idle = frames.borrow().as_ref().is_none_or(|f| !f.is_running());
                    if idle {
                        start_frames();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let main_el = main_ref.cast::<HtmlElement>();
            if let Some(el) = &main_el {
                if let Err(e) = el
                    .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                {
                    log::warn!("parallax listener not installed: {:?}", e);
                }
            }

            move || {
                if let Some(el) = main_el {
                    let _ = el.remove_event_listener_with_callback(
                        "mousemove",
                        mousemove_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(mousemove_cb);
                frames.borrow_mut().take();
            }
        });
    }

    html! {
        <div ref={main_ref} class="main" style={initial_layer_style(Layer::Main)}>
            <div style="position:relative; min-height:200vh;">
                <Hero
                    sky_ref={sky_ref}
                    bg_ref={bg_ref}
                    title_ref={title_ref}
                    character_ref={character_ref}
                />
                <CharactersSection />
                <InfoSection />
            </div>
        </div>
    }
}
