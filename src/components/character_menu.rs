use yew::prelude::*;

use crate::model::Character;

// Horizontal travel, in px, before a drag or swipe counts as a step.
const SWIPE_PX: f64 = 40.0;

/// Moves `current` by `delta` around a ring of `len` entries.
pub fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

fn swipe_step(start_x: f64, end_x: f64) -> isize {
    let dx = end_x - start_x;
    if dx <= -SWIPE_PX {
        1
    } else if dx >= SWIPE_PX {
        -1
    } else {
        0
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CharacterMenuProps {
    pub items: Vec<Character>,
}

/// Endless carousel over the character roster.
#[function_component(CharacterMenu)]
pub fn character_menu(props: &CharacterMenuProps) -> Html {
    let index = use_state(|| 0usize);
    let drag_start = use_mut_ref(|| None::<f64>);
    let len = props.items.len();

    let step = {
        let index = index.clone();
        Callback::from(move |delta: isize| {
            if delta != 0 {
                index.set(wrap_index(*index, delta, len));
            }
        })
    };

    let prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(-1))
    };
    let next = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(1))
    };
    let onwheel = {
        let step = step.clone();
        Callback::from(move |e: WheelEvent| {
            let d = if e.delta_x().abs() > e.delta_y().abs() { e.delta_x() } else { 0.0 };
            if d.abs() > 10.0 {
                e.prevent_default();
                step.emit(if d > 0.0 { 1 } else { -1 });
            }
        })
    };
    let onmousedown = {
        let drag_start = drag_start.clone();
        Callback::from(move |e: MouseEvent| {
            *drag_start.borrow_mut() = Some(e.client_x() as f64);
        })
    };
    let onmouseup = {
        let drag_start = drag_start.clone();
        let step = step.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(start) = drag_start.borrow_mut().take() {
                step.emit(swipe_step(start, e.client_x() as f64));
            }
        })
    };
    let ontouchstart = {
        let drag_start = drag_start.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t) = e.touches().item(0) {
                *drag_start.borrow_mut() = Some(t.client_x() as f64);
            }
        })
    };
    let ontouchend = {
        let drag_start = drag_start.clone();
        let step = step.clone();
        Callback::from(move |e: TouchEvent| {
            let start = drag_start.borrow_mut().take();
            if let (Some(start), Some(t)) = (start, e.changed_touches().item(0)) {
                step.emit(swipe_step(start, t.client_x() as f64));
            }
        })
    };

    let Some(active) = props.items.get(*index) else {
        return html! {};
    };

    let dots = props.items.iter().enumerate().map(|(i, c)| {
        let on_dot = {
            let index = index.clone();
            Callback::from(move |_: MouseEvent| index.set(i))
        };
        let bg = if i == *index { "#fff" } else { "rgba(255,255,255,0.3)" };
        html! {
            <button
                key={c.title.clone()}
                onclick={on_dot}
                title={c.title.clone()}
                style={format!("width:10px; height:10px; padding:0; border:none; border-radius:50%; cursor:pointer; background:{};", bg)}
            />
        }
    });

    html! {
        <div
            class="character-menu"
            style="position:relative; width:100%; height:100%; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:20px; user-select:none; cursor:grab;"
            {onwheel}
            {onmousedown}
            {onmouseup}
            {ontouchstart}
            {ontouchend}
        >
            <div style="display:flex; align-items:center; gap:32px;">
                <button onclick={prev} style="font-size:32px; background:none; border:none; color:#fff; cursor:pointer;">{"\u{2039}"}</button>
                <img
                    src={active.image.clone()}
                    alt={active.title.clone()}
                    draggable="false"
                    style="width:min(360px, 60vw); aspect-ratio:1; object-fit:cover; border-radius:50%; box-shadow:0 0 40px rgba(255,255,255,0.15);"
                />
                <button onclick={next} style="font-size:32px; background:none; border:none; color:#fff; cursor:pointer;">{"\u{203A}"}</button>
            </div>
            <div style="max-width:560px; text-align:center; padding:0 16px;">
                <h3 style="margin:0 0 8px 0; font-size:32px; text-transform:uppercase;">{active.title.clone()}</h3>
                <p style="margin:0 0 14px 0; font-size:16px; line-height:1.5; opacity:0.85;">{active.description.clone()}</p>
                <a
                    href={active.link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    style="display:inline-block; padding:8px 18px; border-radius:999px; background:#fff; color:#000; text-decoration:none; font-weight:bold;"
                >{"\u{2197}"}</a>
            </div>
            <div style="display:flex; gap:8px;">{ for dots }</div>
        </div>
    }
}
