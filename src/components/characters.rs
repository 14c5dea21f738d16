use yew::prelude::*;

use super::character_menu::CharacterMenu;
use crate::model::roster;

#[function_component(CharactersSection)]
pub fn characters_section() -> Html {
    let items = use_memo((), |_| roster());
    html! {
        <div id="characters" class="about" style="position:relative; width:100%; height:100vh; padding:20px 0; box-sizing:border-box; color:#fff; background:#000;">
            <h2 style="position:absolute; top:40px; left:0; width:100%; text-align:center; margin:0; font-size:36px; z-index:2;">{"Characters"}</h2>
            <CharacterMenu items={(*items).clone()} />
        </div>
    }
}
