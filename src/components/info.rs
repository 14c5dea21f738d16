use yew::prelude::*;

use crate::config::{DOWNLOAD_URL, INFO_IMAGE};

#[function_component(InfoSection)]
pub fn info_section() -> Html {
    html! {
        <div class="info" style="display:flex; align-items:center; justify-content:center; width:100%; padding:0 40px; box-sizing:border-box; color:#fff; background:#000;">
            <div style="position:relative; display:flex; justify-content:space-around; align-items:center; width:100%;">
                <img style="position:relative; transform:scale(1.04);" src={INFO_IMAGE} alt="" />
                <div style="width:100%; padding:2em; font-size:60px; line-height:1.2;">
                    <h1 style="margin:0;">{"Still Running"}</h1>
                    <h1 style="margin:0;">{"Not hunting"}</h1>
                    <p style="font-size:30px; font-style:italic; font-weight:bold; font-family:Georgia, serif; padding:2rem 0; line-height:1.3;">
                        {"GTA 6 is the next chapter of the colossal Grand Theft Auto Series. The game is scheduled to be released on May 26, 2026 for PlayStation 5 and Xbox Series X|S."}
                        <br />
                        {"Grand Theft Auto VI will be taking place in Vice City, with two main protagonists - a male named Jason, and for the first time in the series a female - named Lucia. The GTA 6 story is influenced by the Great Depression-era bank-robbing couple, Bonnie and Clyde."}
                    </p>
                    <a
                        href={DOWNLOAD_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        style="display:inline-block; width:10em; height:2em; line-height:2em; text-align:center; border-radius:8px; font-size:24px; color:#000; background:#fef08a; text-decoration:none;"
                    >{"Download"}</a>
                </div>
            </div>
        </div>
    }
}
