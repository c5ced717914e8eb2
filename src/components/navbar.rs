//! Fixed top navigation. The shared scroll handler flips its `scrolled`
//! class past the threshold; links use the smooth in-page scroll.

use yew::prelude::*;

use crate::utils::dom::smooth_scroll_onclick;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#themes", "Themes"),
    ("#prizes", "Prizes"),
    ("#faq", "FAQ"),
    ("#sponsors", "Sponsors"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={smooth_scroll_onclick()}>
                    {"HACK"}<span class="logo-accent">{"HUB"}</span>
                </a>
                <ul class="nav-links">
                    { for NAV_LINKS.iter().map(|&(href, label)| html! {
                        <li key={href}>
                            <a {href} onclick={smooth_scroll_onclick()}>{label}</a>
                        </li>
                    }) }
                    <li>
                        <a href="#register" class="nav-cta" onclick={smooth_scroll_onclick()}>
                            {"Register"}
                        </a>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
