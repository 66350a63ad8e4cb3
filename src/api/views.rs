use maud::{DOCTYPE, Markup, html};

use crate::data_models::Page;

pub const SPRITE_PATH: &str = "/assets/dickbutt.png";

const OVERLAY_CSS: &str = "img { position: absolute; }";

/// Link back to the same place, so clicking the sprite rolls a new page.
pub fn place_href(place: &str) -> String {
    format!("/{}", urlencoding::encode(place))
}

pub fn overlay_page(page: &Page) -> Markup {
    let body_style = format!(
        "background-image: url('{}'); background-size: cover; background-position: center;",
        page.image_url
    );
    let sprite_style = format!("top:{}%; left:{}%", page.top, page.left);

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (page.place) }
                style { (OVERLAY_CSS) }
            }
            body style=(body_style) {
                a href=(place_href(&page.place)) {
                    img style=(sprite_style) src=(SPRITE_PATH) alt=(page.place);
                }
            }
        }
    }
}

pub fn home_page() -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { "imgurappist" }
            }
            body {
                h1 { "imgurappist" }
                p {
                    "Put a place in the url, e.g. "
                    a href=(place_href("paris")) { "/paris" }
                    "."
                }
            }
        }
    }
}
