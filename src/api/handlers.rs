use axum::extract::{Path, State};
use maud::Markup;
use std::sync::Arc;

use crate::data_models::Page;
use crate::picker::search_image_url;

use super::AppState;
use super::views;

pub async fn home_handler() -> Markup {
    views::home_page()
}

pub async fn overlay_handler(
    State(state): State<Arc<AppState>>,
    Path(place): Path<String>,
) -> Markup {
    let image_url = search_image_url(&state.imgur, &place).await;
    let page = Page::new(image_url, place, &mut rand::rng());
    log::debug!("rendering page: {:?}", page);
    views::overlay_page(&page)
}
