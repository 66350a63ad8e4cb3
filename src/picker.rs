use rand::Rng;

use crate::imgur::{Client, GalleryResult};

/// Shown whenever no usable image can be found.
pub const PLACEHOLDER_URL: &str = "http://s.imgur.com/images/OverCapacity_700.png";

/// Sort order used when searching for a place.
pub const SEARCH_SORT: &str = "top";

/// Picks one result uniformly at random and returns a direct image link for it.
///
/// Albums resolve to their first image. An empty album falls back to the
/// first non-album entry of the whole list.
pub fn pick_image_url<R>(results: &[GalleryResult], rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    if results.is_empty() {
        return PLACEHOLDER_URL.to_string();
    }

    let chosen = &results[rng.random_range(0..results.len())];
    if !chosen.is_album {
        return chosen.link.clone();
    }

    match chosen.images.first() {
        Some(image) => image.link.clone(),
        None => first_image_url(results),
    }
}

/// Link of the first non-album entry, in list order.
pub fn first_image_url(results: &[GalleryResult]) -> String {
    results
        .iter()
        .find(|result| !result.is_album)
        .map(|result| result.link.clone())
        .unwrap_or_else(|| PLACEHOLDER_URL.to_string())
}

/// Searches the gallery for `term` and picks an image from the results.
/// API failures are logged and answered with the placeholder.
pub async fn search_image_url(client: &Client, term: &str) -> String {
    match client.gallery().search(term, SEARCH_SORT, 0).await {
        Ok(response) => {
            log::debug!(
                "search '{term}' returned {} results, rate: {:?}",
                response.body.len(),
                response.rate
            );
            let mut rng = rand::rng();
            pick_image_url(&response.body, &mut rng)
        }
        Err(e) => {
            log::warn!("imgur search for '{term}' failed: {:#}", e);
            PLACEHOLDER_URL.to_string()
        }
    }
}
