//! Gallery endpoints: <https://api.imgur.com/endpoints/gallery>

use serde::Deserialize;

use super::image::Image;
use super::{ApiResponse, Client, Envelope, ImgurError};

/// One entry of a gallery listing.
///
/// Gallery endpoints mix images and albums in the same list. Both share most
/// fields, so they are decoded into one type; check `is_album` to tell them
/// apart. Albums carry their pictures in `images`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GalleryResult {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime: Option<i64>,
    pub views: Option<u64>,
    pub vote: Option<String>,
    pub section: Option<String>,
    pub account_url: Option<String>,
    pub ups: Option<i64>,
    pub downs: Option<i64>,
    pub score: Option<i64>,
    pub link: String,
    pub is_album: bool,
    pub nsfw: Option<bool>,
    pub comment_count: Option<u64>,

    // image only
    pub bandwidth: Option<u64>,
    pub deletehash: Option<String>,
    pub animated: Option<bool>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub size: Option<u64>,
    pub gifv: Option<String>,
    pub webm: Option<String>,

    // album only
    pub cover: Option<String>,
    pub cover_width: Option<u32>,
    pub cover_height: Option<u32>,
    pub privacy: Option<String>,
    pub layout: Option<String>,
    pub images_count: Option<u32>,
    pub images: Vec<Image>,
}

pub type GalleryResponse = ApiResponse<Vec<GalleryResult>>;

pub struct GalleryService<'a> {
    client: &'a Client,
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Builds `gallery/{route}/{sort}[/{window}]/{page}`. Negative pages are
/// clamped to zero.
pub fn gallery_path(route: &str, sort: &str, window: &str, page: i64) -> Result<String, ImgurError> {
    if route.is_empty() {
        return Err(ImgurError::MissingParameter("route"));
    }
    if sort.is_empty() {
        return Err(ImgurError::MissingParameter("sort"));
    }

    let mut path = format!("gallery/{route}/{sort}");
    if !window.is_empty() {
        path.push('/');
        path.push_str(window);
    }
    path.push_str(&format!("/{}", page.max(0)));
    Ok(path)
}

impl<'a> GalleryService<'a> {
    pub fn new(client: &'a Client) -> GalleryService<'a> {
        GalleryService { client }
    }

    async fn gallery(
        &self,
        route: &str,
        sort: &str,
        window: &str,
        query: Option<(&str, &str)>,
        page: i64,
    ) -> Result<GalleryResponse, ImgurError> {
        let path = gallery_path(route, sort, window, page)?;
        self.fetch(&path, query).await
    }

    async fn fetch(
        &self,
        path: &str,
        query: Option<(&str, &str)>,
    ) -> Result<GalleryResponse, ImgurError> {
        let mut request = self.client.get(path)?;
        if let Some((key, value)) = query {
            request.url_mut().query_pairs_mut().append_pair(key, value);
        }

        let response = self
            .client
            .execute::<Envelope<Vec<GalleryResult>>>(request)
            .await?;
        Ok(response.map(|envelope| envelope.data))
    }

    /// The main gallery, as seen when simply browsing to imgur.com.
    /// Defaults: section `hot`, sort `viral`, window `day`.
    pub async fn main(
        &self,
        section: &str,
        sort: &str,
        window: &str,
        page: i64,
    ) -> Result<GalleryResponse, ImgurError> {
        self.gallery(
            or_default(section, "hot"),
            or_default(sort, "viral"),
            or_default(window, "day"),
            None,
            page,
        )
        .await
    }

    /// A subreddit gallery. There is no default subreddit; an empty name is
    /// rejected. Defaults: sort `time`, window `week`.
    pub async fn subreddit(
        &self,
        subreddit: &str,
        sort: &str,
        window: &str,
        page: i64,
    ) -> Result<GalleryResponse, ImgurError> {
        if subreddit.is_empty() {
            return Err(ImgurError::MissingParameter("subreddit"));
        }
        let route = format!("r/{subreddit}");
        self.gallery(
            &route,
            or_default(sort, "time"),
            or_default(window, "week"),
            None,
            page,
        )
        .await
    }

    /// The memes subgallery. Defaults: sort `viral`, window `week`.
    pub async fn memes(
        &self,
        sort: &str,
        window: &str,
        page: i64,
    ) -> Result<GalleryResponse, ImgurError> {
        self.gallery(
            "g/memes",
            or_default(sort, "viral"),
            or_default(window, "week"),
            None,
            page,
        )
        .await
    }

    /// Searches the gallery for `q`. Sort is `time` or `viral`, defaulting
    /// to `time`.
    pub async fn search(&self, q: &str, sort: &str, page: i64) -> Result<GalleryResponse, ImgurError> {
        self.gallery("search", or_default(sort, "time"), "", Some(("q", q)), page)
            .await
    }

    /// A random set of gallery images.
    pub async fn random(&self, page: i64) -> Result<GalleryResponse, ImgurError> {
        let path = format!("gallery/random/random/{}", page.max(0));
        self.fetch(&path, None).await
    }
}
