//! Image endpoints: <https://api.imgur.com/endpoints/image>

use serde::Deserialize;

use super::{ApiResponse, Client, Envelope, ImgurError};

pub const THUMB_SMALL_SQUARE: &str = "s"; // 90x90
pub const THUMB_BIG_SQUARE: &str = "b"; // 160x160
pub const THUMB_SMALL: &str = "t"; // 160x160
pub const THUMB_MEDIUM: &str = "m"; // 320x320
pub const THUMB_LARGE: &str = "l"; // 640x640
pub const THUMB_HUGE: &str = "h"; // 1024x1024

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Time inserted into the gallery, epoch seconds.
    pub datetime: Option<i64>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub animated: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Size in bytes.
    pub size: Option<u64>,
    pub views: Option<u64>,
    pub bandwidth: Option<u64>,
    /// Only present when authenticated as the image owner.
    pub deletehash: Option<String>,
    pub section: Option<String>,
    /// Direct link to the image.
    pub link: String,
    pub nsfw: Option<bool>,
    pub gifv: Option<String>,
    pub mp4: Option<String>,
    pub webm: Option<String>,
    pub looping: Option<bool>,
}

impl Image {
    /// Link to a resized copy of the image, e.g. `abc.jpg` -> `abcm.jpg` for
    /// [`THUMB_MEDIUM`]. Links without an extension get the suffix appended.
    pub fn thumbnail(&self, size: &str) -> String {
        let name_start = self.link.rfind('/').map_or(0, |i| i + 1);
        match self.link[name_start..].rfind('.') {
            Some(dot) => {
                let dot = name_start + dot;
                format!("{}{}{}", &self.link[..dot], size, &self.link[dot..])
            }
            None => format!("{}{}", self.link, size),
        }
    }
}

pub struct ImageService<'a> {
    client: &'a Client,
}

impl<'a> ImageService<'a> {
    pub fn new(client: &'a Client) -> ImageService<'a> {
        ImageService { client }
    }

    /// Fetches metadata for a single image.
    pub async fn info(&self, id: &str) -> Result<ApiResponse<Image>, ImgurError> {
        if id.is_empty() {
            return Err(ImgurError::MissingParameter("id"));
        }
        let request = self.client.get(&format!("image/{id}"))?;
        let response = self.client.execute::<Envelope<Image>>(request).await?;
        Ok(response.map(|envelope| envelope.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(link: &str) -> Image {
        Image {
            link: link.to_string(),
            ..Image::default()
        }
    }

    #[test]
    fn test_thumbnail() {
        assert_eq!(
            image("http://i.imgur.com/1YUpmrH.jpg").thumbnail(THUMB_MEDIUM),
            "http://i.imgur.com/1YUpmrHm.jpg"
        );
        assert_eq!(
            image("http://i.imgur.com/4C06G.gif").thumbnail(THUMB_SMALL_SQUARE),
            "http://i.imgur.com/4C06Gs.gif"
        );
    }

    #[test]
    fn test_thumbnail_without_extension() {
        assert_eq!(
            image("http://i.imgur.com/abc").thumbnail(THUMB_HUGE),
            "http://i.imgur.com/abch"
        );
    }
}
