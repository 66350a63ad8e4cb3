use rand::Rng;

/// Offsets are percentages in `[0, MAX_OFFSET)` so the sprite stays on screen.
pub const MAX_OFFSET: u8 = 80;

/// Everything needed to render one overlay page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub image_url: String,
    pub top: u8,
    pub left: u8,
    pub place: String,
}

impl Page {
    pub fn new<R>(image_url: String, place: String, rng: &mut R) -> Page
    where
        R: Rng + ?Sized,
    {
        Page {
            image_url,
            top: rng.random_range(0..MAX_OFFSET),
            left: rng.random_range(0..MAX_OFFSET),
            place,
        }
    }
}
