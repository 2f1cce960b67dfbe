//! Social media tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "👥 Social Media Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-share-fill",
        vec![
            tool("YT Thumbnail Downloader", "bi-youtube", "youtube-thumbnail-downloader.html"),
            tool("YT Tags Extractor", "bi-tags-fill", "youtube-tags-extractor.html"),
            tool("Instagram Photo DL", "bi-instagram", "instagram-photo-downloader.html"),
            tool("Social Video DL", "bi-camera-video-off-fill", "social-media-video-downloader.html"),
            tool("Hashtag Generator", "bi-hash", "hashtag-generator.html"),
            tool("Social Post Generator", "bi-megaphone-fill", "social-media-post-generator.html"),
            tool("Twitter Char Counter", "bi-twitter-x", "twitter-character-counter.html"),
            tool("Emoji Keyboard", "bi-emoji-smile-fill", "emoji-keyboard.html"),
        ],
    )
}
