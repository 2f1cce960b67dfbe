//! Image, video & audio tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "🎨 Image, Video & Audio Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-image-alt",
        vec![
            tool("Image Resizer", "bi-aspect-ratio", "image-resizer.html"),
            tool("Image Compressor", "bi-arrows-angle-contract", "image-compressor.html"),
            tool("Image Cropper", "bi-crop", "image-cropper.html"),
            tool("Image to PNG", "bi-filetype-png", "image-to-png.html"),
            tool("Image to JPG", "bi-filetype-jpg", "image-to-jpg.html"),
            tool("WebP Converter", "bi-filetype-webp", "webp-converter.html"),
            tool("Image Batch Converter", "bi-collection-fill", "image-batch-converter.html"),
            tool("BG Remover", "bi-person-bounding-box", "image-background-remover.html"),
            tool("Passport Photo Maker", "bi-person-badge-fill", "passport-photo-maker.html"),
            tool("Photo to Sketch", "bi-pencil-fill", "photo-to-sketch.html"),
            tool("Photo Collage Maker", "bi-grid-1x2-fill", "photo-collage-maker.html"),
            tool("Image Watermark", "bi-water", "image-watermark.html"),
            tool("Image Color Extractor", "bi-eyedropper", "image-color-extractor.html"),
            tool("Meme Generator", "bi-emoji-laughing-fill", "meme-generator.html"),
            tool("GIF Maker", "bi-filetype-gif", "gif-maker.html"),
            tool("Video Compressor", "bi-camera-video-fill", "video-compressor.html"),
            tool("Video to Audio", "bi-file-earmark-music-fill", "video-to-audio.html"),
            tool("Slideshow Maker", "bi-easel-fill", "slideshow-maker.html"),
            tool("Audio Joiner", "bi-union", "audio-joiner.html"),
            tool("Audio Noise Remover", "bi-earbuds", "audio-noise-remover.html"),
            tool("Audio Speed Changer", "bi-speedometer2", "audio-speed-changer.html"),
            tool("Audio Pitch Changer", "bi-soundwave", "audio-pitch-changer.html"),
            tool("Screen Recorder", "bi-record-circle-fill", "screen-recorder.html"),
            tool("Webcam Photo Capture", "bi-webcam-fill", "webcam-photo-capture.html"),
        ],
    )
}
