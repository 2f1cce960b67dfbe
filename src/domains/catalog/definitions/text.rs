//! Text & content tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "✍️ Text & Content Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-fonts",
        vec![
            tool("OCR (Image to Text)", "bi-camera-fill", "ocr-image-to-text.html"),
            tool("Handwriting to Text", "bi-pencil-square", "handwriting-to-text.html"),
            tool("Word Counter", "bi-card-text", "word-counter.html"),
            tool("Character Counter", "bi-input-cursor-text", "character-counter.html"),
            tool("Text Diff Checker", "bi-subtract", "text-diff-checker.html"),
            tool("Plagiarism Checker", "bi-search-heart-fill", "plagiarism-checker.html"),
            tool("Grammar Checker", "bi-spellcheck", "grammar-checker.html"),
            tool("Essay Rephraser", "bi-arrow-repeat", "essay-rephraser.html"),
            tool("Text Summarizer", "bi-text-wrap", "text-summarizer.html"),
            tool("Case Converter", "bi-type", "case-converter.html"),
            tool("Lorem Ipsum Generator", "bi-blockquote-left", "lorem-ipsum-generator.html"),
            tool("Random Text Generator", "bi-shuffle", "random-text-generator.html"),
            tool("Fancy Text Generator", "bi-magic", "fancy-text-generator.html"),
            tool("Text-to-Speech", "bi-volume-up-fill", "text-to-speech.html"),
            tool("Speech-to-Text", "bi-mic-fill", "speech-to-text.html"),
            tool("Story Plot Generator", "bi-lightbulb-fill", "story-plot-generator.html"),
            tool("Privacy Policy Generator", "bi-shield-lock-fill", "privacy-policy-generator.html"),
        ],
    )
}
