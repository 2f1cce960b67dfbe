//! Developer & tech tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "👨‍💻 Developer & Tech Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-code-slash",
        vec![
            tool("Code Formatter", "bi-braces", "code-formatter.html"),
            tool("CSS Minifier", "bi-filetype-css", "css-minifier.html"),
            tool("JS Minifier", "bi-filetype-js", "javascript-minifier.html"),
            tool("JSON Formatter", "bi-filetype-json", "json-formatter-validator.html"),
            tool("JSON to CSV", "bi-arrow-right-square-fill", "json-to-csv.html"),
            tool("CSV to JSON", "bi-arrow-left-square-fill", "csv-to-json.html"),
            tool("CSV Viewer", "bi-grid-3x3", "csv-viewer.html"),
            tool("Regex Tester", "bi-regex", "regex-tester.html"),
            tool("Markdown Editor", "bi-markdown-fill", "markdown-editor.html"),
            tool("Markdown to HTML", "bi-filetype-md", "markdown-to-html.html"),
            tool("HTML to Markdown", "bi-file-earmark-richtext-fill", "html-to-markdown.html"),
            tool("URL Encoder/Decoder", "bi-link-45deg", "url-encoder-decoder.html"),
            tool("HTML Encoder/Decoder", "bi-file-code-fill", "html-encoder-decoder.html"),
            tool("Base64 Encoder/Decoder", "bi-journal-code", "base64-encoder-decoder.html"),
            tool("Image to Base64", "bi-card-image", "image-to-base64.html"),
            tool("Color Code Picker", "bi-palette2", "color-code-picker.html"),
            tool("HTML Table Generator", "bi-table", "html-table-generator.html"),
            tool("HTACCESS Redirect Gen", "bi-arrow-left-right", "htaccess-redirect-generator.html"),
            tool("Fake Data Generator", "bi-person-lines-fill", "fake-data-generator.html"),
            tool("API Request Tester", "bi-hdd-network-fill", "api-request-tester.html"),
            tool("AI Chatbot Demo", "bi-robot", "ai-chatbot-demo.html"),
        ],
    )
}
