//! PDF & document tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "📄 PDF & Document Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-file-earmark-pdf-fill",
        vec![
            tool("PDF Merger", "bi-files", "pdf-merger.html"),
            tool("PDF Splitter", "bi-scissors", "pdf-splitter.html"),
            tool("PDF Compressor", "bi-file-earmark-zip-fill", "pdf-compressor.html"),
            tool("PDF to Word", "bi-file-earmark-word-fill", "pdf-to-word.html"),
            tool("Word to PDF", "bi-file-earmark-font-fill", "word-to-pdf.html"),
            tool("PDF to Excel", "bi-file-earmark-excel-fill", "pdf-to-excel.html"),
            tool("Excel to PDF", "bi-table", "excel-to-pdf.html"),
            tool("PDF to JPG/PNG", "bi-file-earmark-image-fill", "pdf-to-jpg-png.html"),
            tool("JPG/PNG to PDF", "bi-image-fill", "jpg-png-to-pdf.html"),
            tool("HTML to PDF", "bi-filetype-html", "html-to-pdf.html"),
            tool("Screenshot to PDF", "bi-camera-reels-fill", "screenshot-to-pdf.html"),
            tool("eSign PDF", "bi-pen-fill", "esign-pdf.html"),
            tool("PDF Unlocker", "bi-unlock-fill", "pdf-unlocker.html"),
            tool("PDF Protector", "bi-lock-fill", "pdf-protector.html"),
            tool("PDF Page Organizer", "bi-view-stacked", "pdf-page-organizer.html"),
            tool("PDF Page Number Adder", "bi-123", "pdf-page-number-adder.html"),
            tool("PDF Watermark", "bi-droplet-half", "pdf-watermark.html"),
            tool("PDF Notes Highlighter", "bi-highlighter", "pdf-notes-highlighter.html"),
            tool("Resume Builder", "bi-person-vcard-fill", "resume-builder.html"),
            tool("Invoice Generator", "bi-receipt-cutoff", "invoice-generator.html"),
            tool("E-book Creator", "bi-book-half", "ebook-creator.html"),
            tool("PDF Redaction Tool", "bi-eraser-fill", "pdf-redaction.html"),
            tool("PDF Repair Tool", "bi-wrench-adjustable", "pdf-repair.html"),
            tool("PDF to PDF/A Converter", "bi-archive-fill", "pdf-to-pdfa.html"),
            tool("Extract Images from PDF", "bi-images", "extract-images-from-pdf.html"),
            tool("PDF Metadata Editor", "bi-info-circle-fill", "pdf-metadata-editor.html"),
            tool("Scan to PDF with Deskew", "bi-aspect-ratio-fill", "scan-to-pdf-deskew.html"),
            tool("PDF Comparison Tool", "bi-distribute-vertical", "pdf-comparison.html"),
            tool("PDF Flattener", "bi-layers-half", "pdf-flattener.html"),
        ],
    )
}
