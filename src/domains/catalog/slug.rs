//! URL slugs derived from category display names.

/// Create a URL-friendly slug from a category display name.
///
/// Decorative symbols and punctuation are dropped, the remainder is
/// lowercased, and word gaps become single hyphens. Tool page folders are
/// named after these slugs, e.g. "📄 PDF & Document Tools" becomes
/// "pdf-document-tools".
pub fn slugify(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '-')
        .collect();

    let hyphenated = cleaned.split_whitespace().collect::<Vec<_>>().join("-");

    // Literal hyphens in the name can still produce runs.
    let mut slug = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars() {
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches('-').to_string()
}
