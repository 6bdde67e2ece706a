//! URL slug derivation.

/// Derive a URL slug from a title.
///
/// ASCII alphanumeric runs are lowercased and joined by single dashes;
/// everything else is dropped. Titles with no sluggable characters yield
/// an empty string, which callers substitute with their own fallback.
pub fn for_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
