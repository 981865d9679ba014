//! Text helpers shared by server and generator
//!
//! Slug generation must be deterministic: the generator relies on
//! identical product input producing an identical slug so that re-runs
//! hit the unique-slug constraint instead of duplicating articles.

/// Convert an arbitrary title into a URL-safe slug.
///
/// Lowercases, maps runs of non-alphanumeric characters to single
/// hyphens, and trims leading/trailing hyphens. Returns an empty string
/// for input with no alphanumeric content; callers treat that as a
/// validation error.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_was_hyphen = true; // suppress leading hyphen

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Check that a slug is well-formed: non-empty, lowercase ASCII
/// alphanumerics and hyphens only, no leading/trailing/double hyphen.
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 255 {
        return false;
    }
    if slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Build an outbound affiliate link for a marketplace item.
///
/// The partner tag is carried as a `tag` query parameter, which is what
/// the marketplace uses for attribution.
pub fn affiliate_url(marketplace_base: &str, asin: &str, partner_tag: &str) -> String {
    format!(
        "{}/dp/{}?tag={}",
        marketplace_base.trim_end_matches('/'),
        asin,
        partner_tag
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Best Headphones 2024!"), "best-headphones-2024");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("  trimmed  "), "trimmed");
    }

    #[test]
    fn test_slugify_empty_for_symbols_only() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        let a = slugify("USB-C Hub Review: 7-in-1");
        let b = slugify("USB-C Hub Review: 7-in-1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("hello-world-2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("Upper"));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn test_affiliate_url() {
        assert_eq!(
            affiliate_url("https://www.example-market.com", "B0TEST123", "nectar-20"),
            "https://www.example-market.com/dp/B0TEST123?tag=nectar-20"
        );
        // trailing slash on the base must not double up
        assert_eq!(
            affiliate_url("https://www.example-market.com/", "B0TEST123", "nectar-20"),
            "https://www.example-market.com/dp/B0TEST123?tag=nectar-20"
        );
    }
}
