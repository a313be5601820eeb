// ABOUTME: Shared utility functions for VendorWorld
// ABOUTME: ID generation and text matching helpers

/// Generate a prefixed record id, e.g. `rfq-V1StGXR8_Z5jdHi6B-myT`
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, nanoid::nanoid!())
}

/// First `len` characters of an identifier, used where a display name is unavailable
pub fn short_id(id: &str, len: usize) -> String {
    id.chars().take(len).collect()
}

/// Case-insensitive substring match over any of the given fields.
/// An empty search term matches everything.
pub fn matches_search(term: &str, fields: &[Option<&str>]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id() {
        let id1 = generate_id("rfq");
        let id2 = generate_id("rfq");

        assert!(id1.starts_with("rfq-"));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_short_id_handles_short_input() {
        assert_eq!(short_id("abcdefghijkl", 8), "abcdefgh");
        assert_eq!(short_id("abc", 8), "abc");
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("", &[None]));
        assert!(matches_search("ACME", &[Some("Jane"), Some("Acme Corp")]));
        assert!(!matches_search("globex", &[Some("Jane"), None]));
    }
}
