//! Embedded top-level-domain table for URL classification.
//!
//! A deliberately small slice of the IANA registry: the generic domains
//! plus the country codes that show up in ordinary note-taking. Tokens
//! whose final host label is not listed here fall through to note-title
//! or literal-text handling.

const KNOWN_TLDS: &[&str] = &[
    "app", "art", "asia", "au", "be", "biz", "blog", "br", "ca", "cat", "cc", "ch", "cloud",
    "cn", "co", "com", "cz", "de", "dev", "dk", "edu", "es", "eu", "fi", "fm", "fr", "gg",
    "gov", "gr", "hk", "hu", "id", "ie", "il", "in", "info", "int", "io", "ir", "is", "it",
    "jobs", "jp", "kr", "la", "life", "link", "live", "lol", "ltd", "me", "media", "mil",
    "mobi", "mx", "name", "net", "news", "nl", "no", "nu", "nz", "one", "online", "org",
    "page", "ph", "pl", "pro", "pt", "ru", "se", "sg", "sh", "shop", "site", "sk", "so",
    "space", "store", "tech", "tel", "to", "top", "travel", "tv", "tw", "ua", "uk", "us",
    "vn", "wiki", "work", "world", "xyz", "za", "zone",
];

pub(crate) fn is_known_tld(label: &str) -> bool {
    let lowered = label.to_ascii_lowercase();
    KNOWN_TLDS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::is_known_tld;

    #[test]
    fn matches_are_case_insensitive() {
        assert!(is_known_tld("com"));
        assert!(is_known_tld("COM"));
        assert!(is_known_tld("Io"));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(!is_known_tld("backup"));
        assert!(!is_known_tld("2"));
        assert!(!is_known_tld(""));
    }
}
