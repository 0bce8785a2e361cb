pub mod artist;
pub mod show;
pub mod venue;

/// LIKE 子串匹配模式，空串退化为匹配全部
pub(crate) fn search_pattern(term: &str) -> String {
    format!("%{}%", term)
}

#[cfg(test)]
mod tests {
    use super::search_pattern;

    #[test]
    fn search_pattern_wraps_term() {
        assert_eq!(search_pattern("Music"), "%Music%");
    }

    #[test]
    fn search_pattern_empty_term_matches_all() {
        assert_eq!(search_pattern(""), "%%");
    }
}
