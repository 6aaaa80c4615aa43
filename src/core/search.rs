//! Occurrence counting over a word list

/// Count tokens that contain `query` as a case-insensitive substring.
///
/// Each matching token counts once, however often the query appears in it.
/// An empty query is contained in every token, so it counts the whole list
/// (empty tokens included); callers that want to refuse it should validate
/// first with [`crate::core::validate::validate_search_word`].
pub fn count_occurrences<S: AsRef<str>>(words: &[S], query: &str) -> usize {
    let target = query.to_lowercase();

    words
        .iter()
        .filter(|word| word.as_ref().to_lowercase().contains(&target))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        assert_eq!(count_occurrences(&["Apple", "apply", "grape"], "app"), 2);
    }

    #[test]
    fn test_case_insensitive_query() {
        assert_eq!(count_occurrences(&["Apple", "apply", "grape"], "APP"), 2);
    }

    #[test]
    fn test_token_counts_once() {
        assert_eq!(count_occurrences(&["banana"], "an"), 1);
    }

    #[test]
    fn test_empty_query_counts_every_token() {
        assert_eq!(count_occurrences(&["Apple", "", "grape"], ""), 3);
    }

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(count_occurrences(&empty, "x"), 0);
    }

    #[test]
    fn test_hyphenated_query() {
        assert_eq!(
            count_occurrences(&["well-known", "wellknown", "Well-Known!"], "well-known"),
            2
        );
    }

    #[test]
    fn test_owned_word_list() {
        let words = vec!["Fox".to_string(), "foxes".to_string(), "dog".to_string()];
        assert_eq!(count_occurrences(&words, "fox"), 2);
    }
}
