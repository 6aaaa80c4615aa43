//! Document tokenizer - Turns raw document text into a word list
//!
//! Lines are split on single spaces. A fragment ending in `-` as the last
//! fragment of its line is a soft line-break hyphen: it is held back and
//! joined with the first fragment of the next line, unless that line starts
//! with a space (the prefix then stays pending). Every appended fragment is
//! trimmed of the punctuation in [`REMOVABLES`].
//!
//! This pipeline feeds word search and the summary table. The concordance
//! builder scans documents with its own, different rules (see
//! [`crate::core::concordance`]).
//!
//! ```rust
//! use wordlens::core::tokenizer::tokenize;
//!
//! let words = tokenize("A well-\nknown (fact).");
//! assert_eq!(words, vec!["A", "wellknown", "fact"]);
//! ```

use crate::core::model::WordList;

/// Characters trimmed from both ends of every token
pub const REMOVABLES: &[char] = &[
    '!', ',', '.', '"', '[', ']', '(', ')', '{', '}', '~', '?', '`',
];

/// Trim [`REMOVABLES`] from both ends, leaving interior characters alone
pub fn clean_token(fragment: &str) -> &str {
    fragment.trim_matches(REMOVABLES)
}

/// Tokenize a whole document
pub fn tokenize(text: &str) -> WordList {
    tokenize_lines(text.lines())
}

/// Tokenize a document given as lines without their terminators
pub fn tokenize_lines<'a, I>(lines: I) -> WordList
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = WordList::new();
    // Word part of a soft-hyphenated fragment awaiting the next line
    let mut pending: Option<String> = None;

    for line in lines {
        let mut merge = pending.is_some() && !line.starts_with(' ');

        let fragments: Vec<&str> = line.split(' ').collect();
        let last = fragments.len() - 1;

        for (index, fragment) in fragments.iter().copied().enumerate() {
            if fragment == "-" {
                continue;
            }

            if merge {
                if let Some(prefix) = pending.take() {
                    let joined = prefix + fragment;
                    tokens.push(clean_token(&joined).to_string());
                }
                merge = false;
                continue;
            }

            if let Some(stem) = fragment.strip_suffix('-') {
                if index == last {
                    pending = Some(stem.to_string());
                } else {
                    tokens.push(strip_hyphens(fragment));
                }
            } else if fragment.starts_with('-') {
                tokens.push(strip_hyphens(fragment));
            } else {
                tokens.push(clean_token(fragment).to_string());
            }
        }
    }

    tokens
}

fn strip_hyphens(fragment: &str) -> String {
    clean_token(&fragment.replace('-', "")).to_string()
}
