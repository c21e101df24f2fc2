//! Lint rule implementations.
//!
//! Each rule lives in its own file and implements [`crate::LintRule`]. Rules
//! scan raw text with regexes and character loops; none of them parse.

/// Keywords that start a complete query or update statement
pub const QUERY_FORM_KEYWORDS: &[&str] =
    &["SELECT", "CONSTRUCT", "ASK", "DESCRIBE", "INSERT", "DELETE"];

/// Clause keywords that open a line inside a group pattern without being a triple
pub const RESERVED_CLAUSE_KEYWORDS: &[&str] = &[
    "FILTER", "OPTIONAL", "BIND", "SERVICE", "GRAPH", "VALUES", "MINUS", "UNION",
];

/// Case-insensitive check that `line` opens with one of `keywords` as a whole word.
pub fn starts_with_keyword(line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        let Some(head) = line.get(..keyword.len()) else {
            return false;
        };
        head.eq_ignore_ascii_case(keyword)
            && !line[keyword.len()..].starts_with(|c: char| c.is_alphanumeric() || c == '_')
    })
}

/// Iterate `(byte offset, line)` pairs of `text`, offsets shifted by `base`.
///
/// Lines are split on `\n` only; a trailing `\r` stays on the line.
pub fn lines_with_offsets(text: &str, base: usize) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').scan(base, |offset, line| {
        let start = *offset;
        *offset += line.len() + 1;
        Some((start, line))
    })
}

mod missing_query_form;
mod prefix_iri_brackets;
mod prefix_name_colon;
mod select_without_where;
mod triple_separator;
mod unbalanced_braces;
mod unclosed_iri;

pub use missing_query_form::MissingQueryFormRuleImpl;
pub use prefix_iri_brackets::PrefixIriBracketsRuleImpl;
pub use prefix_name_colon::PrefixNameColonRuleImpl;
pub use select_without_where::SelectWithoutWhereRuleImpl;
pub use triple_separator::TripleSeparatorRuleImpl;
pub use unbalanced_braces::UnbalancedBracesRuleImpl;
pub use unclosed_iri::UnclosedIriRuleImpl;
