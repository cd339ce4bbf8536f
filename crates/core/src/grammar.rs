//! Natural-language list joining and article selection.

/// Joins items with "and" grammar, dropping empty entries first.
///
/// Zero items yield an empty string, one item is returned as-is, two are
/// joined with a bare "and", and three or more use an Oxford comma before
/// the final item.
pub fn join_with_and<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = items
        .into_iter()
        .map(|item| item.as_ref().to_owned())
        .filter(|item| !item.is_empty())
        .collect();

    match kept.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

/// "an" before a vowel-initial word, "a" otherwise.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(first) if "aeiou".contains(first.to_ascii_lowercase()) => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_by_count() {
        let empty: [&str; 0] = [];
        assert_eq!(join_with_and(empty), "");
        assert_eq!(join_with_and(["A"]), "A");
        assert_eq!(join_with_and(["A", "B"]), "A and B");
        assert_eq!(join_with_and(["A", "B", "C"]), "A, B, and C");
        assert_eq!(join_with_and(["A", "B", "C", "D"]), "A, B, C, and D");
    }

    #[test]
    fn drops_empty_entries_before_counting() {
        assert_eq!(join_with_and(["", "A", ""]), "A");
        assert_eq!(join_with_and(["A", "", "B"]), "A and B");
    }

    #[test]
    fn articles_follow_the_vowel_rule() {
        assert_eq!(indefinite_article("adult"), "an");
        assert_eq!(indefinite_article("Elderly"), "an");
        assert_eq!(indefinite_article("female"), "a");
        assert_eq!(indefinite_article(""), "a");
    }
}
