//! Reduction of repository listings to the set of primary languages.

use std::collections::BTreeSet;

use crate::github::Repository;

/// Distinct primary languages observed across a user's repositories.
///
/// Kept sorted so reports are stable between runs.
pub type LanguageSet = BTreeSet<String>;

/// Collect the distinct primary languages of `repositories`.
///
/// Repositories without a classified language are skipped. No weighting is
/// applied: a language used by one repository counts the same as one used
/// by fifty.
pub fn aggregate_languages(repositories: &[Repository]) -> LanguageSet {
    repositories
        .iter()
        .filter_map(|repo| repo.language.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_duplicates_and_nulls_collapse() {
        let repos = vec![
            repo("a", Some("Go")),
            repo("b", Some("Go")),
            repo("c", None),
            repo("d", Some("Rust")),
        ];

        let languages = aggregate_languages(&repos);
        let expected: LanguageSet = ["Go", "Rust"].iter().map(|s| s.to_string()).collect();
        assert_eq!(languages, expected);
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(aggregate_languages(&[]).is_empty());
    }

    #[test]
    fn test_all_unclassified_yields_empty_set() {
        let repos = vec![repo("dotfiles", None), repo("notes", None)];
        assert!(aggregate_languages(&repos).is_empty());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let repos = vec![
            repo("a", Some("Python")),
            repo("b", Some("TypeScript")),
            repo("c", Some("Python")),
        ];
        assert_eq!(aggregate_languages(&repos), aggregate_languages(&repos));
    }

    #[test]
    fn test_language_names_are_case_sensitive() {
        let repos = vec![repo("a", Some("Shell")), repo("b", Some("shell"))];
        assert_eq!(aggregate_languages(&repos).len(), 2);
    }
}
