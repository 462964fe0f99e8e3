//! Human-readable summary of a profile and its languages.

use std::fmt;

use colored::*;

use crate::github::Profile;
use crate::languages::LanguageSet;

const MISSING: &str = "-";

/// Summary of one user, rendered through `Display`.
pub struct Report<'a> {
    pub profile: &'a Profile,
    pub repository_count: usize,
    pub languages: &'a LanguageSet,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;

        writeln!(f, "\n{}", "=== User Profile ===".cyan().bold())?;
        writeln!(f, "Name: {}", field(&profile.name))?;
        writeln!(f, "Login: {}", profile.login)?;
        writeln!(f, "Bio: {}", field(&profile.bio))?;
        writeln!(f, "Location: {}", field(&profile.location))?;
        writeln!(f, "Public Repos: {}", profile.public_repos)?;
        writeln!(f, "Followers: {}", profile.followers)?;
        writeln!(f, "Following: {}", profile.following)?;
        writeln!(f, "Profile URL: {}", field(&profile.html_url))?;

        writeln!(f, "\nRepositories fetched: {}", self.repository_count)?;

        writeln!(f, "\n{}", "=== Languages Used ===".cyan().bold())?;
        if self.languages.is_empty() {
            return writeln!(f, "{}", "No languages found.".yellow());
        }
        for language in self.languages {
            writeln!(f, "  • {language}")?;
        }
        Ok(())
    }
}

/// Render the report for `profile`, the number of repositories fetched, and
/// the languages aggregated from them.
pub fn render_report(profile: &Profile, repository_count: usize, languages: &LanguageSet) -> String {
    Report {
        profile,
        repository_count,
        languages,
    }
    .to_string()
}

/// Print the report to standard output.
pub fn print_report(profile: &Profile, repository_count: usize, languages: &LanguageSet) {
    print!("{}", render_report(profile, repository_count, languages));
}

fn field(value: &Option<String>) -> &str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            login: "octocat".to_string(),
            name: Some("The Octocat".to_string()),
            bio: None,
            location: Some("San Francisco".to_string()),
            public_repos: 8,
            followers: 3938,
            following: 9,
            html_url: Some("https://github.com/octocat".to_string()),
        }
    }

    #[test]
    fn test_render_report_with_languages() {
        let languages: LanguageSet = ["Ruby", "CSS"].iter().map(|s| s.to_string()).collect();
        let report = render_report(&profile(), 8, &languages);

        assert!(report.contains("Name: The Octocat"));
        assert!(report.contains("Login: octocat"));
        assert!(report.contains("Bio: -"));
        assert!(report.contains("Location: San Francisco"));
        assert!(report.contains("Public Repos: 8"));
        assert!(report.contains("Followers: 3938"));
        assert!(report.contains("Profile URL: https://github.com/octocat"));
        assert!(report.contains("Repositories fetched: 8"));

        let css = report.find("CSS").unwrap();
        let ruby = report.find("Ruby").unwrap();
        assert!(css < ruby, "languages should be listed in sorted order");
        assert!(!report.contains("No languages found."));
    }

    #[test]
    fn test_render_report_without_languages() {
        let report = render_report(&profile(), 0, &LanguageSet::new());
        assert!(report.contains("No languages found."));
        assert!(report.contains("Repositories fetched: 0"));
    }
}
