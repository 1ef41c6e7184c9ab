// src/input.rs
// =============================================================================
// Collects the usernames to check.
//
// Sources, in this order:
// - the --username flag
// - the --userfile file, one username per line
//
// Lines are trimmed and blank lines skipped. A username given twice is only
// checked once, so every (username, platform) pair yields a single result.
// Problems here stop the run before any request goes out.
// =============================================================================

use std::collections::HashSet;
use std::path::Path;

use crate::error::{HunterError, Result};

pub fn collect_usernames(username: Option<&str>, userfile: Option<&Path>) -> Result<Vec<String>> {
    let mut usernames = Vec::new();

    if let Some(name) = username {
        usernames.push(name.trim().to_string());
    }

    if let Some(path) = userfile {
        usernames.extend(read_username_file(path)?);
    }

    let usernames = dedup_preserving_order(usernames);
    if usernames.is_empty() {
        return Err(HunterError::NoUsernames);
    }

    Ok(usernames)
}

pub fn read_username_file(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(HunterError::UsernameFileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_usernames(&content))
}

pub fn parse_usernames(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn dedup_preserving_order(usernames: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    usernames
        .into_iter()
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let names = parse_usernames("alice\n\n  bob  \r\n\t\ncarol");
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_flag_then_file_without_duplicates() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bob\nalice\nbob\n").unwrap();

        let names = collect_usernames(Some("alice"), Some(file.path())).unwrap();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_missing_file_is_an_input_error() {
        let err = collect_usernames(Some("alice"), Some(Path::new("/no/such/users.txt"))).unwrap_err();
        assert!(matches!(err, HunterError::UsernameFileNotFound(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_nothing_provided() {
        assert!(matches!(
            collect_usernames(None, None).unwrap_err(),
            HunterError::NoUsernames
        ));
        assert!(matches!(
            collect_usernames(Some("   "), None).unwrap_err(),
            HunterError::NoUsernames
        ));
    }

    #[test]
    fn test_empty_file_only() {
        let file = NamedTempFile::new().unwrap();
        let err = collect_usernames(None, Some(file.path())).unwrap_err();
        assert!(matches!(err, HunterError::NoUsernames));
    }
}
