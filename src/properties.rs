use serde::{Deserialize, Serialize};
use std::path::Path;

use tracing::info;

use crate::errors::{MaturityError, Result};
use crate::fs;

/// user details read from a `key=value` properties file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    entries: Vec<(String, String)>,
}

impl UserDetails {
    /// load user details from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let details: Self = fs::read_to_string(path)?.parse()?;
        info!("Loaded {} user details", details.len());
        Ok(details)
    }

    /// set `key`, keeping its original position if it was already present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// printable `KEY : value` lines
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| format!("{} : {}", key.to_uppercase(), value))
            .collect()
    }
}

impl std::str::FromStr for UserDetails {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self> {
        let mut details = UserDetails::default();
        for (index, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| MaturityError::MalformedProperty {
                    line_number: index + 1,
                    line: line.to_string(),
                })?;
            details.insert(key, value.trim());
        }
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_file_order() {
        let details: UserDetails = "name=Asha Rao\ncity=Pune  \nphone=+91 98200 00000\n"
            .parse()
            .unwrap();

        assert_eq!(details.len(), 3);
        assert_eq!(details.get("city"), Some("Pune"));
        assert_eq!(
            details.lines(),
            vec!["NAME : Asha Rao", "CITY : Pune", "PHONE : +91 98200 00000"]
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        let details: UserDetails = "note=a=b\r\n".parse().unwrap();
        assert_eq!(details.get("note"), Some("a=b"));
    }

    #[test]
    fn test_repeated_key_keeps_position() {
        let details: UserDetails = "name=first\ncity=Pune\nname=second\n".parse().unwrap();
        assert_eq!(details.lines(), vec!["NAME : second", "CITY : Pune"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let details: UserDetails = "\nname=Asha\n\n".parse().unwrap();
        assert_eq!(details.len(), 1);
    }

    #[test]
    fn test_line_without_separator() {
        let err = "name=Asha\nnot a property\n".parse::<UserDetails>().unwrap_err();
        match err {
            MaturityError::MalformedProperty { line_number, line } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "not a property");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user-details.prop");
        assert!(matches!(
            UserDetails::load(&path),
            Err(MaturityError::FileNotFound { .. })
        ));
    }
}
