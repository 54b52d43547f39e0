// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project selection by path pattern.

use crate::error::CheckError;
use regex::Regex;

/// OR of start-anchored regex selectors over a project's fully-qualified
/// path. No selectors means every project is included.
#[derive(Debug, Default)]
pub struct ProjectFilter {
    selectors: Vec<Regex>,
}

impl ProjectFilter {
    pub fn new<I, S>(patterns: I) -> Result<Self, CheckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selectors = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            // Match-at-start semantics, not full-string and not search
            let anchored = format!(r"\A(?:{})", pattern);
            let regex = Regex::new(&anchored).map_err(|source| CheckError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            selectors.push(regex);
        }
        Ok(Self { selectors })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.selectors.is_empty() || self.selectors.iter().any(|regex| regex.is_match(path))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
