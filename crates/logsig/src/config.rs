//! Scanner configuration.

use std::borrow::Cow;

use logsig_core::{ScanRules, TimeGrammar, BUILTIN_GRAMMARS, DEFAULT_URL_SCHEMES, MAX_SOURCE_LEN};

/// Settings for a [`Scanner`](crate::Scanner).
///
/// The defaults scan the formats the built-in recognizers know about and
/// leave every token's role at [`Role::None`](crate::Role::None).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// URL scheme prefixes, matched case-insensitively (`https://`).
    pub url_schemes: Vec<Cow<'static, str>>,
    /// Timestamp grammars, tried in order.
    pub time_grammars: Vec<TimeGrammar>,
    /// Run the key/value role pass after scanning.
    pub key_value_roles: bool,
    /// Longest line, in bytes, the scanner accepts.
    pub max_line_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            url_schemes: DEFAULT_URL_SCHEMES.to_vec(),
            time_grammars: BUILTIN_GRAMMARS.to_vec(),
            key_value_roles: false,
            max_line_len: MAX_SOURCE_LEN,
        }
    }
}

impl ScannerConfig {
    #[must_use]
    pub fn with_url_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.url_schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_time_grammars(mut self, grammars: impl IntoIterator<Item = TimeGrammar>) -> Self {
        self.time_grammars = grammars.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_key_value_roles(mut self, enabled: bool) -> Self {
        self.key_value_roles = enabled;
        self
    }

    /// Lines longer than `max` bytes are rejected with
    /// [`ScanError::LineTooLong`](crate::ScanError::LineTooLong).
    #[must_use]
    pub fn with_max_line_len(mut self, max: usize) -> Self {
        self.max_line_len = max;
        self
    }

    /// Recognizer inputs borrowed from this config.
    pub fn rules(&self) -> ScanRules<'_> {
        ScanRules {
            time_grammars: &self.time_grammars,
            url_schemes: &self.url_schemes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_builtin_rules() {
        let config = ScannerConfig::default();
        let rules = config.rules();
        assert_eq!(rules.time_grammars, &BUILTIN_GRAMMARS[..]);
        assert_eq!(rules.url_schemes, DEFAULT_URL_SCHEMES);
        assert!(!config.key_value_roles);
        assert_eq!(config.max_line_len, MAX_SOURCE_LEN);
    }

    #[test]
    fn builders() {
        let config = ScannerConfig::default()
            .with_url_schemes(["ldap://", "smb://"])
            .with_time_grammars(BUILTIN_GRAMMARS.iter().copied().take(2))
            .with_key_value_roles(true)
            .with_max_line_len(64);
        assert_eq!(config.url_schemes, vec!["ldap://", "smb://"]);
        assert_eq!(config.time_grammars.len(), 2);
        assert!(config.key_value_roles);
        assert_eq!(config.max_line_len, 64);
    }
}
