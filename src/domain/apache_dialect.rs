use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// Authorization-directive syntax era of the target Apache server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApacheDialect {
    /// Apache 2.2: `Order` / `Allow` access control.
    #[serde(rename = "2.2")]
    V2_2,
    /// Apache 2.4 and later: `Require` access control.
    #[serde(rename = "2.4+")]
    V2_4Plus,
}

impl ApacheDialect {
    pub const ALL: [ApacheDialect; 2] = [ApacheDialect::V2_2, ApacheDialect::V2_4Plus];

    /// Lines of the `<Directory>` authorization directive for this dialect.
    pub fn authorization_directive(&self) -> &'static [&'static str] {
        match self {
            ApacheDialect::V2_2 => &["Order Allow,Deny", "Allow from all"],
            ApacheDialect::V2_4Plus => &["Require all granted"],
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ApacheDialect::V2_2 => "2.2",
            ApacheDialect::V2_4Plus => "2.4+",
        }
    }

    /// Parse a release such as `2.2`, `2.4`, `2.4.58` or `Apache/2.4.41`.
    pub fn from_version(version: &str) -> Result<ApacheDialect, AppError> {
        let trimmed = version.trim();
        let bare = trimmed.strip_prefix("Apache/").unwrap_or(trimmed);
        let unsupported = || AppError::UnsupportedDialect(trimmed.to_string());

        let mut parts = bare.split('.');
        let major: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(unsupported)?;
        let minor: u32 = parts
            .next()
            .map(|p| p.chars().take_while(char::is_ascii_digit).collect::<String>())
            .and_then(|p| p.parse().ok())
            .ok_or_else(unsupported)?;

        match (major, minor) {
            (2, 2) => Ok(ApacheDialect::V2_2),
            (2, m) if m >= 4 => Ok(ApacheDialect::V2_4Plus),
            _ => Err(unsupported()),
        }
    }

    /// Extract the dialect from `apachectl -v` output.
    ///
    /// Expects a line of the form `Server version: Apache/2.4.41 (Ubuntu)`.
    pub fn from_version_output(output: &str) -> Result<ApacheDialect, AppError> {
        let line = output
            .lines()
            .find(|line| line.to_lowercase().contains("server version"))
            .ok_or_else(|| AppError::UnsupportedDialect("no server version reported".into()))?;

        let token = line
            .split_whitespace()
            .find(|token| token.starts_with("Apache/"))
            .ok_or_else(|| AppError::UnsupportedDialect(line.trim().to_string()))?;

        ApacheDialect::from_version(token)
    }
}

impl FromStr for ApacheDialect {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApacheDialect::from_version(s)
    }
}

impl fmt::Display for ApacheDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
