use serde::Serialize;

use super::OsFamily;

/// Host distribution as reported by `/etc/os-release`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Distribution {
    /// `ID`, e.g. `ubuntu`.
    pub id: String,
    /// `ID_LIKE` entries, e.g. `["rhel", "fedora"]`.
    pub id_like: Vec<String>,
    /// `VERSION_ID`, e.g. `22.04`.
    pub version: Option<String>,
}

impl Distribution {
    /// Parse the `KEY=value` lines of an os-release file.
    pub fn from_os_release(content: &str) -> Distribution {
        let mut distribution = Distribution::default();

        for line in content.lines() {
            let Some((key, value)) = line.trim().split_once('=') else {
                continue;
            };
            let value = unquote(value);
            match key {
                "ID" => distribution.id = value.to_lowercase(),
                "ID_LIKE" => {
                    distribution.id_like =
                        value.split_whitespace().map(|id| id.to_lowercase()).collect();
                }
                "VERSION_ID" => distribution.version = Some(value.to_string()),
                _ => {}
            }
        }

        distribution
    }

    /// Family of this distribution; `ID_LIKE` is consulted when `ID` alone
    /// is not Debian-like.
    pub fn family(&self) -> OsFamily {
        std::iter::once(&self.id)
            .chain(self.id_like.iter())
            .map(|id| OsFamily::from_distribution(id))
            .find(|family| *family == OsFamily::Debian)
            .unwrap_or(OsFamily::RedHat)
    }
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}
