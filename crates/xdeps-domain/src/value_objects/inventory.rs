//! Repository inventory

use serde::{Deserialize, Serialize};

/// Size of one language inside a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    /// Language mode name, lowercase (`go`, `typescript`, ...)
    pub name: String,
    /// Total bytes of source in that language
    #[serde(default)]
    pub total_bytes: u64,
}

/// Languages detected in a repository at a commit
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Detected languages
    pub languages: Vec<LanguageStat>,
}

impl Inventory {
    /// Inventory listing the given languages with unknown sizes
    pub fn from_languages<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages
                .into_iter()
                .map(|name| LanguageStat {
                    name: name.into().to_lowercase(),
                    total_bytes: 0,
                })
                .collect(),
        }
    }

    /// Language names in inventory order
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.name.as_str())
    }
}
