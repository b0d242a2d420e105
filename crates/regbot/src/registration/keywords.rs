//! Completion keywords that close the photo collection step

use std::fmt;

/// Default words a user can send to finish attaching photos
pub const DEFAULT_COMPLETION_KEYWORDS: &[&str] = &["готово", "готов", "всё", "все", "done", "all"];

/// Case-insensitive set of completion keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionKeywords {
    words: Vec<String>,
}

impl CompletionKeywords {
    /// Builds a keyword set, normalising case and dropping blanks and duplicates.
    /// Returns `None` when nothing usable is left.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for word in words {
            let word = normalize(word.as_ref());
            if !word.is_empty() && !normalized.contains(&word) {
                normalized.push(word);
            }
        }

        if normalized.is_empty() {
            None
        } else {
            Some(Self { words: normalized })
        }
    }

    /// Parses a comma-separated list, e.g. `"done, finished"`
    pub fn parse(raw: &str) -> Option<Self> {
        Self::new(raw.split(','))
    }

    /// Whether `text` is one of the keywords, ignoring case and surrounding whitespace
    pub fn matches(&self, text: &str) -> bool {
        let text = normalize(text);
        self.words.iter().any(|w| *w == text)
    }

    /// The keyword shown to users in prompts
    pub fn primary(&self) -> &str {
        self.words.first().map_or("", String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for CompletionKeywords {
    fn default() -> Self {
        Self {
            words: DEFAULT_COMPLETION_KEYWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl fmt::Display for CompletionKeywords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(", "))
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
