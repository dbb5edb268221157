//! Decides whether a piece of text should be translated.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use regex::Regex;

/// Predicate over text: `true` means the text needs a translation call.
pub trait TextClassifier {
    fn classify(&self, text: &str) -> bool;
}

impl<F> TextClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn classify(&self, text: &str) -> bool {
        self(text)
    }
}

/// Matches text containing at least one character of the configured Unicode scripts.
///
/// # Examples
///
/// ```
/// use twrap::core::classifier::{ScriptClassifier, TextClassifier};
///
/// let classifier = ScriptClassifier::new(&["Hangul".to_string()], &[]).unwrap();
/// assert!(classifier.classify("안녕하세요"));
/// assert!(classifier.classify("Hello, 세계"));
/// assert!(!classifier.classify("Hello"));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptClassifier {
    pattern: Regex,
    ignore_texts: HashSet<String>,
}

impl ScriptClassifier {
    pub fn new(scripts: &[String], ignore_texts: &[String]) -> Result<Self> {
        Ok(Self {
            pattern: script_pattern(scripts)?,
            ignore_texts: ignore_texts.iter().cloned().collect(),
        })
    }
}

impl TextClassifier for ScriptClassifier {
    fn classify(&self, text: &str) -> bool {
        if self.ignore_texts.contains(text.trim()) {
            return false;
        }
        self.pattern.is_match(text)
    }
}

/// Build a character class such as `[\p{Hangul}\p{Han}]` from script names.
pub fn script_pattern(scripts: &[String]) -> Result<Regex> {
    if scripts.is_empty() {
        bail!("At least one script must be configured in 'scripts'");
    }
    for script in scripts {
        if script.is_empty() || !script.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            bail!("Invalid script name in 'scripts': \"{}\"", script);
        }
    }

    let class: String = scripts.iter().map(|s| format!(r"\p{{{}}}", s)).collect();
    Regex::new(&format!("[{}]", class))
        .with_context(|| format!("Unknown Unicode script in 'scripts': {:?}", scripts))
}
