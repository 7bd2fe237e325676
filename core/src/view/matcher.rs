//! Compiles search specs into row predicates

use super::gateway::SearchSpec;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// A compiled search expression
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Every regex must match somewhere in the text
    AllOf(Vec<Regex>),
    /// The expression could not be compiled; matches no text
    Nothing,
}

impl Matcher {
    /// Compile a search spec, `None` when the spec filters nothing
    pub fn compile(spec: &SearchSpec) -> Option<Self> {
        if spec.pattern.trim().is_empty() {
            return None;
        }

        let sources: Vec<String> = if spec.smart {
            smart_words(&spec.pattern)
                .into_iter()
                .map(|word| {
                    if spec.regex {
                        word
                    } else {
                        regex::escape(&word)
                    }
                })
                .collect()
        } else if spec.regex {
            vec![spec.pattern.clone()]
        } else {
            vec![regex::escape(&spec.pattern)]
        };

        let mut compiled = Vec::with_capacity(sources.len());
        for source in sources {
            match RegexBuilder::new(&source)
                .case_insensitive(spec.case_insensitive)
                .build()
            {
                Ok(regex) => compiled.push(regex),
                Err(e) => {
                    warn!("Search pattern {:?} does not compile: {}", source, e);
                    return Some(Matcher::Nothing);
                }
            }
        }

        Some(Matcher::AllOf(compiled))
    }

    /// Check a text against the expression
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::AllOf(regexes) => regexes.iter().all(|regex| regex.is_match(text)),
            Matcher::Nothing => false,
        }
    }
}

/// Split a smart search into words, keeping double-quoted phrases together
pub fn smart_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                if in_quotes && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
