use std::sync::Arc;
use tracing::{info, instrument};

use crate::grammar::GrammarChecker;
use crate::markdown;
use crate::store::NoteStore;
use crate::types::note::Note;

/// Inclusive bounds on note content, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLimits {
    pub min: usize,
    pub max: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        ContentLimits { min: 10, max: 2000 }
    }
}

impl ContentLimits {
    // counts Unicode scalar values, so an emoji is one character, not two
    pub fn allows(&self, content: &str) -> bool {
        (self.min..=self.max).contains(&content.chars().count())
    }
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
    grammar: Arc<dyn GrammarChecker>,
    limits: ContentLimits,
}

impl NoteService {
    pub fn new(
        store: Arc<dyn NoteStore>,
        grammar: Arc<dyn GrammarChecker>,
        limits: ContentLimits,
    ) -> Self {
        NoteService {
            store,
            grammar,
            limits,
        }
    }

    // presence, length, grammar, duplicate title, insert; first failure wins
    #[instrument(skip(self, content))]
    pub async fn submit(&self, title: &str, content: &str) -> Result<Note, handle_errors::Error> {
        if title.is_empty() || content.is_empty() {
            return Err(handle_errors::Error::MissingFields);
        }
        if !self.limits.allows(content) {
            return Err(handle_errors::Error::ContentLength {
                min: self.limits.min,
                max: self.limits.max,
            });
        }
        self.ensure_grammar(content).await?;
        if self.store.find_by_title(title.trim()).await?.is_some() {
            return Err(handle_errors::Error::DuplicateTitle);
        }

        let note = self.store.insert(Note::new(title, content)).await?;
        info!("saved note {}", note.id);
        Ok(note)
    }

    #[instrument(skip(self, content))]
    pub async fn preflight(&self, content: &str) -> Result<(), handle_errors::Error> {
        if content.is_empty() {
            return Err(handle_errors::Error::EmptyContent);
        }
        self.ensure_grammar(content).await
    }

    pub async fn list(&self) -> Result<Vec<Note>, handle_errors::Error> {
        self.store.find_all().await
    }

    pub fn render(&self, content: &str) -> Result<String, handle_errors::Error> {
        if content.is_empty() {
            return Err(handle_errors::Error::EmptyMarkdown);
        }
        Ok(markdown::to_html(content))
    }

    async fn ensure_grammar(&self, content: &str) -> Result<(), handle_errors::Error> {
        let report = self.grammar.check(content).await?;
        if report.is_clean() {
            Ok(())
        } else {
            Err(handle_errors::Error::GrammarIssues(report.details()))
        }
    }
}
