//! The shared question corpus.
//!
//! An insertion-ordered, content-addressed store of trivia records. Record ids
//! are derived from the question text, so inserting the same question twice is
//! a no-op rather than an error. Reads are concurrent; the rare administrative
//! writes serialize on the write lock.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::categories;
use crate::error::{GameError, GameResult};
use crate::types::{AnswerRecord, NewQuestion, QuestionId};

/// Typed corpus query: either everything, or one category by its corpus label.
///
/// A label that matches nothing yields an empty result, never an error, so an
/// unresolvable key stays the only query-shaped failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    Any,
    Name(String),
}

impl CategoryFilter {
    /// Resolve a client-supplied category key into a filter.
    ///
    /// "any" maps to an unfiltered query; any other key is translated through
    /// the category table to the label used inside the corpus.
    pub fn from_key(key: &str) -> GameResult<Self> {
        if key == "any" {
            return Ok(CategoryFilter::Any);
        }
        categories::resolve(key)
            .map(|cat| CategoryFilter::Name(cat.external_name.to_string()))
            .ok_or_else(|| GameError::InvalidCategory(key.to_string()))
    }

    fn matches(&self, record: &AnswerRecord) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Name(name) => record.category == *name,
        }
    }
}

/// Content hash used as the record id: lowercase hex SHA-256 of the question
/// text.
pub fn question_id(question: &str) -> QuestionId {
    hex::encode(Sha256::digest(question.as_bytes()))
}

fn record_from(new: NewQuestion) -> AnswerRecord {
    AnswerRecord {
        id: question_id(&new.question),
        category: new.category,
        kind: new.kind,
        difficulty: new.difficulty,
        question: new.question,
        correct_answer: new.correct_answer,
        incorrect_answers: new.incorrect_answers,
        correct_index: 0,
    }
}

/// Shared read-mostly question store. Pass a handle (`Arc<Corpus>`) into
/// whatever needs to draw questions; there is no process-wide instance.
#[derive(Debug, Default)]
pub struct Corpus {
    records: RwLock<Vec<AnswerRecord>>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load a corpus from a JSON snapshot: an array of persisted records.
    /// Duplicate question texts in the snapshot collapse to one record.
    pub fn load(path: &Path) -> GameResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            GameError::CorpusUnavailable(format!("read {}: {}", path.display(), e))
        })?;
        let seeds: Vec<NewQuestion> = serde_json::from_str(&raw).map_err(|e| {
            GameError::CorpusUnavailable(format!("parse {}: {}", path.display(), e))
        })?;

        let mut records = Vec::with_capacity(seeds.len());
        let mut seen = HashSet::new();
        let mut duplicates = 0usize;
        for seed in seeds {
            let record = record_from(seed);
            if seen.insert(record.id.clone()) {
                records.push(record);
            } else {
                duplicates += 1;
            }
        }

        tracing::info!(
            "Loaded {} questions from {} ({} duplicates collapsed)",
            records.len(),
            path.display(),
            duplicates
        );

        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Build a corpus from records already in memory (fixtures, imports).
    pub fn from_questions(questions: Vec<NewQuestion>) -> Self {
        let mut records = Vec::with_capacity(questions.len());
        let mut seen = HashSet::new();
        for q in questions {
            let record = record_from(q);
            if seen.insert(record.id.clone()) {
                records.push(record);
            }
        }
        Self {
            records: RwLock::new(records),
        }
    }

    /// Draw up to `count` records matching `filter`.
    ///
    /// The matching set is stable (insertion order). When more records match
    /// than were asked for, a random contiguous window of the matching set is
    /// returned so consecutive plays don't see the same subset. When fewer
    /// match, all of them are returned; callers tolerate a short draw.
    pub async fn sample(&self, filter: &CategoryFilter, count: usize) -> Vec<AnswerRecord> {
        let records = self.records.read().await;
        let matching: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(r))
            .map(|(i, _)| i)
            .collect();

        let total = matching.len();
        if total == 0 || count == 0 {
            return Vec::new();
        }

        let window = if total > count {
            let skip = rand::rng().random_range(0..=total - count);
            &matching[skip..skip + count]
        } else {
            &matching[..]
        };

        window.iter().map(|&i| records[i].clone()).collect()
    }

    /// Draw up to `count` records for a client-supplied category key.
    /// Fails only when the key cannot be resolved.
    pub async fn sample_category(&self, key: &str, count: usize) -> GameResult<Vec<AnswerRecord>> {
        let filter = CategoryFilter::from_key(key)?;
        Ok(self.sample(&filter, count).await)
    }

    /// Insert a question, assigning its content-addressed id.
    ///
    /// Returns the stored record, or `None` if a record with the same question
    /// text already exists (the store is left untouched).
    pub async fn insert(&self, new: NewQuestion) -> Option<AnswerRecord> {
        let record = record_from(new);
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            tracing::debug!("Duplicate insert ignored: {}", record.id);
            return None;
        }
        records.push(record.clone());
        Some(record)
    }

    /// Remove the record with the given id. Returns the number of records
    /// removed (always 1) or fails when the id is unknown.
    pub async fn remove(&self, id: &str) -> GameResult<usize> {
        let mut records = self.records.write().await;
        match records.iter().position(|r| r.id == id) {
            Some(pos) => {
                records.remove(pos);
                tracing::info!("Removed question {}", id);
                Ok(1)
            }
            None => Err(GameError::NotFound(id.to_string())),
        }
    }

    /// Number of records matching `filter`
    pub async fn count(&self, filter: &CategoryFilter) -> usize {
        let records = self.records.read().await;
        records.iter().filter(|r| filter.matches(r)).count()
    }

    /// Total number of records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
