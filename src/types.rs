use serde::{Deserialize, Serialize};

/// Opaque ID types for type safety
pub type QuestionId = String;
pub type SessionId = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Multiple,
    Boolean,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A question submitted for insertion, before the corpus assigns its id.
/// Field names match the persisted record format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// One trivia fact as stored in the corpus. `id` is the SHA-256 of the
/// question text, assigned once at insert and never regenerated.
///
/// `correct_index` is transient: assigned fresh each time the record is drawn
/// into a game, meaningless outside that game, and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerRecord {
    #[serde(rename = "_id")]
    pub id: QuestionId,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(skip)]
    pub correct_index: usize,
}

/// Client-safe view of an [`AnswerRecord`]. The correct answer is spliced into
/// `possible_answers` at the record's hidden `correct_index`; no field of this
/// type reveals which entry it is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionRecord {
    #[serde(rename = "_id")]
    pub id: QuestionId,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub question: String,
    pub possible_answers: Vec<String>,
}

/// A numbered question as delivered to the client on game start and after
/// each guess.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionData {
    pub number: usize,
    pub question: QuestionRecord,
}
