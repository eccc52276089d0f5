//! Assembles the answer pool for one game.
//!
//! Walks the quota plan in order, draws each category's share from the corpus,
//! then decodes stored HTML entities, shuffles the combined pool, and assigns
//! every record a fresh position for its correct answer.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::corpus::Corpus;
use crate::error::GameResult;
use crate::quota;
use crate::types::AnswerRecord;

/// Requested category lists longer than the question total are cut down by
/// random selection: shuffle, then keep the first `max`.
pub fn clamp_requested(keys: &[String], max: usize) -> Vec<String> {
    let mut keys = keys.to_vec();
    if keys.len() > max {
        let mut rng = rand::rng();
        keys.shuffle(&mut rng);
        keys.truncate(max);
    }
    keys
}

/// Decode HTML entities the corpus may carry in question and answer text
/// (encoded punctuation like `&quot;` and `&amp;`).
fn decode_entities(record: &mut AnswerRecord) {
    record.question = html_escape::decode_html_entities(&record.question).into_owned();
    record.correct_answer = html_escape::decode_html_entities(&record.correct_answer).into_owned();
    for wrong in &mut record.incorrect_answers {
        *wrong = html_escape::decode_html_entities(wrong).into_owned();
    }
}

/// Build the ordered answer pool for a game of `total` questions drawn from
/// `requested` categories.
///
/// Categories that can't fill their share produce a short pool rather than an
/// error. Each returned record carries a freshly assigned `correct_index`,
/// uniform over `[0, incorrect_answers.len()]`.
pub async fn build_answer_pool(
    corpus: &Corpus,
    requested: &[String],
    total: usize,
) -> GameResult<Vec<AnswerRecord>> {
    let keys = clamp_requested(requested, total);
    let plan = quota::allocate(&keys, total);

    let mut pool: Vec<AnswerRecord> = Vec::with_capacity(total);
    for (key, count) in &plan {
        let drawn = corpus.sample_category(key, *count).await?;
        if drawn.len() < *count {
            tracing::debug!(
                "Short draw for category {}: wanted {}, got {}",
                key,
                count,
                drawn.len()
            );
        }
        pool.extend(drawn);
    }

    for record in &mut pool {
        decode_entities(record);
    }

    let mut rng = rand::rng();
    pool.shuffle(&mut rng);
    for record in &mut pool {
        record.correct_index = rng.random_range(0..=record.incorrect_answers.len());
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::types::{Difficulty, NewQuestion, QuestionType};
    use std::collections::HashSet;

    fn make_question(category: &str, text: &str) -> NewQuestion {
        NewQuestion {
            category: category.to_string(),
            kind: QuestionType::Multiple,
            difficulty: Difficulty::Medium,
            question: text.to_string(),
            correct_answer: "Right".to_string(),
            incorrect_answers: vec!["A".into(), "B".into(), "C".into()],
        }
    }

    fn seeded_corpus(categories: &[&str], per_category: usize) -> Corpus {
        let mut questions = Vec::new();
        for cat in categories {
            for i in 0..per_category {
                questions.push(make_question(cat, &format!("{} question {}?", cat, i)));
            }
        }
        Corpus::from_questions(questions)
    }

    #[test]
    fn test_clamp_leaves_short_lists_alone() {
        let keys = vec!["9".to_string(), "22".to_string()];
        assert_eq!(clamp_requested(&keys, 10), keys);
    }

    #[test]
    fn test_clamp_cuts_long_lists_to_max() {
        let keys: Vec<String> = (9..=32).map(|k| k.to_string()).collect();
        let clamped = clamp_requested(&keys, 10);
        assert_eq!(clamped.len(), 10);
        // every survivor came from the request
        assert!(clamped.iter().all(|k| keys.contains(k)));
        // and no key was kept twice
        let unique: HashSet<_> = clamped.iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[tokio::test]
    async fn test_pool_is_full_when_corpus_can_cover_the_plan() {
        let corpus = seeded_corpus(&["General Knowledge", "Geography"], 20);
        let requested = vec!["9".to_string(), "22".to_string()];

        let pool = build_answer_pool(&corpus, &requested, 10).await.unwrap();
        assert_eq!(pool.len(), 10);
    }

    #[tokio::test]
    async fn test_short_category_shrinks_the_pool() {
        let corpus = Corpus::from_questions(
            (0..3)
                .map(|i| make_question("Geography", &format!("geo {}?", i)))
                .chain((0..20).map(|i| make_question("General Knowledge", &format!("gk {}?", i))))
                .collect(),
        );
        // geography is last, so it owes 5 but only has 3
        let requested = vec!["9".to_string(), "22".to_string()];

        let pool = build_answer_pool(&corpus, &requested, 10).await.unwrap();
        assert_eq!(pool.len(), 8);
    }

    #[tokio::test]
    async fn test_unknown_key_fails_before_any_draw() {
        let corpus = seeded_corpus(&["Geography"], 20);
        let requested = vec!["99".to_string()];

        let err = build_answer_pool(&corpus, &requested, 10).await.unwrap_err();
        assert_eq!(err, GameError::InvalidCategory("99".to_string()));
    }

    #[tokio::test]
    async fn test_entities_are_decoded() {
        let corpus = Corpus::from_questions(vec![NewQuestion {
            category: "General Knowledge".to_string(),
            kind: QuestionType::Multiple,
            difficulty: Difficulty::Easy,
            question: "Who wrote &quot;Hamlet&quot;?".to_string(),
            correct_answer: "Shakespeare &amp; co".to_string(),
            incorrect_answers: vec!["Marlowe&#039;s ghost".into(), "B".into(), "C".into()],
        }]);

        let pool = build_answer_pool(&corpus, &["9".to_string()], 10).await.unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].question, "Who wrote \"Hamlet\"?");
        assert_eq!(pool[0].correct_answer, "Shakespeare & co");
        assert_eq!(pool[0].incorrect_answers[0], "Marlowe's ghost");
    }

    #[tokio::test]
    async fn test_correct_index_stays_in_bounds() {
        let corpus = seeded_corpus(&["Geography"], 40);
        for _ in 0..5 {
            let pool = build_answer_pool(&corpus, &["22".to_string()], 10).await.unwrap();
            for record in &pool {
                assert!(record.correct_index <= record.incorrect_answers.len());
            }
        }
    }

    #[tokio::test]
    async fn test_boolean_records_index_is_zero_or_one() {
        let corpus = Corpus::from_questions(
            (0..10)
                .map(|i| NewQuestion {
                    category: "Geography".to_string(),
                    kind: QuestionType::Boolean,
                    difficulty: Difficulty::Easy,
                    question: format!("True or false {}?", i),
                    correct_answer: "True".to_string(),
                    incorrect_answers: vec!["False".to_string()],
                })
                .collect(),
        );

        let pool = build_answer_pool(&corpus, &["22".to_string()], 10).await.unwrap();
        for record in &pool {
            assert!(record.correct_index <= 1);
        }
    }
}
