//! Strips the answer key from a record before it is sent to a client.

use crate::types::{AnswerRecord, QuestionRecord};

/// Build the client-safe view of an answer record.
///
/// `possible_answers` is the incorrect answers with the correct answer spliced
/// in at the record's hidden `correct_index`. The input is left untouched; the
/// original record, correct index included, stays server-side for
/// verification.
pub fn answer_to_question(answer: &AnswerRecord) -> QuestionRecord {
    let mut possible_answers = Vec::with_capacity(answer.incorrect_answers.len() + 1);
    possible_answers.extend(answer.incorrect_answers.iter().cloned());
    possible_answers.insert(answer.correct_index, answer.correct_answer.clone());

    QuestionRecord {
        id: answer.id.clone(),
        category: answer.category.clone(),
        kind: answer.kind,
        difficulty: answer.difficulty,
        question: answer.question.clone(),
        possible_answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::question_id;
    use crate::types::{Difficulty, QuestionType};

    fn make_answer(correct_index: usize) -> AnswerRecord {
        AnswerRecord {
            id: question_id("Which planet is closest to the sun?"),
            category: "Science & Nature".to_string(),
            kind: QuestionType::Multiple,
            difficulty: Difficulty::Easy,
            question: "Which planet is closest to the sun?".to_string(),
            correct_answer: "Mercury".to_string(),
            incorrect_answers: vec!["Venus".into(), "Mars".into(), "Pluto".into()],
            correct_index,
        }
    }

    #[test]
    fn test_correct_answer_lands_at_hidden_index() {
        for index in 0..=3 {
            let answer = make_answer(index);
            let question = answer_to_question(&answer);
            assert_eq!(question.possible_answers.len(), 4);
            assert_eq!(question.possible_answers[index], "Mercury");
        }
    }

    #[test]
    fn test_incorrect_answers_keep_their_order() {
        let answer = make_answer(1);
        let question = answer_to_question(&answer);
        assert_eq!(
            question.possible_answers,
            vec!["Venus", "Mercury", "Mars", "Pluto"]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let answer = make_answer(2);
        let copy = answer.clone();
        let _ = answer_to_question(&answer);
        assert_eq!(answer, copy);
    }

    #[test]
    fn test_boolean_records_get_two_choices() {
        let mut answer = make_answer(0);
        answer.kind = QuestionType::Boolean;
        answer.correct_answer = "True".to_string();
        answer.incorrect_answers = vec!["False".to_string()];
        answer.correct_index = 1;

        let question = answer_to_question(&answer);
        assert_eq!(question.possible_answers, vec!["False", "True"]);
    }

    #[test]
    fn test_serialized_question_leaks_nothing() {
        let question = answer_to_question(&make_answer(0));
        let value = serde_json::to_value(&question).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        for leaky in ["correct_answer", "incorrect_answers", "correctIndex", "correct_index"] {
            assert!(!keys.contains(&leaky), "leaked field {}", leaky);
        }
        assert!(keys.contains(&"possible_answers"));
        assert!(keys.contains(&"_id"));
    }
}
