use crate::models::{
    domain::ExamSession,
    dto::response::{GradeResponse, QuestionVerdict},
};

/// Pure grading over an exam session. A selection is correct iff it exists
/// and its first character equals the question's stored correct letter;
/// unanswered questions count as incorrect, never as errors.
pub struct GradingService;

impl GradingService {
    pub fn grade(session: &ExamSession) -> GradeResponse {
        let total_questions = session.questions.len();
        let mut correct_count = 0;

        let verdicts: Vec<QuestionVerdict> = session
            .questions
            .iter()
            .zip(session.selections.iter())
            .enumerate()
            .map(|(i, (question, selection))| {
                let correct = match (selection, question.correct_letter()) {
                    (Some(selected), Some(letter)) => selected.starts_with(letter),
                    _ => false,
                };
                if correct {
                    correct_count += 1;
                }
                QuestionVerdict {
                    number: i + 1,
                    correct,
                    correct_letter: question.answer.clone(),
                }
            })
            .collect();

        let score = if total_questions == 0 {
            0.0
        } else {
            (correct_count as f64 / total_questions as f64) * 100.0
        };

        GradeResponse {
            score,
            correct_count,
            total_questions,
            verdicts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Question;

    fn exam_with(answers: &[&str]) -> ExamSession {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, answer)| {
                Question::new(
                    &format!("Question {}", i + 1),
                    vec![
                        "A) first".to_string(),
                        "B) second".to_string(),
                        "C) third".to_string(),
                        "D) fourth".to_string(),
                    ],
                    answer,
                )
            })
            .collect();
        ExamSession::new("Test topic", questions)
    }

    #[test]
    fn unanswered_session_scores_zero() {
        let session = exam_with(&["A", "B", "C", "D", "A"]);

        let report = GradingService::grade(&session);

        assert_eq!(report.score, 0.0);
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.total_questions, 5);
        assert!(report.verdicts.iter().all(|v| !v.correct));
    }

    #[test]
    fn all_correct_scores_one_hundred() {
        let mut session = exam_with(&["A", "B", "C"]);
        session.record_answers(vec![
            Some("A) first".to_string()),
            Some("B) second".to_string()),
            Some("C) third".to_string()),
        ]);

        let report = GradingService::grade(&session);

        assert_eq!(report.score, 100.0);
        assert_eq!(report.correct_count, 3);
        assert!(report.verdicts.iter().all(|v| v.correct));
    }

    #[test]
    fn score_is_correct_over_total_times_one_hundred() {
        let mut session = exam_with(&["A", "A", "A", "A", "A"]);
        session.record_answers(vec![
            Some("A) first".to_string()),
            Some("A) first".to_string()),
            Some("A) first".to_string()),
            Some("B) second".to_string()),
            None,
        ]);

        let report = GradingService::grade(&session);

        assert_eq!(report.correct_count, 3);
        assert_eq!(report.score, 60.0);
    }

    #[test]
    fn grading_compares_first_character_only() {
        let mut session = exam_with(&["B"]);
        // Any selection starting with the correct letter counts, regardless
        // of the rest of the option text.
        session.record_answers(vec![Some("B) something entirely different".to_string())]);

        let report = GradingService::grade(&session);
        assert_eq!(report.score, 100.0);
    }

    #[test]
    fn verdicts_carry_question_numbers_and_correct_letters() {
        let mut session = exam_with(&["A", "C"]);
        session.record_answers(vec![Some("B) second".to_string()), None]);

        let report = GradingService::grade(&session);

        assert_eq!(
            report.verdicts,
            vec![
                QuestionVerdict {
                    number: 1,
                    correct: false,
                    correct_letter: "A".to_string(),
                },
                QuestionVerdict {
                    number: 2,
                    correct: false,
                    correct_letter: "C".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_session_grades_to_zero_without_panicking() {
        let session = ExamSession::new("Empty", vec![]);

        let report = GradingService::grade(&session);

        assert_eq!(report.score, 0.0);
        assert_eq!(report.total_questions, 0);
    }

    #[test]
    fn raw_score_is_not_rounded() {
        let mut session = exam_with(&["A", "A", "A"]);
        session.record_answers(vec![Some("A) first".to_string()), None, None]);

        let report = GradingService::grade(&session);

        assert!((report.score - 100.0 / 3.0).abs() < 1e-9);
    }
}
