use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const TITLE_SIZE_PT: f32 = 16.0;
const BODY_SIZE_PT: f32 = 12.0;
const MAX_LINE_CHARS: usize = 90;

/// Formats the current question set into a downloadable PDF. Purely a
/// formatting transform: no grading information, nothing persisted.
pub struct ExportService;

impl ExportService {
    /// The document as plain lines: title, then each numbered question
    /// followed by its option lines. Correct letters and user answers are
    /// deliberately absent.
    pub fn document_lines(topic: &str, questions: &[Question]) -> Vec<String> {
        let mut lines = vec![format!("Simulado: {}", topic)];

        for (i, question) in questions.iter().enumerate() {
            lines.push(String::new());
            lines.push(format!("{}. {}", i + 1, question.text));
            for option in &question.options {
                lines.push(option.clone());
            }
        }

        lines
    }

    pub fn render_pdf(topic: &str, questions: &[Question]) -> AppResult<Vec<u8>> {
        let title = format!("Simulado: {}", topic);
        let (doc, first_page, first_layer) =
            PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");

        let title_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(export_error)?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(export_error)?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut cursor = PAGE_HEIGHT_MM - MARGIN_MM;

        // Roughly centered title; Helvetica averages about half the font
        // size in width per character.
        let title_x = ((PAGE_WIDTH_MM - title.chars().count() as f32 * 2.8) / 2.0).max(MARGIN_MM);
        layer.use_text(&title, TITLE_SIZE_PT, Mm(title_x), Mm(cursor), &title_font);
        cursor -= LINE_HEIGHT_MM;

        for line in Self::document_lines(topic, questions).into_iter().skip(1) {
            if line.is_empty() {
                cursor -= LINE_HEIGHT_MM / 2.0;
                continue;
            }

            for wrapped in wrap_line(&line, MAX_LINE_CHARS) {
                if cursor < MARGIN_MM {
                    let (page, new_layer) =
                        doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                    layer = doc.get_page(page).get_layer(new_layer);
                    cursor = PAGE_HEIGHT_MM - MARGIN_MM;
                }
                layer.use_text(&wrapped, BODY_SIZE_PT, Mm(MARGIN_MM), Mm(cursor), &body_font);
                cursor -= LINE_HEIGHT_MM;
            }
        }

        doc.save_to_bytes().map_err(export_error)
    }
}

fn export_error(e: impl std::fmt::Display) -> AppError {
    log::error!("PDF rendering failed: {}", e);
    AppError::Export("Could not render the exam PDF".to_string())
}

fn wrap_line(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_questions() -> Vec<Question> {
        vec![
            Question::new(
                "What does the constitution establish?",
                vec![
                    "A) Fundamental rights".to_string(),
                    "B) Trade tariffs".to_string(),
                    "C) Postal routes".to_string(),
                    "D) Naming conventions".to_string(),
                ],
                "A",
            ),
            Question::new(
                "Which branch interprets the law?",
                vec![
                    "A) Executive".to_string(),
                    "B) Judiciary".to_string(),
                    "C) Legislature".to_string(),
                    "D) Military".to_string(),
                ],
                "B",
            ),
        ]
    }

    #[test]
    fn document_lines_contain_topic_and_prompts_in_order() {
        let questions = sample_questions();
        let lines = ExportService::document_lines("Constitutional Law", &questions);

        assert_eq!(lines[0], "Simulado: Constitutional Law");

        let first = lines
            .iter()
            .position(|l| l.contains("What does the constitution establish?"))
            .expect("first prompt present");
        let second = lines
            .iter()
            .position(|l| l.contains("Which branch interprets the law?"))
            .expect("second prompt present");
        assert!(first < second);

        assert!(lines.contains(&"B) Judiciary".to_string()));
    }

    #[test]
    fn document_lines_numbering_matches_question_order() {
        let questions = sample_questions();
        let lines = ExportService::document_lines("Law", &questions);

        assert!(lines
            .iter()
            .any(|l| l.starts_with("1. What does the constitution establish?")));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("2. Which branch interprets the law?")));
    }

    #[test]
    fn document_carries_no_grading_information() {
        let questions = sample_questions();
        let lines = ExportService::document_lines("Law", &questions);

        // Only the title, prompts and verbatim option texts appear; the
        // stored correct letters are never emitted as standalone content.
        for line in &lines {
            assert_ne!(line, "A");
            assert_ne!(line, "B");
            assert!(!line.contains("correct"));
        }
    }

    #[test]
    fn render_pdf_produces_pdf_bytes() {
        let questions = sample_questions();
        let bytes =
            ExportService::render_pdf("Constitutional Law", &questions).expect("render succeeds");

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn wrap_line_respects_word_boundaries() {
        let wrapped = wrap_line("one two three four five", 9);

        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn wrap_line_keeps_short_lines_whole() {
        assert_eq!(wrap_line("short", 90), vec!["short"]);
    }
}
