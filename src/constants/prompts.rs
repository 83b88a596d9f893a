/// Per-question JSON shape the generative service is asked to produce.
/// Each option carries its own letter label; `answer` is the single
/// uppercase letter of the correct option.
pub const QUESTION_SET_FORMAT: &str = r#"[
  {"question": "text", "options": ["A) ", "B) ", "C) ", "D) "], "answer": "uppercase_letter"}
]"#;

/// Builds the instruction sent to the generative-text service for a
/// multiple-choice question set on `topic`.
pub fn question_set_prompt(topic: &str, count: u8) -> String {
    format!(
        "Generate {count} multiple-choice questions about '{topic}' for a civil service exam.\n\
         Return ONLY raw JSON (no markdown) in the format:\n{format}",
        count = count,
        topic = topic,
        format = QUESTION_SET_FORMAT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_topic_count_and_shape() {
        let prompt = question_set_prompt("Direito Constitucional", 10);

        assert!(prompt.contains("10 multiple-choice questions"));
        assert!(prompt.contains("'Direito Constitucional'"));
        assert!(prompt.contains("ONLY raw JSON"));
        assert!(prompt.contains("\"answer\": \"uppercase_letter\""));
    }
}
