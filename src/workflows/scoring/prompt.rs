use super::domain::QaPair;
use std::fmt::Write;

/// Render the scoring prompt for a completed interview transcript.
///
/// The prompt pins down the JSON shape the normalizer expects: per-question
/// scores on a 0-100 scale with strengths/improvements lists, plus the
/// overall aggregates. Models still deviate from it often enough that the
/// normalizer assumes nothing.
pub fn scoring_prompt(transcript: &[QaPair]) -> String {
    let num_questions = transcript.len();

    let mut transcript_text = String::from("Interview Transcript:\n\n");
    for (index, entry) in transcript.iter().enumerate() {
        let turn = index + 1;
        let _ = writeln!(transcript_text, "Q{turn}: {}", entry.question);
        let _ = writeln!(transcript_text, "A{turn}: {}\n", entry.answer);
    }

    format!(
        r#"You are a senior technical hiring manager. Analyze the following interview transcript, which contains {num_questions} question-and-answer pairs.

For EACH of the {num_questions} questions provide:
1. A score from 0-100 for the answer's technical depth and problem-solving.
2. 1-3 specific strengths of the answer.
3. 0-3 concrete improvements the candidate should make.

After scoring all {num_questions} questions individually, provide:
1. A final overall score (0-100) across all questions.
2. 1-5 overall strengths and 1-5 overall improvements.

{transcript_text}
IMPORTANT: You MUST cover ALL {num_questions} questions individually before the overall summary.

Respond with JSON only, in exactly this shape:
{{
  "overall_score": 75,
  "overall_strengths": ["..."],
  "overall_improvements": ["..."],
  "questions": [
    {{
      "question": "...",
      "answer": "...",
      "score": 80,
      "strengths": ["..."],
      "improvements": ["..."]
    }}
  ]
}}"#
    )
}
