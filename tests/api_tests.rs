// Tests for API client construction and the summary prompt template

use meeting_scribe::api::{render_summary_prompt, OpenAiSummarizer, OpenAiTranscriber};

#[test]
fn test_summary_prompt_embeds_transcript() {
    let prompt = render_summary_prompt("discutimos o cronograma");

    assert!(prompt.contains("####discutimos o cronograma####"));
    assert!(
        !prompt.contains("{transcript}"),
        "Template marker should be fully substituted"
    );
    assert!(prompt.starts_with("Faça o resumo"));
}

#[test]
fn test_transcriber_rejects_empty_base_url() {
    let result = OpenAiTranscriber::new(
        "",
        "key".to_string(),
        "whisper-1".to_string(),
        "pt".to_string(),
    );
    assert!(result.is_err());
}

#[test]
fn test_transcriber_rejects_scheme_less_base_url() {
    let result = OpenAiTranscriber::new(
        "api.openai.com",
        "key".to_string(),
        "whisper-1".to_string(),
        "pt".to_string(),
    );
    assert!(result.is_err());
}

#[test]
fn test_summarizer_accepts_trailing_slash() {
    let result = OpenAiSummarizer::new(
        "https://api.openai.com/",
        "key".to_string(),
        "gpt-4o-mini".to_string(),
    );
    assert!(result.is_ok());
}
