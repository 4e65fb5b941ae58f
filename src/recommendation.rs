use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::gemini::{GenerationResult, TextGenerator};

pub const GREETING_REPLY: &str = "Hello! How can I help you with corporate insurance today?";
pub const FALLBACK_REPLY: &str = "I couldn't generate an answer right now. Please try again.";

pub const DEFAULT_INSTRUCTION_PREAMBLE: &str = r#"You are a professional corporate insurance expert. Answer the user's question in a short, clear, and easy-to-read format.
- Use numbers (1, 2, 3, ...) for points, not bullets.
- Each point must start on a new line.
- Keep language simple, professional, and engaging.
- Make the answer concise, practical, and visually attractive.
- Avoid Markdown symbols (*, #, etc.).
- Focus only on the most important information.
- Do not include unnecessary details or very long paragraphs."#;

const GREETING_MARKERS: [&str; 3] = ["hello", "hi", "greetings"];

/// Substring match, not whole-word: "this" and "shipping" count as greetings.
pub fn is_greeting(input: &str) -> bool {
    let lowered = input.to_lowercase();
    GREETING_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

pub fn build_prompt(preamble: &str, question: &str) -> String {
    format!("{}\nQuestion: {}\n", preamble, question)
}

/// Picks between the greeting short-circuit and an AI-generated answer
pub struct RecommendationService {
    generator: Arc<dyn TextGenerator>,
    preamble: String,
}

impl RecommendationService {
    pub fn new(generator: Arc<dyn TextGenerator>, preamble: impl Into<String>) -> Self {
        Self {
            generator,
            preamble: preamble.into(),
        }
    }

    /// Always returns a non-empty reply; generation failures become [`FALLBACK_REPLY`].
    pub async fn recommend(&self, input: &str) -> String {
        if is_greeting(input) {
            info!("Greeting detected, skipping generation");
            return GREETING_REPLY.to_string();
        }

        let prompt = build_prompt(&self.preamble, input);
        debug!("Built prompt: {}", prompt);

        match self.generator.generate(&prompt).await {
            GenerationResult::Success(text) if !text.trim().is_empty() => text,
            GenerationResult::Success(_) | GenerationResult::NoResult => {
                warn!("No usable generation, returning fallback reply");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingGenerator {
        result: GenerationResult,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingGenerator {
        fn new(result: GenerationResult) -> Arc<Self> {
            Arc::new(Self {
                result,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> GenerationResult {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.result.clone()
        }
    }

    fn service(generator: Arc<RecordingGenerator>) -> RecommendationService {
        RecommendationService::new(generator, DEFAULT_INSTRUCTION_PREAMBLE)
    }

    #[test]
    fn test_is_greeting() {
        assert!(is_greeting("hello"));
        assert!(is_greeting("HELLO there"));
        assert!(is_greeting("Hi!"));
        assert!(is_greeting("Season's Greetings"));
        assert!(!is_greeting("what does liability coverage include"));
        assert!(!is_greeting(""));
    }

    #[test]
    fn test_is_greeting_matches_substrings() {
        // Kept as-is: any word containing "hi" short-circuits.
        assert!(is_greeting("this"));
        assert!(is_greeting("Which policy covers shipping?"));
        assert!(is_greeting("Othello"));
    }

    #[test]
    fn test_build_prompt_embeds_question_verbatim() {
        let prompt = build_prompt(DEFAULT_INSTRUCTION_PREAMBLE, "  Is \"D&O\" worth it?\n");
        assert!(prompt.starts_with(DEFAULT_INSTRUCTION_PREAMBLE));
        assert!(prompt.contains("Question:   Is \"D&O\" worth it?\n"));
    }

    #[tokio::test]
    async fn test_greeting_skips_generator() {
        let generator = RecordingGenerator::new(GenerationResult::Success("unused".into()));
        let service = service(generator.clone());

        for input in ["hello", "Hi there", "GREETINGS", "this"] {
            assert_eq!(service.recommend(input).await, GREETING_REPLY);
        }
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_question_returns_generated_text() {
        let answer = "1. Third-party bodily injury\n2. Property damage";
        let generator = RecordingGenerator::new(GenerationResult::Success(answer.into()));
        let service = service(generator.clone());

        let reply = service
            .recommend("what does liability coverage include")
            .await;

        assert_eq!(reply, answer);
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(DEFAULT_INSTRUCTION_PREAMBLE));
        assert!(prompts[0].contains("what does liability coverage include"));
    }

    #[tokio::test]
    async fn test_no_result_returns_fallback() {
        let generator = RecordingGenerator::new(GenerationResult::NoResult);
        let service = service(generator.clone());

        let reply = service.recommend("how are claims processed").await;

        assert_eq!(reply, FALLBACK_REPLY);
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_success_returns_fallback() {
        let generator = RecordingGenerator::new(GenerationResult::Success("   ".into()));
        let reply = service(generator).recommend("cyber insurance basics").await;
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_empty_input_goes_to_generator() {
        let generator = RecordingGenerator::new(GenerationResult::NoResult);
        let service = service(generator.clone());

        assert_eq!(service.recommend("").await, FALLBACK_REPLY);
        assert_eq!(generator.prompts().len(), 1);
        assert!(generator.prompts()[0].ends_with("Question: \n"));
    }

    #[tokio::test]
    async fn test_custom_preamble_is_used() {
        let generator = RecordingGenerator::new(GenerationResult::NoResult);
        let service = RecommendationService::new(generator.clone(), "Answer in one line.");

        service.recommend("what is key person cover").await;

        assert_eq!(
            generator.prompts()[0],
            "Answer in one line.\nQuestion: what is key person cover\n"
        );
    }
}
