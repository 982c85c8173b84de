use log::warn;

use crate::{AssistantUnavailable, Course, Level};

#[allow(async_fn_in_trait)]
pub trait LanguageModel {
    async fn prompt(&self, prompt: &str) -> Result<String, AssistantUnavailable>;
}

/// Model used when no assistant session could be created.
pub struct Offline;

impl LanguageModel for Offline {
    async fn prompt(&self, _: &str) -> Result<String, AssistantUnavailable> {
        Err(AssistantUnavailable("no session".to_string()))
    }
}

/// Chat assistant answering from a language model session, or from canned replies if the
/// session is unavailable.
pub struct Assistant<M> {
    model: M,
}

impl<M: LanguageModel> Assistant<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Never fails, errors of the model are answered with a canned reply.
    pub async fn ask(&self, prompt: &str, course: Course, level: Level) -> String {
        match self.model.prompt(prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("falling back to canned reply: {err}");
                canned_reply(prompt, course, level)
            }
        }
    }
}

#[must_use]
pub fn canned_reply(prompt: &str, course: Course, level: Level) -> String {
    let prompt = prompt.to_lowercase();
    if prompt.contains("hiit") || prompt.contains("strength") {
        format!(
            "Based on your {course} course, high intensity is key. Keep intervals short but explosive."
        )
    } else if prompt.contains("neck") || prompt.contains("back") {
        "For neck and back health, posture is priority. Keep your spine aligned during all exercises."
            .to_string()
    } else if prompt.contains("level") {
        format!(
            "You are Level {level}. Durations are scaled by +{}%.",
            u64::from(u32::from(level)) * 10
        )
    } else {
        "I am processing your biometric data. Maintain consistency to upgrade your neural firmware."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use futures_util::FutureExt;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    struct Echo;

    impl LanguageModel for Echo {
        async fn prompt(&self, prompt: &str) -> Result<String, AssistantUnavailable> {
            Ok(format!("echo: {prompt}"))
        }
    }

    #[rstest]
    #[case(
        "Plan a HIIT session",
        "Based on your cardio course, high intensity is key. Keep intervals short but explosive."
    )]
    #[case(
        "more strength please",
        "Based on your cardio course, high intensity is key. Keep intervals short but explosive."
    )]
    #[case(
        "My NECK hurts",
        "For neck and back health, posture is priority. Keep your spine aligned during all exercises."
    )]
    #[case(
        "lower back pain",
        "For neck and back health, posture is priority. Keep your spine aligned during all exercises."
    )]
    #[case("What level am I?", "You are Level 3. Durations are scaled by +30%.")]
    #[case(
        "hello",
        "I am processing your biometric data. Maintain consistency to upgrade your neural firmware."
    )]
    #[case(
        "",
        "I am processing your biometric data. Maintain consistency to upgrade your neural firmware."
    )]
    fn test_canned_reply(#[case] prompt: &str, #[case] expected: &str) {
        assert_eq!(
            canned_reply(prompt, Course::Cardio, Level::new(3).unwrap()),
            expected
        );
    }

    #[test]
    fn test_canned_reply_keyword_precedence() {
        assert_eq!(
            canned_reply("strength for my back", Course::Zen, Level::ONE),
            "Based on your zen course, high intensity is key. Keep intervals short but explosive."
        );
    }

    #[test]
    fn test_assistant_ask_live() {
        let assistant = Assistant::new(Echo);
        assert_eq!(
            assistant
                .ask("level?", Course::Strength, Level::ONE)
                .now_or_never(),
            Some("echo: level?".to_string())
        );
    }

    #[test]
    fn test_assistant_ask_offline() {
        let assistant = Assistant::new(Offline);
        assert_eq!(
            assistant
                .ask("level?", Course::Strength, Level::ONE)
                .now_or_never(),
            Some("You are Level 1. Durations are scaled by +10%.".to_string())
        );
    }
}
