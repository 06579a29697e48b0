use tracing::debug;

use crate::ai::MoodModel;
use crate::error::ApiError;
use crate::sentiment::SentimentLabel;

const SYSTEM_PROMPT: &str = "You are an AI wellness assistant";
const AI_SEPARATOR: &str = " Also, here's a suggestion from AI: ";

fn static_suggestion(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => {
            "You're in a great mood! Here are some suggestions: Try sharing your \
             positivity with others, plan a fun activity, or enjoy a nature walk."
        }
        SentimentLabel::Negative => {
            "It seems like you're feeling down. Take some time for self-care. \
             Consider activities like meditation, deep breathing, or connecting \
             with a friend."
        }
        SentimentLabel::Neutral => {
            "You're feeling neutral. A productive task or a small creative \
             activity might lift your spirits."
        }
    }
}

/// Build the combined recommendation: static per-label suggestion, fixed
/// separator, then the generative model's free-text output. A failed upstream
/// call fails the whole operation; there is no partial response, retry, or
/// cache.
pub async fn compose(model: &dyn MoodModel, label: SentimentLabel) -> Result<String, ApiError> {
    let prompt = format!("I'm feeling {label}. Suggest some activities based on this mood.");

    let ai_suggestion = model
        .suggest(SYSTEM_PROMPT, &prompt)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    debug!(%label, "recommendation composed");
    Ok(format!(
        "{}{}{}",
        static_suggestion(label),
        AI_SEPARATOR,
        ai_suggestion
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct OkModel;

    #[async_trait]
    impl MoodModel for OkModel {
        async fn suggest(&self, _system: &str, user: &str) -> anyhow::Result<String> {
            assert!(user.contains("I'm feeling"));
            Ok("Try journaling outdoors.".to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl MoodModel for FailingModel {
        async fn suggest(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
            anyhow::bail!("quota exceeded")
        }
    }

    #[tokio::test]
    async fn combines_static_suggestion_and_model_output() {
        let result = compose(&OkModel, SentimentLabel::Positive)
            .await
            .expect("compose");
        assert!(result.starts_with("You're in a great mood!"));
        assert!(result.contains(AI_SEPARATOR));
        assert!(result.ends_with("Try journaling outdoors."));
    }

    #[tokio::test]
    async fn each_label_has_its_own_static_suggestion() {
        let positive = static_suggestion(SentimentLabel::Positive);
        let neutral = static_suggestion(SentimentLabel::Neutral);
        let negative = static_suggestion(SentimentLabel::Negative);
        assert_ne!(positive, neutral);
        assert_ne!(neutral, negative);
        assert_ne!(positive, negative);
        assert!(!positive.is_empty() && !neutral.is_empty() && !negative.is_empty());
    }

    #[tokio::test]
    async fn upstream_failure_fails_the_whole_operation() {
        let err = compose(&FailingModel, SentimentLabel::Negative)
            .await
            .unwrap_err();
        match err {
            ApiError::Upstream(detail) => assert!(detail.contains("quota exceeded")),
            other => panic!("expected Upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn prompt_embeds_the_label() {
        struct CapturingModel;

        #[async_trait]
        impl MoodModel for CapturingModel {
            async fn suggest(&self, system: &str, user: &str) -> anyhow::Result<String> {
                assert_eq!(system, SYSTEM_PROMPT);
                assert!(user.contains("Negative"));
                Ok(String::new())
            }
        }

        compose(&CapturingModel, SentimentLabel::Negative)
            .await
            .expect("compose");
    }
}
