use contracts::dashboards::d404_fiscal_outlook::{FiscalRecord, InsightOutcome};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

use super::prompt;
use crate::shared::config::InsightConfig;
use crate::shared::llm::{LlmProvider, OpenAiProvider};

static INSIGHT_SERVICE: OnceCell<InsightService> = OnceCell::new();

/// Text insight service: one prompt, one remote call, one outcome.
///
/// Never retries and never returns an error: every failure is mapped to a
/// fixed user-facing message inside [`InsightOutcome`].
pub struct InsightService {
    provider: Option<Arc<dyn LlmProvider>>,
    timeout: Duration,
}

impl InsightService {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Provider is created only when a non-blank credential is configured
    pub fn from_config(config: &InsightConfig) -> Self {
        let provider = config.credential().map(|key| {
            Arc::new(OpenAiProvider::new_with_endpoint(
                config.api_base.clone(),
                key.to_string(),
                config.model.clone(),
                config.temperature,
                config.max_tokens,
            )) as Arc<dyn LlmProvider>
        });

        if provider.is_none() {
            tracing::warn!("D404: Insight API key is not configured, insights are disabled");
        }

        Self::new(provider, Duration::from_secs(config.timeout_secs.max(1)))
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.provider_name())
    }

    pub fn model(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.model())
    }

    pub async fn generate(&self, record: &FiscalRecord, request_id: &str) -> InsightOutcome {
        let Some(provider) = self.provider.as_ref() else {
            return InsightOutcome::not_configured();
        };

        let messages = prompt::build_messages(record);
        let started = std::time::Instant::now();

        match tokio::time::timeout(self.timeout, provider.chat_completion(messages)).await {
            Ok(Ok(response)) => match response.text() {
                Some(text) => {
                    tracing::info!(
                        "D404 insight [{}]: {} answered for {} in {}ms (tokens: {:?})",
                        request_id,
                        response.model,
                        record.name,
                        started.elapsed().as_millis(),
                        response.usage.map(|u| u.total())
                    );
                    InsightOutcome::resolved(text)
                }
                None => {
                    tracing::warn!(
                        "D404 insight [{}]: empty response for {} (finish_reason: {:?})",
                        request_id,
                        record.name,
                        response.finish_reason
                    );
                    InsightOutcome::unavailable()
                }
            }
            Ok(Err(e)) => {
                tracing::error!(
                    "D404 insight [{}]: {} error for {}: {}",
                    request_id,
                    e.kind(),
                    record.name,
                    e
                );
                InsightOutcome::remote_error()
            }
            Err(_) => {
                tracing::error!(
                    "D404 insight [{}]: timed out after {:?} for {}",
                    request_id,
                    self.timeout,
                    record.name
                );
                InsightOutcome::remote_error()
            }
        }
    }
}

pub fn initialize(service: InsightService) -> anyhow::Result<()> {
    INSIGHT_SERVICE
        .set(service)
        .map_err(|_| anyhow::anyhow!("D404 insight service already initialized"))
}

pub fn get_service() -> anyhow::Result<&'static InsightService> {
    INSIGHT_SERVICE
        .get()
        .ok_or_else(|| anyhow::anyhow!("D404 insight service is not initialized"))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::shared::llm::{ChatMessage, LlmError, LlmProvider, LlmResponse, TokenUsage};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    pub enum Reply {
        Text(&'static str),
        Error,
    }

    /// Провайдер-заглушка: отвечает заданным текстом после задержки
    pub struct ScriptedProvider {
        pub reply: Reply,
        pub delay: Duration,
        pub calls: AtomicUsize,
    }

    impl ScriptedProvider {
        pub fn new(reply: Reply, delay: Duration) -> Self {
            Self {
                reply,
                delay,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<LlmResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            match self.reply {
                Reply::Text(text) => {
                    // echo the municipality so tests can tell answers apart
                    let prompt = messages.last().map(|m| m.content.as_str()).unwrap_or("");
                    let content = text.replace(
                        "{prompt_head}",
                        prompt.lines().next().unwrap_or_default(),
                    );
                    Ok(LlmResponse {
                        content,
                        model: "scripted".to_string(),
                        finish_reason: Some("Stop".to_string()),
                        usage: Some(TokenUsage {
                            prompt: 40,
                            completion: 2,
                        }),
                    })
                }
                Reply::Error => Err(LlmError::NetworkError("connection reset".to_string())),
            }
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }
}
