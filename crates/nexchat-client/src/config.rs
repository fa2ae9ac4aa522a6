//! Assistant service configuration.
//!
//! Declared surface consumed by the external AI collaborator; nothing in
//! this crate interprets the sampling parameters.  All settings have
//! defaults so the client runs with zero configuration, and every one can
//! be overridden from the environment.

use serde::Serialize;

/// Sampling, transport, and caching parameters for the assistant backend.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssistantConfig {
    /// Chat endpoint of the assistant backend.
    /// Env: `NEXCHAT_AI_ENDPOINT`
    pub endpoint: String,

    /// Per-request timeout before falling back to the local responder.
    /// Env: `NEXCHAT_AI_TIMEOUT_MS`
    pub request_timeout_ms: u64,

    /// Env: `NEXCHAT_AI_TEMPERATURE`
    pub temperature: f32,

    /// Env: `NEXCHAT_AI_MAX_TOKENS`
    pub max_tokens: u32,

    /// Env: `NEXCHAT_AI_TOP_P`
    pub top_p: f32,

    /// Env: `NEXCHAT_AI_FREQUENCY_PENALTY`
    pub frequency_penalty: f32,

    /// Env: `NEXCHAT_AI_PRESENCE_PENALTY`
    pub presence_penalty: f32,

    /// Whether responses pass through content moderation.
    /// Env: `NEXCHAT_AI_MODERATION` (true/false)
    pub moderation_enabled: bool,

    /// Response cache capacity (entries, oldest evicted first).
    /// Env: `NEXCHAT_AI_CACHE_MAX`
    pub cache_max_entries: usize,

    /// Response cache entry lifetime.
    /// Env: `NEXCHAT_AI_CACHE_TTL_SECS`
    pub cache_ttl_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/ai/chat".to_string(),
            request_timeout_ms: 10_000,
            temperature: 0.7,
            max_tokens: 2000,
            top_p: 0.9,
            frequency_penalty: 0.6,
            presence_penalty: 0.6,
            moderation_enabled: true,
            cache_max_entries: 100,
            cache_ttl_secs: 3600,
        }
    }
}

impl AssistantConfig {
    /// Load from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: lookup("NEXCHAT_AI_ENDPOINT").unwrap_or(defaults.endpoint),
            request_timeout_ms: parse(&lookup, "NEXCHAT_AI_TIMEOUT_MS", defaults.request_timeout_ms),
            temperature: parse(&lookup, "NEXCHAT_AI_TEMPERATURE", defaults.temperature),
            max_tokens: parse(&lookup, "NEXCHAT_AI_MAX_TOKENS", defaults.max_tokens),
            top_p: parse(&lookup, "NEXCHAT_AI_TOP_P", defaults.top_p),
            frequency_penalty: parse(
                &lookup,
                "NEXCHAT_AI_FREQUENCY_PENALTY",
                defaults.frequency_penalty,
            ),
            presence_penalty: parse(
                &lookup,
                "NEXCHAT_AI_PRESENCE_PENALTY",
                defaults.presence_penalty,
            ),
            moderation_enabled: parse(&lookup, "NEXCHAT_AI_MODERATION", defaults.moderation_enabled),
            cache_max_entries: parse(&lookup, "NEXCHAT_AI_CACHE_MAX", defaults.cache_max_entries),
            cache_ttl_secs: parse(&lookup, "NEXCHAT_AI_CACHE_TTL_SECS", defaults.cache_ttl_secs),
        }
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
