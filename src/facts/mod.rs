//! Antipode facts
//!
//! Produces a short list of facts about a coordinate pair. When an
//! OpenAI API key is configured the facts come from the chat completions
//! API; on any failure, or with no key, a random sample from the
//! built-in pool is used instead. Generation never errors.

use crate::constants::api::OPENAI_CHAT_URL;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

/// Number of facts returned per request
pub const FACT_COUNT: usize = 8;

/// Chat model used for generation
const OPENAI_MODEL: &str = "gpt-4o";

/// Static fact pool used when generation is unavailable
const FALLBACK_FACTS: &[&str] = &[
    "Most antipodes are in the ocean! About 71% of Earth's surface is water.",
    "Spain and New Zealand are nearly perfect antipodes of each other.",
    "If you could dig straight through Earth, it would take about 42 minutes to fall to the other side!",
    "The word 'antipode' comes from Greek, meaning 'with feet opposite'.",
    "China's antipode is mostly in Argentina and Chile.",
    "Very few major cities have their antipodes on land.",
    "The antipode of the North Pole is the South Pole!",
    "Hawaii's antipode is in Botswana, Africa.",
    "Less than 15% of land has land at its antipode.",
    "The antipode of Madrid lies near Wellington, New Zealand.",
    "British settlers called Australia and New Zealand 'the Antipodes' because they sit roughly opposite Britain.",
    "No matter where you stand, your antipode shares your distance to Earth's center.",
];

/// OpenAI chat completions response (relevant fields only)
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Random sample of facts from the built-in pool
pub fn fallback_facts() -> Vec<String> {
    let mut rng = rand::thread_rng();
    FALLBACK_FACTS
        .choose_multiple(&mut rng, FACT_COUNT)
        .map(|s| s.to_string())
        .collect()
}

/// AI-backed facts client with static fallback
#[derive(Debug, Clone)]
pub struct FactsClient {
    client: reqwest::Client,
    api_key: String,
}

impl FactsClient {
    /// Create a client with the given API key (may be empty)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Whether a usable API key is present
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Facts for a coordinate pair
    ///
    /// Falls back to the static pool when no key is configured, the
    /// request fails, or the response is malformed.
    pub async fn generate(&self, origin: Coordinates, antipode: Coordinates) -> Vec<String> {
        if !self.is_configured() {
            return fallback_facts();
        }

        match self.request_facts(origin, antipode).await {
            Ok(facts) if facts.len() == FACT_COUNT => facts,
            Ok(facts) => {
                warn!("Facts API returned {} facts, using fallback", facts.len());
                fallback_facts()
            }
            Err(e) => {
                warn!("Facts generation failed: {}", e);
                fallback_facts()
            }
        }
    }

    /// Call the chat completions API and parse the JSON-array reply
    async fn request_facts(
        &self,
        origin: Coordinates,
        antipode: Coordinates,
    ) -> Result<Vec<String>> {
        let body = json!({
            "model": OPENAI_MODEL,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a geography expert who creates engaging, educational facts about antipodes and Earth's geography. Always respond with valid JSON arrays only."
                },
                {
                    "role": "user",
                    "content": build_prompt(origin, antipode)
                }
            ],
            "temperature": 0.8,
            "max_tokens": 800
        });

        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Facts(format!("Facts request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Facts(format!(
                "Facts API returned status: {}",
                response.status()
            )));
        }

        let data: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Facts(format!("Failed to parse facts response: {}", e)))?;

        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Facts("Empty facts response".to_string()))?;

        let facts: Vec<String> = serde_json::from_str(&content)?;
        Ok(facts)
    }
}

/// Prompt asking for location-specific and general antipode facts
fn build_prompt(origin: Coordinates, antipode: Coordinates) -> String {
    format!(
        "Generate {count} interesting facts about antipodes (opposite points on Earth).\n\n\
         User's location: {olat:.2}, {olon:.2}\n\
         Antipode location: {alat:.2}, {alon:.2}\n\n\
         Requirements:\n\
         - 4 facts should be specific to these coordinates or the countries/regions they're in\n\
         - 4 facts should be general about antipodes, Earth's geography, or related science\n\
         - Each fact should be 1-2 sentences, engaging and educational\n\
         - Mix fun trivia with scientific information\n\
         - Keep facts concise (under 150 characters each)\n\n\
         Return ONLY a JSON array of {count} strings, nothing else.",
        count = FACT_COUNT,
        olat = origin.lat,
        olon = origin.lon,
        alat = antipode.lat,
        alon = antipode.lon,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_facts_count() {
        let facts = fallback_facts();
        assert_eq!(facts.len(), FACT_COUNT);
    }

    #[test]
    fn test_fallback_facts_no_duplicates() {
        let mut facts = fallback_facts();
        facts.sort();
        facts.dedup();
        assert_eq!(facts.len(), FACT_COUNT);
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt(
            Coordinates::new(40.7128, -74.0060),
            Coordinates::new(-40.7128, 105.9940),
        );

        assert!(prompt.contains("40.71"));
        assert!(prompt.contains("105.99"));
        assert!(prompt.contains("JSON array"));
    }

    #[tokio::test]
    async fn test_generate_without_key_uses_fallback() {
        let client = FactsClient::new("");
        let facts = client
            .generate(
                Coordinates::new(40.7128, -74.0060),
                Coordinates::new(-40.7128, 105.9940),
            )
            .await;

        assert_eq!(facts.len(), FACT_COUNT);
    }

    #[test]
    fn test_parse_chat_response() {
        let data: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                {"message": {"content": "[\"a\", \"b\"]"}}
            ]
        }))
        .unwrap();

        let content = data.choices[0].message.content.as_ref().unwrap();
        let facts: Vec<String> = serde_json::from_str(content).unwrap();
        assert_eq!(facts, vec!["a", "b"]);
    }
}
