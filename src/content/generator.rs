//! Content generators: the language-model upstream and an offline template.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::api::{ContentSchemaError, PlanetContent, PlanetSummary};

/// Failure of a single generation attempt.
///
/// Callers absorb these into fallback content; the variants exist for
/// logging and for the endpoint's status mapping.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("upstream API key not configured")]
    MissingApiKey,

    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("upstream reply was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upstream reply was empty")]
    EmptyReply,

    #[error("generated content violates the schema: {0}")]
    Schema(#[from] ContentSchemaError),
}

/// A source of planet flavor content.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, planet: &PlanetSummary) -> Result<PlanetContent, GenerateError>;
}

/// Default chat-completions endpoint.
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Generator backed by the OpenAI chat-completions API.
pub struct OpenAiGenerator {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: OPENAI_API_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Point at a non-default API URL (used by tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn prompt(planet: &PlanetSummary) -> String {
        format!(
            "You are a hilarious, sarcastic travel guide writer for Star Wars planets. \
             Generate travel content for the planet \"{name}\" with these characteristics:\n\n\
             - Climate: {climate}\n\
             - Terrain: {terrain}\n\
             - Population: {population}\n\
             - Gravity: {gravity}\n\
             - Diameter: {diameter} km\n\n\
             Create:\n\
             1. A short, punchy tagline (max 60 characters)\n\
             2. A funny, engaging travel guide description (2-3 sentences, ~100-150 words) \
             that references the planet's actual characteristics\n\
             3. Keep the tone humorous, slightly sarcastic, but inviting\n\
             4. Include practical \"tips\" that are funny but related to the planet's features\n\n\
             Format your response as JSON with tagline, travelGuide, and emoji fields.",
            name = planet.name,
            climate = planet.climate,
            terrain = planet.terrain,
            population = planet.population,
            gravity = planet.gravity,
            diameter = planet.diameter,
        )
    }

    /// Decode the model's reply, salvaging a brace-delimited JSON span from
    /// chatty output before giving up.
    fn parse_reply(reply: &str) -> Result<PlanetContent, GenerateError> {
        let content: PlanetContent = match serde_json::from_str(reply) {
            Ok(content) => content,
            Err(first_err) => {
                let start = reply.find('{');
                let end = reply.rfind('}');
                match (start, end) {
                    (Some(start), Some(end)) if end > start => {
                        serde_json::from_str(&reply[start..=end])?
                    }
                    _ => return Err(first_err.into()),
                }
            }
        };

        content.validate()?;
        Ok(content)
    }
}

#[async_trait]
impl ContentGenerator for OpenAiGenerator {
    async fn generate(&self, planet: &PlanetSummary) -> Result<PlanetContent, GenerateError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": "You are a witty travel guide writer specializing in Star Wars \
                        planets. You write in a fun, humorous style similar to Douglas Adams \
                        or Terry Pratchett.",
                },
                { "role": "user", "content": Self::prompt(planet) },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "planet_content",
                    "strict": true,
                    "schema": {
                        "type": "object",
                        "properties": {
                            "tagline": {
                                "type": "string",
                                "description": "Short, punchy tagline (<= 60 chars) for the planet",
                            },
                            "travelGuide": {
                                "type": "string",
                                "description": "Funny, engaging travel guide (~100-150 words) referencing actual characteristics",
                            },
                            "emoji": {
                                "type": "string",
                                "description": "A single relevant emoji",
                            },
                        },
                        "required": ["tagline", "travelGuide", "emoji"],
                        "additionalProperties": false,
                    },
                },
            },
            "max_tokens": 300,
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::UpstreamStatus(status.as_u16()));
        }

        let completion: ChatCompletion = response.json::<ChatCompletion>().await?;
        let reply = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(GenerateError::EmptyReply)?;

        debug!(planet = %planet.name, "decoding generated content");
        Self::parse_reply(&reply)
    }
}

/// Offline generator returning a fixed, name-personalized template.
///
/// Deliberately deterministic: the same planet always gets the same text,
/// which keeps offline behavior reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    /// The template the server also uses for graceful degradation.
    pub fn content_for_name(name: &str) -> PlanetContent {
        PlanetContent {
            tagline: format!("A galactic adventure awaits on {name}!"),
            travel_guide: format!(
                "Welcome to {name}, a planet of mystery and wonder! While intergalactic \
                 signals seem jammed right now, you can rest assured that {name} offers \
                 unforgettable scenery, quirky locals, and a climate best described as \
                 'surprising.' Don't forget to pack a towel and bring your sense of humor. \
                 May the fun be with you!"
            ),
            emoji: "🪐".to_string(),
        }
    }
}

#[async_trait]
impl ContentGenerator for TemplateGenerator {
    async fn generate(&self, planet: &PlanetSummary) -> Result<PlanetContent, GenerateError> {
        Ok(Self::content_for_name(&planet.name))
    }
}
