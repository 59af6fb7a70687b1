//! Conversion Service - text to emoji, room names and missions
//!
//! Every operation follows the same shape: build a prompt, call the
//! chat-completion API in JSON-object mode, pull one field out of the reply,
//! and fall back locally when anything goes wrong. Callers never see an
//! error; failures are logged and replaced.
//!
//! Two kinds of fallback exist on purpose. When the API cannot be used (no
//! credential, transport failure, unparseable reply) the result is a random
//! pick from the local pools. When the API answers with a well-formed object
//! that lacks the expected name or mission, a fixed default is used instead.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, error, instrument, warn};

use crate::application::ports::outbound::{
    ChatMessage, LlmError, LlmPort, LlmRequest, ResponseFormat,
};
use crate::application::services::FallbackResolver;
use crate::domain::entities::{RoomObject, DEFAULT_ROOM_NAME};
use crate::domain::services::DEFAULT_MISSION;
use crate::domain::value_objects::ApiCredential;

/// Why a completion could not be used
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Response shape error: {0}")]
    ResponseShape(String),
}

impl From<LlmError> for ConversionError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Transport(_) | LlmError::Status(_) => Self::Transport(e.to_string()),
            LlmError::MalformedResponse(msg) => Self::ResponseShape(msg),
        }
    }
}

/// Outcome of a single request to the API
#[derive(Debug)]
pub enum Completion<T> {
    /// No usable credential; the API was not contacted
    NoCredential,
    Success(T),
    Failure(ConversionError),
}

/// Fixed parameters of one kind of request
struct PromptContract {
    operation: &'static str,
    system_prompt: &'static str,
    temperature: f32,
    max_tokens: u32,
}

const EMOJI_PROMPT: PromptContract = PromptContract {
    operation: "convert_to_emoji",
    system_prompt: r#"You are an emoji translator. Convert user's text input into 1-3 emojis.

Rules:
1. If the input is a concrete object (e.g., "peach", "cake", "lamp"), return direct emoji(s).
2. If the input is a sensory/abstract experience (e.g., "smell of fresh laundry", "quiet afternoon"), return metaphorical emoji(s) that capture the feeling, color, texture, or atmosphere.
3. Allow slightly off-metaphors - resonance is more important than accuracy.
4. Return ONLY a JSON object in this exact format: {"emojis": ["emoji1", "emoji2"]}
5. Do not include any text, explanation, or markdown formatting. Only return the JSON object.

Examples:
- "peach" → {"emojis": ["🍑"]}
- "green tea cake" → {"emojis": ["🍰", "🍵"]}
- "smell of fresh laundry" → {"emojis": ["🫧", "☁️"]}
- "quiet afternoon" → {"emojis": ["🌤️", "📖"]}"#,
    temperature: 0.7,
    max_tokens: 50,
};

const ROOM_NAME_PROMPT: PromptContract = PromptContract {
    operation: "suggest_room_name",
    system_prompt: r#"You suggest room names based on objects placed in the room.
Return ONLY a JSON object in this format: {"name": "room name"}

Important rules:
1. The name must include words that convey "room" or "space" feeling, such as: "방", "공간", "서재", "온실", "정원", "작은 방", "나만의 방" etc.
2. Examples of good names: "동물과 함께하는 방", "향기로운 공간", "별빛 서재", "따뜻한 온실", "책이 있는 방"
3. Avoid names that just describe objects without room feeling (e.g., "동물친구들" ❌, "동물과 함께하는 방" ✅)
4. The name should be 2-5 words, poetic and evocative
5. Do not include any explanation or markdown. Only return the JSON object."#,
    temperature: 0.8,
    max_tokens: 30,
};

const MISSION_PROMPT: PromptContract = PromptContract {
    operation: "generate_mission",
    system_prompt: r#"사용자가 가상 공간에 배치한 오브젝트들을 분석하여 마음을 따뜻하게 하는 미션을 생성하세요.

중요한 원칙:
1. 미션은 반드시 한국어로 작성하세요.
2. 일차원적이고 단순한 활동이 아닌, 감성적이고 마음을 따뜻하게 만드는 미션을 제안하세요.
3. 좋은 예시:
   - "오늘 하루 중 가장 따뜻했던 순간을 떠올려보기"
   - "소중한 사람에게 작은 편지를 써보기"
   - "창밖을 보며 잠시 쉬어가기"
   - "좋아하는 음악을 들으며 한숨 돌리기"
   - "오늘 감사했던 일 한 가지를 적어보기"
   - "따뜻한 차 한 잔과 함께 자신을 돌아보는 시간 갖기"
4. 나쁜 예시 (일차원적): "강아지 사진 다섯 개 찾아서 저장해보기", "기니피그에 대한 사실 찾아보기"
5. 오브젝트들의 패턴을 감지하여 그 느낌과 연결된 감성적 활동을 제안하세요
6. 부드럽고 따뜻한 톤으로, 강요하지 않는 제안 형태
7. 한 문장, 25단어 이내

반환 형식: {"mission": "미션 텍스트"}
설명이나 마크다운 없이 JSON 객체만 반환하세요."#,
    temperature: 0.9,
    max_tokens: 80,
};

/// Service turning free text and room contents into emoji, names and missions
pub struct ConversionService<L: LlmPort> {
    llm: Arc<L>,
    credential: ApiCredential,
    fallback: FallbackResolver,
}

impl<L: LlmPort> ConversionService<L> {
    /// Create a new conversion service
    pub fn new(llm: Arc<L>, credential: ApiCredential, fallback: FallbackResolver) -> Self {
        Self {
            llm,
            credential,
            fallback,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_configured()
    }

    /// Convert free text into 1-3 emoji
    ///
    /// Always returns a non-empty string.
    #[instrument(skip(self))]
    pub async fn convert_to_emoji(&self, text: &str) -> String {
        match self.complete_json(&EMOJI_PROMPT, text.to_string()).await {
            Completion::Success(reply) => match extract_emojis(&reply) {
                Ok(emojis) => emojis,
                Err(e) => {
                    error!("Unusable emoji reply: {}", e);
                    self.fallback.resolve_emoji(text)
                }
            },
            Completion::NoCredential => {
                warn!("OpenAI API key not found. Using fallback conversion.");
                self.fallback.resolve_emoji(text)
            }
            Completion::Failure(e) => {
                error!("Emoji conversion failed: {}", e);
                self.fallback.resolve_emoji(text)
            }
        }
    }

    /// Suggest a poetic name for a room holding `objects`
    #[instrument(skip(self, objects), fields(objects = objects.len()))]
    pub async fn suggest_room_name(&self, objects: &[RoomObject]) -> String {
        let (texts, emojis) = describe_objects(objects);
        let message = format!("Objects in this room: {} ({})", texts, emojis);

        match self.complete_json(&ROOM_NAME_PROMPT, message).await {
            Completion::Success(reply) => {
                extract_text_field(&reply, "name").unwrap_or_else(|| {
                    debug!("Reply had no name; using default");
                    DEFAULT_ROOM_NAME.to_string()
                })
            }
            Completion::NoCredential => self.fallback.room_name(),
            Completion::Failure(e) => {
                error!("Room name suggestion failed: {}", e);
                self.fallback.room_name()
            }
        }
    }

    /// Generate a warm, one-sentence mission for a room holding `objects`
    #[instrument(skip(self, objects), fields(objects = objects.len()))]
    pub async fn generate_mission(&self, objects: &[RoomObject]) -> String {
        let (texts, emojis) = describe_objects(objects);
        let message = format!("이 방의 오브젝트들: {} ({})", texts, emojis);

        match self.complete_json(&MISSION_PROMPT, message).await {
            Completion::Success(reply) => {
                extract_text_field(&reply, "mission").unwrap_or_else(|| {
                    debug!("Reply had no mission; using default");
                    DEFAULT_MISSION.to_string()
                })
            }
            Completion::NoCredential => self.fallback.mission(),
            Completion::Failure(e) => {
                error!("Mission generation failed: {}", e);
                self.fallback.mission()
            }
        }
    }

    /// Issue one JSON-object request. No retries.
    async fn complete_json(
        &self,
        contract: &PromptContract,
        user_message: String,
    ) -> Completion<Map<String, Value>> {
        let Some(api_key) = self.credential.api_key() else {
            return Completion::NoCredential;
        };

        let request = LlmRequest::new(vec![ChatMessage::user(user_message)])
            .with_system_prompt(contract.system_prompt)
            .with_temperature(contract.temperature)
            .with_max_tokens(Some(contract.max_tokens))
            .with_response_format(ResponseFormat::JsonObject);

        debug!(operation = contract.operation, "Requesting completion");

        match self.llm.generate(api_key, request).await {
            Ok(response) => match parse_json_object(&response.content) {
                Ok(reply) => Completion::Success(reply),
                Err(e) => Completion::Failure(e),
            },
            Err(e) => Completion::Failure(e.into()),
        }
    }
}

/// Source texts joined by ", " and emoji joined by " "
fn describe_objects(objects: &[RoomObject]) -> (String, String) {
    let texts = objects
        .iter()
        .map(|object| object.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let emojis = objects
        .iter()
        .map(|object| object.emoji.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    (texts, emojis)
}

fn parse_json_object(content: &str) -> Result<Map<String, Value>, ConversionError> {
    let value: Value = serde_json::from_str(content.trim())
        .map_err(|e| ConversionError::ResponseShape(format!("invalid JSON content: {}", e)))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConversionError::ResponseShape(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Concatenate the non-blank entries of the `emojis` array
fn extract_emojis(reply: &Map<String, Value>) -> Result<String, ConversionError> {
    let items = reply
        .get("emojis")
        .and_then(Value::as_array)
        .ok_or_else(|| ConversionError::ResponseShape("missing `emojis` array".to_string()))?;

    let mut emojis = Vec::with_capacity(items.len());
    for item in items {
        let emoji = item.as_str().ok_or_else(|| {
            ConversionError::ResponseShape(format!("non-string entry in `emojis`: {}", item))
        })?;
        let emoji = emoji.trim();
        if emoji.is_empty() {
            continue;
        }
        emojis.push(emoji);
    }

    if emojis.is_empty() {
        return Err(ConversionError::ResponseShape(
            "`emojis` has no usable entries".to_string(),
        ));
    }

    Ok(emojis.concat())
}

/// A trimmed, non-empty string field
fn extract_text_field(reply: &Map<String, Value>, field: &str) -> Option<String> {
    reply
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
