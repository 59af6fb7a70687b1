//! Local text-to-emoji tables
//!
//! Used whenever the remote text-generation API is unavailable or returns
//! something unusable. Lookups here are deterministic; the random picks from
//! the abstract pools live with the fallback resolver.

/// Concrete nouns, checked in order. The first key contained in the
/// case-folded input wins, so "녹차" resolves through "차".
pub const CONCRETE_EMOJI_TABLE: &[(&str, &str)] = &[
    ("복숭아", "🍑"),
    ("케이크", "🍰"),
    ("램프", "💡"),
    ("책", "📖"),
    ("차", "🍵"),
    ("녹차", "🍵"),
    ("커피", "☕"),
    ("빵", "🍞"),
    ("peach", "🍑"),
    ("cake", "🍰"),
    ("lamp", "💡"),
    ("book", "📖"),
    ("tea", "🍵"),
    ("coffee", "☕"),
    ("bread", "🍞"),
];

/// Sensory and time-of-day themes, checked after the noun table
pub const THEME_EMOJI_RULES: &[(&[&str], &str)] = &[
    (&["냄새", "향", "smell", "scent"], "🫧"),
    (&["공기", "바람", "air", "wind"], "☁️"),
    (&["오후", "저녁", "afternoon", "evening"], "🌤️"),
    (&["새벽", "아침", "dawn", "morning"], "🌅"),
    (&["밤", "밤하늘", "night"], "🌙"),
    (&["빨래", "laundry"], "🫧☁️"),
];

/// Pool for inputs that match nothing
pub const ABSTRACT_EMOJIS: &[&str] = &["✨", "☁️", "🌤️", "💫", "🫧", "🌸"];

/// Pool of room names used when no suggestion can be requested
pub const FALLBACK_ROOM_NAMES: &[&str] = &["온실", "서재", "작은 방", "나만의 공간"];

/// Pool of missions used when none can be generated
pub const FALLBACK_MISSIONS: &[&str] = &[
    "오늘 하루 중 가장 따뜻했던 순간을 떠올려보기",
    "소중한 사람에게 작은 편지를 써보기",
    "창밖을 보며 잠시 쉬어가기",
];

/// Mission used when the API answers but leaves the field out
pub const DEFAULT_MISSION: &str = FALLBACK_MISSIONS[0];

/// Deterministic part of the fallback: noun table first, then themes
pub fn match_emoji(text: &str) -> Option<&'static str> {
    let folded = text.to_lowercase();

    CONCRETE_EMOJI_TABLE
        .iter()
        .find(|(key, _)| folded.contains(&key.to_lowercase()))
        .map(|(_, emoji)| *emoji)
        .or_else(|| {
            THEME_EMOJI_RULES
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|keyword| folded.contains(keyword)))
                .map(|(_, emoji)| *emoji)
        })
}
