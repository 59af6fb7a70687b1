//! Fallback Resolver - local substitutes for every AI-backed conversion
//!
//! Total and non-blocking: each method always yields a usable value.

use std::sync::Arc;

use crate::application::ports::outbound::RandomPort;
use crate::domain::services::{
    match_emoji, ABSTRACT_EMOJIS, FALLBACK_MISSIONS, FALLBACK_ROOM_NAMES,
};

/// Resolves emoji, room names and missions without the remote API
#[derive(Clone)]
pub struct FallbackResolver {
    random: Arc<dyn RandomPort>,
}

impl FallbackResolver {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Emoji for `text`: noun table, then themes, then a random abstract glyph
    pub fn resolve_emoji(&self, text: &str) -> String {
        match match_emoji(text) {
            Some(emoji) => emoji.to_string(),
            None => self.pick(ABSTRACT_EMOJIS),
        }
    }

    pub fn room_name(&self) -> String {
        self.pick(FALLBACK_ROOM_NAMES)
    }

    pub fn mission(&self) -> String {
        self.pick(FALLBACK_MISSIONS)
    }

    fn pick(&self, pool: &[&str]) -> String {
        // Clamp so a misbehaving source can never index out of bounds
        let index = self.random.pick_index(pool.len()).min(pool.len() - 1);
        pool[index].to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Always picks the same index
    pub(crate) struct FixedPick(pub usize);

    impl RandomPort for FixedPick {
        fn pick_index(&self, _len: usize) -> usize {
            self.0
        }
    }

    fn resolver(index: usize) -> FallbackResolver {
        FallbackResolver::new(Arc::new(FixedPick(index)))
    }

    #[test]
    fn test_never_empty() {
        let resolver = resolver(0);
        for text in ["", " ", "고양이", "🍑", "PEACH", "\n\t"] {
            assert!(!resolver.resolve_emoji(text).is_empty(), "empty for {:?}", text);
        }
    }

    #[test]
    fn test_table_hit_ignores_random_source() {
        assert_eq!(resolver(3).resolve_emoji("복숭아"), "🍑");
        assert_eq!(resolver(5).resolve_emoji("Fresh Bread"), "🍞");
    }

    #[test]
    fn test_unmatched_text_uses_injected_pick() {
        assert_eq!(resolver(0).resolve_emoji("고양이"), "✨");
        assert_eq!(resolver(3).resolve_emoji("고양이"), "💫");
        assert_eq!(resolver(5).resolve_emoji("고양이"), "🌸");
    }

    #[test]
    fn test_room_name_and_mission_pools() {
        assert_eq!(resolver(0).room_name(), "온실");
        assert_eq!(resolver(3).room_name(), "나만의 공간");
        assert_eq!(resolver(2).mission(), "창밖을 보며 잠시 쉬어가기");
    }

    #[test]
    fn test_out_of_range_pick_is_clamped() {
        assert_eq!(resolver(99).mission(), "창밖을 보며 잠시 쉬어가기");
    }
}
