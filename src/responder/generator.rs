use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Bảng từ khoá theo thứ tự, dòng khớp đầu tiên được chọn.
const KEYWORD_REPLIES: &[(&[&str], &str)] = &[
    (&["hello", "hi"], "Hi there! How can I help you today?"),
    (
        &["how are you"],
        "I'm doing well, thanks for asking! How about you?",
    ),
    (&["bye", "goodbye"], "Goodbye! Have a great day!"),
    (
        &["thank"],
        "You're welcome! Let me know if you need anything else.",
    ),
    (
        &["help"],
        "I'd be happy to help! What do you need assistance with?",
    ),
    (
        &["project", "work"],
        "That sounds interesting! Could you tell me more about it?",
    ),
];

pub const FALLBACK_REPLIES: [&str; 5] = [
    "That's interesting! Tell me more.",
    "I understand. Please continue.",
    "Thanks for sharing that with me.",
    "I see what you mean. What are your thoughts on this?",
    "That's a good point. How would you like to proceed?",
];

/// Câu trả lời cố định theo từ khoá, `None` nếu không từ khoá nào khớp.
pub fn keyword_reply(input: &str) -> Option<&'static str> {
    let lowered = input.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, reply)| *reply)
}

/// Sinh câu trả lời "giả" cho liên hệ: theo từ khoá trước, sau đó chọn
/// ngẫu nhiên đều trong `FALLBACK_REPLIES`.
pub struct ResponseGenerator<R = StdRng> {
    rng: R,
}

impl ResponseGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> ResponseGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn respond(&mut self, input: &str) -> &'static str {
        if let Some(reply) = keyword_reply(input) {
            return reply;
        }

        FALLBACK_REPLIES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(FALLBACK_REPLIES[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn greeting_wins_over_later_keywords() {
        assert_eq!(
            keyword_reply("Hi, can you help me?"),
            Some("Hi there! How can I help you today?")
        );
        assert_eq!(
            keyword_reply("hello and thank you"),
            Some("Hi there! How can I help you today?")
        );
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            keyword_reply("HOW ARE YOU doing"),
            Some("I'm doing well, thanks for asking! How about you?")
        );
        assert_eq!(keyword_reply("Goodbye"), Some("Goodbye! Have a great day!"));
        assert_eq!(
            keyword_reply("Thanks a lot"),
            Some("You're welcome! Let me know if you need anything else.")
        );
        assert_eq!(
            keyword_reply("I need HELP"),
            Some("I'd be happy to help! What do you need assistance with?")
        );
        assert_eq!(
            keyword_reply("my new Project"),
            Some("That sounds interesting! Could you tell me more about it?")
        );
    }

    #[test]
    fn keyword_matches_inside_words() {
        // "this" contains "hi"
        assert_eq!(
            keyword_reply("this"),
            Some("Hi there! How can I help you today?")
        );
    }

    #[test]
    fn unmatched_input_has_no_keyword_reply() {
        assert_eq!(keyword_reply("random gibberish xyz"), None);
        assert_eq!(keyword_reply(""), None);
    }

    #[test]
    fn keyword_reply_is_stable_across_calls() {
        let mut generator = ResponseGenerator::seeded(7);
        let first = generator.respond("Thank you");
        for _ in 0..20 {
            assert_eq!(generator.respond("THANK YOU"), first);
        }
    }

    #[test]
    fn fallback_draws_only_from_pool() {
        let mut generator = ResponseGenerator::seeded(42);
        let seen: HashSet<&str> = (0..500)
            .map(|_| generator.respond("random gibberish xyz"))
            .collect();

        assert!(seen.iter().all(|reply| FALLBACK_REPLIES.contains(reply)));
        assert_eq!(seen.len(), FALLBACK_REPLIES.len());
    }

    #[test]
    fn empty_input_uses_fallback_pool() {
        let mut generator = ResponseGenerator::seeded(1);
        assert!(FALLBACK_REPLIES.contains(&generator.respond("")));
    }

    #[test]
    fn same_seed_gives_same_fallbacks() {
        let mut left = ResponseGenerator::seeded(99);
        let mut right = ResponseGenerator::seeded(99);
        for _ in 0..50 {
            assert_eq!(left.respond("xyz"), right.respond("xyz"));
        }
    }
}
