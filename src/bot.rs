//! Snuggie, the scripted support bot. The "sentiment analysis" is a word-list
//! mock and the reply is picked from three canned lines; the handler adds an
//! artificial delay to fake a network round-trip.

pub const GREETING: &str =
    "Hi! I'm Snuggie, your emotional support companion. How are you feeling today?";

/// Simulated round-trip before the bot answers.
pub const RESPONSE_DELAY_MS: u64 = 600;

const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "excited", "great", "good", "love", "wonderful", "amazing", "excellent",
    "fantastic", "pleased", "delighted", "content",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "unhappy", "depressed", "angry", "upset", "frustrated", "annoyed", "disappointed",
    "terrible", "horrible", "awful", "miserable", "stressed",
];

/// Mock scoring: ±0.1 per matched word, clamped to [-1, 1].
pub fn analyze_sentiment(text: &str) -> f64 {
    let mut score: f64 = 0.0;
    for word in text.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
        if POSITIVE_WORDS.contains(&word) {
            score += 0.1;
        }
        if NEGATIVE_WORDS.contains(&word) {
            score -= 0.1;
        }
    }
    score.clamp(-1.0, 1.0)
}

pub fn reply_for(score: f64) -> &'static str {
    if score > 0.3 {
        "That's wonderful! I'm so happy to hear you're feeling positive. Would you like to tell me more about what's making you feel this way?"
    } else if score < -0.3 {
        "I hear you, and it's okay to feel this way. Would you like to talk more about what's troubling you? I'm here to listen."
    } else {
        "Thank you for sharing. Would you like to explore those feelings a bit more? I'm here to chat about whatever's on your mind."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_words_raise_the_score() {
        let score = analyze_sentiment("Feeling happy, excited and full of joy! Great day.");
        assert!(score > 0.3, "score was {score}");
        assert!(reply_for(score).contains("wonderful"));
    }

    #[test]
    fn negative_words_lower_the_score() {
        let score = analyze_sentiment("so sad and stressed, everything feels awful and miserable");
        assert!(score < -0.3, "score was {score}");
        assert!(reply_for(score).contains("I hear you"));
    }

    #[test]
    fn neutral_text_scores_zero() {
        let score = analyze_sentiment("went to the store and bought bread");
        assert!((score).abs() < 1e-9);
        assert!(reply_for(score).contains("Thank you for sharing"));
    }

    #[test]
    fn score_is_clamped() {
        let rant = "awful ".repeat(20);
        assert!((analyze_sentiment(&rant) - (-1.0)).abs() < 1e-9);
    }
}
