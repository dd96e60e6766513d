//! Static mood catalog: the fixed emoji table every other module resolves
//! against, plus the scripted messages and badge definitions that go with it.

use crate::models::Badge;

#[derive(Debug, Clone, Copy)]
pub struct MoodOption {
    pub emoji: &'static str,
    pub label: &'static str,
    pub sentiment: f64,
}

pub const MOOD_OPTIONS: &[MoodOption] = &[
    MoodOption { emoji: "😊", label: "Happy", sentiment: 0.8 },
    MoodOption { emoji: "😄", label: "Excited", sentiment: 0.9 },
    MoodOption { emoji: "😌", label: "Content", sentiment: 0.6 },
    MoodOption { emoji: "😐", label: "Neutral", sentiment: 0.0 },
    MoodOption { emoji: "😕", label: "Confused", sentiment: -0.3 },
    MoodOption { emoji: "😔", label: "Sad", sentiment: -0.7 },
    MoodOption { emoji: "😡", label: "Angry", sentiment: -0.8 },
    MoodOption { emoji: "😫", label: "Stressed", sentiment: -0.6 },
    MoodOption { emoji: "😴", label: "Tired", sentiment: -0.4 },
    MoodOption { emoji: "🥰", label: "Loved", sentiment: 0.9 },
    MoodOption { emoji: "🤔", label: "Thoughtful", sentiment: 0.1 },
    MoodOption { emoji: "😮", label: "Surprised", sentiment: 0.2 },
];

pub fn lookup(emoji: &str) -> Option<&'static MoodOption> {
    MOOD_OPTIONS.iter().find(|option| option.emoji == emoji)
}

pub fn motivational_message(sentiment: f64) -> &'static str {
    if sentiment <= -0.7 {
        return "It's okay to not be okay. Remember that feelings are temporary and you're doing your best. Consider reaching out to someone today.";
    }
    if sentiment < 0.0 {
        return "Everyone has ups and downs. Take a moment for yourself today - even a short walk or deep breath can help shift your perspective.";
    }
    if sentiment < 0.3 {
        return "You're showing up for yourself by checking in - that's something to be proud of! What's one small thing you could do today to boost your mood?";
    }
    if sentiment < 0.7 {
        return "You're doing great! This positive energy can help you accomplish something meaningful today. What will you channel it toward?";
    }
    "Wonderful! Your positive state can be contagious - consider sharing some of this good energy with someone else today!"
}

pub fn streak_message(streak: u32) -> String {
    match streak {
        0 => "Start your check-in journey today!".to_string(),
        1 => "First day checked in! Beginning of a great habit.".to_string(),
        2 => format!("{streak} days in a row! Keep it going!"),
        3..=6 => format!("{streak}-day streak! You're building a solid routine."),
        7..=13 => format!("Impressive {streak}-day streak! You're making this a habit!"),
        14..=29 => format!("Amazing {streak}-day streak! Your consistency is inspiring!"),
        _ => format!("{streak} DAYS! You're a check-in champion! 🏆"),
    }
}

/// Achievement definitions every fresh profile starts with. The `earned`
/// state is illustrative; progress numbers come from [`badge_progress`].
pub fn initial_badges() -> Vec<Badge> {
    vec![
        Badge {
            id: "first-checkin".to_string(),
            name: "First Check-in".to_string(),
            description: "Completed your first mood check-in".to_string(),
            icon: "🎯".to_string(),
            earned: false,
            earned_at: None,
        },
        Badge {
            id: "three-day-streak".to_string(),
            name: "On a Roll".to_string(),
            description: "Checked in for 3 days in a row".to_string(),
            icon: "🔥".to_string(),
            earned: false,
            earned_at: None,
        },
        Badge {
            id: "week-streak".to_string(),
            name: "Consistency Champion".to_string(),
            description: "Checked in for 7 days in a row".to_string(),
            icon: "🏆".to_string(),
            earned: false,
            earned_at: None,
        },
        Badge {
            id: "all-emotions".to_string(),
            name: "Emotional Range".to_string(),
            description: "Used all different mood emojis".to_string(),
            icon: "🌈".to_string(),
            earned: false,
            earned_at: None,
        },
        Badge {
            id: "journaling".to_string(),
            name: "Thoughtful Reflection".to_string(),
            description: "Added journal notes to 5 check-ins".to_string(),
            icon: "✍️".to_string(),
            earned: false,
            earned_at: None,
        },
    ]
}

/// Mocked progress numbers; a real achievement evaluator would derive these
/// from the entry store.
pub fn badge_progress(badge_id: &str) -> (u32, u32) {
    match badge_id {
        "first-checkin" => (1, 1),
        "three-day-streak" => (2, 3),
        "week-streak" => (2, 7),
        "all-emotions" => (4, 12),
        "journaling" => (3, 5),
        _ => (0, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_known_emoji() {
        let option = lookup("😊").expect("missing catalog row");
        assert_eq!(option.label, "Happy");
        assert!((option.sentiment - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn lookup_rejects_unknown_emoji() {
        assert!(lookup("🦀").is_none());
    }

    #[test]
    fn catalog_emojis_are_unique_and_sentiments_bounded() {
        for (i, option) in MOOD_OPTIONS.iter().enumerate() {
            assert!((-1.0..=1.0).contains(&option.sentiment), "{}", option.label);
            for other in &MOOD_OPTIONS[i + 1..] {
                assert_ne!(option.emoji, other.emoji);
            }
        }
    }

    #[test]
    fn streak_message_bands() {
        assert!(streak_message(0).contains("Start"));
        assert!(streak_message(1).contains("First day"));
        assert!(streak_message(5).contains("5-day streak"));
        assert!(streak_message(40).contains("champion"));
    }
}
