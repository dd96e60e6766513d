//! Simulated community aggregate. A stand-in for a real aggregation backend:
//! process-local, seeded with a mock snapshot at boot, updated incrementally
//! as check-ins arrive.

use crate::catalog;
use crate::models::CommunityMood;
use chrono::Local;
use std::collections::BTreeMap;

/// Quotes keep only the most recent entries, oldest evicted first.
pub const QUOTE_CAP: usize = 10;

/// Notes this short are not worth surfacing as community quotes.
const MIN_QUOTE_CHARS: usize = 5;

/// Folds one check-in into the aggregate. An emoji missing from the catalog
/// still counts, contributing a sentiment of 0 to the running mean.
pub fn fold(community: &mut CommunityMood, emoji: &str, note: Option<&str>) {
    *community.mood_counts.entry(emoji.to_string()).or_insert(0) += 1;

    let sentiment = catalog::lookup(emoji).map_or(0.0, |option| option.sentiment);
    let count = community.total_entries as f64;
    community.average_sentiment =
        (community.average_sentiment * count + sentiment) / (count + 1.0);
    community.total_entries += 1;

    if let Some(note) = note {
        if note.chars().count() > MIN_QUOTE_CHARS {
            community.quotes.push(note.to_string());
            while community.quotes.len() > QUOTE_CAP {
                community.quotes.remove(0);
            }
        }
    }
}

/// The mock snapshot the aggregate starts from on every boot.
pub fn seed() -> CommunityMood {
    let mood_counts: BTreeMap<String, u64> = [
        ("😊", 23),
        ("😌", 18),
        ("😐", 15),
        ("😔", 12),
        ("😫", 10),
        ("😄", 8),
        ("😴", 7),
        ("🤔", 5),
    ]
    .into_iter()
    .map(|(emoji, count)| (emoji.to_string(), count))
    .collect();

    CommunityMood {
        date: Local::now(),
        mood_counts,
        average_sentiment: 0.15,
        total_entries: 98,
        quotes: vec![
            "Taking it one day at a time.".to_string(),
            "Feeling better after a good night's sleep!".to_string(),
            "Midterms are stressing me out, but I'll get through this.".to_string(),
            "Beautiful day outside - lifted my mood!".to_string(),
            "Just finished a big project. Exhausted but proud.".to_string(),
            "Trying to stay positive despite the rain.".to_string(),
            "Coffee makes everything better :)".to_string(),
            "Missing home today.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> CommunityMood {
        CommunityMood {
            date: Local::now(),
            mood_counts: BTreeMap::new(),
            average_sentiment: 0.0,
            total_entries: 0,
            quotes: Vec::new(),
        }
    }

    #[test]
    fn running_mean_matches_the_scenario() {
        let mut community = empty();

        fold(&mut community, "😊", None);
        assert_eq!(community.total_entries, 1);
        assert!((community.average_sentiment - 0.8).abs() < 1e-9);

        fold(&mut community, "😴", None);
        assert_eq!(community.total_entries, 2);
        assert!((community.average_sentiment - 0.2).abs() < 1e-9);
    }

    #[test]
    fn folding_one_at_a_time_equals_the_direct_mean() {
        let emojis = ["😊", "😄", "😔", "😐", "🥰", "😫", "🤔"];
        let mut community = empty();
        for emoji in emojis {
            fold(&mut community, emoji, None);
        }

        let direct: f64 = emojis
            .iter()
            .map(|e| catalog::lookup(e).unwrap().sentiment)
            .sum::<f64>()
            / emojis.len() as f64;

        assert!((community.average_sentiment - direct).abs() < 1e-9);
    }

    #[test]
    fn catalog_miss_counts_with_zero_sentiment() {
        let mut community = empty();
        fold(&mut community, "😊", None);
        fold(&mut community, "🦀", None);

        assert_eq!(community.total_entries, 2);
        assert_eq!(community.mood_counts.get("🦀"), Some(&1));
        assert!((community.average_sentiment - 0.4).abs() < 1e-9);
    }

    #[test]
    fn short_notes_are_not_quoted() {
        let mut community = empty();
        fold(&mut community, "😊", Some("meh"));
        fold(&mut community, "😊", Some("short"));
        assert!(community.quotes.is_empty());

        fold(&mut community, "😊", Some("longer note"));
        assert_eq!(community.quotes, vec!["longer note".to_string()]);
    }

    #[test]
    fn quotes_are_bounded_fifo() {
        let mut community = empty();
        for i in 0..11 {
            fold(&mut community, "😊", Some(&format!("community note {i}")));
        }

        assert_eq!(community.quotes.len(), QUOTE_CAP);
        assert!(!community.quotes.contains(&"community note 0".to_string()));
        assert_eq!(community.quotes.first().unwrap(), "community note 1");
        assert_eq!(community.quotes.last().unwrap(), "community note 10");
    }

    #[test]
    fn seed_totals_are_consistent() {
        let seeded = seed();
        let counted: u64 = seeded.mood_counts.values().sum();
        assert_eq!(counted, seeded.total_entries);
        assert!(seeded.quotes.len() <= QUOTE_CAP);
    }
}
