//! Randomized payload synthesis for financial records and tag names.
//!
//! Generation is pure apart from the thread-local RNG: direction is a coin
//! flip, amounts are uniform in 1..=10000, due dates are uniform over the
//! two years preceding now, and each record references 0..=3 distinct tags
//! drawn from the organization's known tag population.

use chrono::{DateTime, Months, Utc};
use rand::Rng;

use finrec_sdk::types::{CreateRecordRequest, Direction, Tag, TagRef};

/// Upper bound on tag references per generated record.
pub const MAX_TAGS_PER_RECORD: usize = 3;

const ADJECTIVES: [&str; 10] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Black", "White", "Pink", "Brown",
];

const NOUNS: [&str; 10] = [
    "Cat", "Dog", "Bird", "Fish", "Lion", "Tiger", "Bear", "Wolf", "Fox", "Deer",
];

/// Generate a random tag name of the form `"<Adjective> <Noun> <0-999>"`.
pub fn random_tag_name() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{} {} {}",
        ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())],
        NOUNS[rng.gen_range(0..NOUNS.len())],
        rng.gen_range(0..1000)
    )
}

/// Build one randomized record payload.
///
/// Tags are selected without replacement from `available_tags`; an empty
/// candidate slice simply produces a record with no tags.
pub fn build_record(available_tags: &[Tag]) -> CreateRecordRequest {
    let mut rng = rand::thread_rng();

    let direction = if rng.gen_bool(0.5) {
        Direction::In
    } else {
        Direction::Out
    };
    let amount = rng.gen_range(1..=10_000);
    let requested_tags = rng.gen_range(0..=MAX_TAGS_PER_RECORD);

    CreateRecordRequest {
        direction,
        amount,
        due_date: random_due_date(),
        tags: random_subset(available_tags, requested_tags)
            .iter()
            .map(TagRef::from)
            .collect(),
    }
}

/// Pick a uniformly random instant between two years ago and now,
/// boundaries inclusive.
pub fn random_due_date() -> DateTime<Utc> {
    let now = Utc::now();
    let start = now.checked_sub_months(Months::new(24)).unwrap_or(now);

    let span_millis = (now - start).num_milliseconds();
    let offset_millis = rand::thread_rng().gen_range(0..=span_millis);
    start + chrono::Duration::milliseconds(offset_millis)
}

/// Select `count` distinct tags without replacement.
///
/// Selection repeatedly picks a uniformly random index among the remaining
/// candidates and removes it, yielding a uniformly random subset with no
/// guaranteed order. If fewer than `count` candidates exist, all of them
/// are returned.
pub fn random_subset(tags: &[Tag], count: usize) -> Vec<Tag> {
    let mut remaining = tags.to_vec();
    let take = count.min(remaining.len());

    let mut rng = rand::thread_rng();
    let mut selected = Vec::with_capacity(take);
    for _ in 0..take {
        let index = rng.gen_range(0..remaining.len());
        selected.push(remaining.swap_remove(index));
    }
    selected
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
