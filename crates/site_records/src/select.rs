//! Tag selection and roster ordering.

use crate::corpus::{Corpus, Entry};
use crate::model::{Document, Person};

/// Weight of `order` in the roster sort key; leaves room for one character code below it.
const ORDER_WEIGHT: i64 = 1000;
/// Added instead of an initial when a person has no name, sorting them after named peers.
const NAMELESS_PENALTY: i64 = 1000;

/// Records that carry a tag list.
pub trait Tagged {
    /// The record's tags.
    fn tags(&self) -> &[String];
}

impl Tagged for Person {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Tagged for Document {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Which records a tag group selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagQuery {
    /// Records carrying at least one of these tags.
    Any(Vec<String>),
    /// Records with no tags at all.
    Untagged,
}

impl TagQuery {
    /// Query for records carrying any of `tags`.
    pub fn any<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagQuery::Any(tags.into_iter().map(Into::into).collect())
    }

    /// Whether a record with `tags` is selected.
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            TagQuery::Any(wanted) => wanted.iter().any(|w| tags.contains(w)),
            TagQuery::Untagged => tags.is_empty(),
        }
    }
}

/// Records of `corpus` selected by `query`, in corpus order, each at most once.
pub fn select<'a, T: Tagged>(corpus: &'a Corpus<T>, query: &TagQuery) -> Vec<&'a Entry<T>> {
    corpus
        .iter()
        .filter(|entry| query.matches(entry.record.tags()))
        .collect()
}

/// Roster sort key: `order * 1000` plus the code of the last name's initial, or plus 1000 when
/// the person has no (non-blank) name.
///
/// Initials compare by raw code point, so one at or above U+03E8 (most non-Latin scripts) lands
/// in the next `order` bucket. Extreme `order` values saturate instead of overflowing.
pub fn roster_sort_key(order: i64, name: Option<&str>) -> i64 {
    let initial = name
        .and_then(|n| n.split_whitespace().last())
        .and_then(|last| last.chars().next());
    let tail = match initial {
        Some(c) => i64::from(u32::from(c)),
        None => NAMELESS_PENALTY,
    };
    order.saturating_mul(ORDER_WEIGHT).saturating_add(tail)
}

/// Stable-sort roster entries by [`roster_sort_key`]; ties keep corpus order.
pub fn order_roster(entries: &mut [&Entry<Person>]) {
    entries.sort_by_key(|entry| roster_sort_key(entry.record.order, entry.record.name.as_deref()));
}

/// How many placeholder people to announce when a section expects more than it lists.
pub fn missing_count(expected: Option<usize>, actual: usize) -> usize {
    expected.map_or(0, |expected| expected.saturating_sub(actual))
}
