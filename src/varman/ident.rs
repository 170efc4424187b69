//! Identifier allocation for filters and variants.
//!
//! Filter ids are small decimal strings that count up from the last filter on
//! the board. Variant ids combine a millisecond timestamp with the slot's index
//! within one allocation pass, e.g. `v1718000000000-2`.

use crate::model::{Filter, FilterId, VariantId};
use chrono::Utc;
use uuid::Uuid;

/// Source of wall-clock milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Returns the id for a filter appended after `filters`.
///
/// The last filter's id is parsed as an unsigned integer and incremented.
/// An empty board starts at "1". A last id that does not parse (hand-edited
/// or foreign data) or cannot be incremented counts as 0, so the result is
/// "1" as well.
///
/// After a reorder the last filter is not necessarily the newest one, so the
/// candidate keeps counting up until it is unused.
pub fn next_filter_id(filters: &[Filter]) -> FilterId {
    let last = filters
        .last()
        .and_then(|f| f.id.as_str().parse::<u64>().ok())
        .unwrap_or(0);
    let mut candidate = last.checked_add(1).unwrap_or(1);
    while filters.iter().any(|f| f.id.as_str() == candidate.to_string()) {
        candidate = candidate.checked_add(1).unwrap_or(1);
    }
    FilterId::new(candidate.to_string())
}

/// The millisecond part of a `v{millis}-{index}` id, if it has one.
fn variant_millis(id: &VariantId) -> Option<i64> {
    let (millis, _) = id.as_str().strip_prefix('v')?.split_once('-')?;
    millis.parse().ok()
}

/// Allocates variant ids from a monotonic millisecond counter.
///
/// Each call to [`VariantIds::allocate`] is one pass: every id in the pass
/// shares a timestamp and is told apart by its index. The timestamp is forced
/// past both the previous pass and every timestamp already on the board, so
/// passes in the same millisecond, a clock that steps backwards, or a fresh
/// process working on an older board still yield distinct ids.
pub struct VariantIds {
    clock: Box<dyn Clock>,
    last_millis: Option<i64>,
}

impl Default for VariantIds {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantIds {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last_millis: None,
        }
    }

    /// Allocates `count` ids for slots joining `existing`.
    pub fn allocate(&mut self, existing: &[Filter], count: usize) -> Vec<VariantId> {
        let on_board = existing
            .iter()
            .flat_map(|f| &f.variants)
            .filter_map(|v| variant_millis(&v.id))
            .max();
        let floor = self.last_millis.max(on_board);

        let now = self.clock.now_millis();
        let stamp = match floor {
            Some(last) if now <= last => last.checked_add(1),
            _ => Some(now),
        };
        let stamp = match stamp {
            Some(millis) => {
                self.last_millis = Some(millis);
                millis.to_string()
            }
            // Counter exhausted by foreign data
            None => Uuid::new_v4().simple().to_string(),
        };

        (0..count)
            .map(|index| VariantId::new(format!("v{}-{}", stamp, index)))
            .collect()
    }
}
