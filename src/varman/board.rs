//! # The Board
//!
//! A [`Board`] is the whole editable state: an ordered list of filters, each
//! owning an ordered list of variant slots. Slots at the same position across
//! filters form a column, so every filter always has the same number of slots.
//!
//! Boards are values. Every operation borrows the current board and returns a
//! new one; the previous value is never modified. The command layer decides
//! when a new board is committed to storage.
//!
//! Variant slots are addressed by position (`filter_index`, `variant_index`),
//! the way the picker was opened on a rendered grid. An address that does not
//! exist is a caller bug and fails with [`VarmanError::SlotNotFound`] rather
//! than being silently ignored.

use crate::error::{Result, VarmanError};
use crate::ident::{next_filter_id, VariantIds};
use crate::model::{Filter, FilterId, ImageRef, Variant, VariantId};
use crate::reorder::reorder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Label given to filters created without one.
pub const DEFAULT_LABEL: &str = "Add Product Filters";

/// Slot count for the first filter on an empty board.
pub const DEFAULT_VARIANT_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Filter>", into = "Vec<Filter>")]
pub struct Board {
    filters: Vec<Filter>,
}

impl Default for Board {
    /// Two filters with two empty slots each.
    fn default() -> Self {
        let seed = |id: &str, label: &str, v: [&str; 2]| {
            Filter::new(
                FilterId::new(id),
                label,
                v.iter()
                    .map(|vid| Variant::empty(VariantId::new(*vid)))
                    .collect(),
            )
        };
        Self {
            filters: vec![
                seed("1", "Filter 1", ["v1", "v2"]),
                seed("2", "Filter 2", ["v3", "v4"]),
            ],
        }
    }
}

impl TryFrom<Vec<Filter>> for Board {
    type Error = String;

    fn try_from(filters: Vec<Filter>) -> std::result::Result<Self, Self::Error> {
        validate(&filters)?;
        Ok(Self { filters })
    }
}

impl From<Board> for Vec<Filter> {
    fn from(board: Board) -> Self {
        board.filters
    }
}

fn validate(filters: &[Filter]) -> std::result::Result<(), String> {
    let mut filter_ids = HashSet::new();
    for filter in filters {
        if !filter_ids.insert(&filter.id) {
            return Err(format!("duplicate filter id {}", filter.id));
        }
        let mut variant_ids = HashSet::new();
        for variant in &filter.variants {
            if !variant_ids.insert(&variant.id) {
                return Err(format!(
                    "duplicate variant id {} in filter {}",
                    variant.id, filter.id
                ));
            }
        }
    }
    if let Some(first) = filters.first() {
        let width = first.variants.len();
        if let Some(bad) = filters.iter().find(|f| f.variants.len() != width) {
            return Err(format!(
                "filter {} has {} variants, expected {}",
                bad.id,
                bad.variants.len(),
                width
            ));
        }
    }
    Ok(())
}

impl Board {
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn position(&self, id: &FilterId) -> Option<usize> {
        self.filters.iter().position(|f| &f.id == id)
    }

    /// Number of columns; zero for an empty board.
    pub fn column_count(&self) -> usize {
        self.filters.first().map_or(0, |f| f.variants.len())
    }

    /// Header labels for each column: "Primary Variant", "Variant 2", ...
    pub fn column_labels(&self) -> Vec<String> {
        column_labels(self.column_count())
    }

    /// Appends a filter with a fresh id and one empty slot per column
    /// (or [`DEFAULT_VARIANT_COUNT`] slots on an empty board).
    pub fn add_filter(&self, ids: &mut VariantIds, label: Option<&str>) -> Board {
        let count = match self.filters.first() {
            Some(first) => first.variants.len(),
            None => DEFAULT_VARIANT_COUNT,
        };
        let variants = ids
            .allocate(&self.filters, count)
            .into_iter()
            .map(Variant::empty)
            .collect();
        let filter = Filter::new(
            next_filter_id(&self.filters),
            label.unwrap_or(DEFAULT_LABEL),
            variants,
        );

        let mut filters = self.filters.clone();
        filters.push(filter);
        Board { filters }
    }

    /// Removes the filter with `id`. Unknown ids leave the board unchanged.
    pub fn delete_filter(&self, id: &FilterId) -> Board {
        Board {
            filters: self
                .filters
                .iter()
                .filter(|f| &f.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Appends one empty slot to every filter in a single pass.
    pub fn add_variant_column(&self, ids: &mut VariantIds) -> Board {
        let new_ids = ids.allocate(&self.filters, self.filters.len());
        let filters = self
            .filters
            .iter()
            .zip(new_ids)
            .map(|(filter, id)| {
                let mut filter = filter.clone();
                filter.variants.push(Variant::empty(id));
                filter
            })
            .collect();
        Board { filters }
    }

    pub fn set_variant_image(
        &self,
        filter_index: usize,
        variant_index: usize,
        image: ImageRef,
    ) -> Result<Board> {
        self.with_slot(filter_index, variant_index, |slot| slot.image = Some(image))
    }

    pub fn clear_variant_image(&self, filter_index: usize, variant_index: usize) -> Result<Board> {
        self.with_slot(filter_index, variant_index, |slot| slot.image = None)
    }

    pub fn rename_filter(&self, id: &FilterId, label: &str) -> Result<Board> {
        let label = label.trim();
        if label.is_empty() {
            return Err(VarmanError::Api("Label cannot be empty".into()));
        }
        let index = self
            .position(id)
            .ok_or_else(|| VarmanError::FilterNotFound(id.clone()))?;

        let mut filters = self.filters.clone();
        filters[index].label = label.to_string();
        Ok(Board { filters })
    }

    /// Moves filter `source` to the position of filter `target`.
    pub fn reorder_filters(&self, source: &FilterId, target: &FilterId) -> Board {
        Board {
            filters: reorder(&self.filters, source.as_str(), target.as_str()),
        }
    }

    fn with_slot<F>(&self, filter_index: usize, variant_index: usize, edit: F) -> Result<Board>
    where
        F: FnOnce(&mut Variant),
    {
        let mut filters = self.filters.clone();
        let slot = filters
            .get_mut(filter_index)
            .and_then(|f| f.variants.get_mut(variant_index))
            .ok_or(VarmanError::SlotNotFound {
                filter: filter_index,
                variant: variant_index,
            })?;
        edit(slot);
        Ok(Board { filters })
    }
}

pub fn column_labels(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i {
            0 => "Primary Variant".to_string(),
            n => format!("Variant {}", n + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::FixedClock;

    fn ids() -> VariantIds {
        VariantIds::with_clock(FixedClock(42))
    }

    fn filter_ids(board: &Board) -> Vec<&str> {
        board.filters().iter().map(|f| f.id.as_str()).collect()
    }

    fn picsum(n: u32) -> ImageRef {
        ImageRef::new(
            format!("https://picsum.photos/id/{}/200", n),
            format!("Image {}", n),
        )
    }

    #[test]
    fn default_board_has_two_aligned_filters() {
        let board = Board::default();
        assert_eq!(filter_ids(&board), ["1", "2"]);
        assert_eq!(board.column_count(), 2);
        assert!(board
            .filters()
            .iter()
            .flat_map(|f| &f.variants)
            .all(|v| v.image.is_none()));
    }

    #[test]
    fn add_filter_appends_with_next_id_and_matching_width() {
        let board = Board::default();
        let next = board.add_filter(&mut ids(), None);

        assert_eq!(filter_ids(&next), ["1", "2", "3"]);
        let added = &next.filters()[2];
        assert_eq!(added.label, DEFAULT_LABEL);
        assert_eq!(added.variants.len(), 2);
        assert!(added.variants.iter().all(|v| v.image.is_none()));
        // previous value untouched
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn add_filter_on_empty_board_uses_default_width() {
        let next = Board::empty().add_filter(&mut ids(), Some("Size"));
        assert_eq!(filter_ids(&next), ["1"]);
        assert_eq!(next.filters()[0].label, "Size");
        assert_eq!(next.column_count(), DEFAULT_VARIANT_COUNT);
    }

    #[test]
    fn add_filter_follows_widened_board() {
        let mut alloc = ids();
        let board = Board::default().add_variant_column(&mut alloc);
        let next = board.add_filter(&mut alloc, None);
        assert_eq!(next.filters()[2].variants.len(), 3);
    }

    #[test]
    fn delete_filter_removes_only_that_filter() {
        let board = Board::default().add_filter(&mut ids(), None);
        let next = board.delete_filter(&FilterId::new("2"));
        assert_eq!(filter_ids(&next), ["1", "3"]);
    }

    #[test]
    fn delete_unknown_filter_is_noop() {
        let board = Board::default();
        assert_eq!(board.delete_filter(&FilterId::new("9")), board);
    }

    #[test]
    fn add_variant_column_widens_every_filter_by_one() {
        let board = Board::default().add_filter(&mut ids(), None);
        let before: Vec<usize> = board.filters().iter().map(|f| f.variants.len()).collect();
        let next = board.add_variant_column(&mut ids());

        for (filter, old) in next.filters().iter().zip(before) {
            assert_eq!(filter.variants.len(), old + 1);
            assert!(filter.variants.last().unwrap().image.is_none());
        }
        assert_eq!(next.column_count(), 3);
    }

    #[test]
    fn add_variant_column_on_empty_board_stays_empty() {
        let next = Board::empty().add_variant_column(&mut ids());
        assert!(next.is_empty());
    }

    #[test]
    fn new_column_ids_are_unique_across_filters() {
        let next = Board::default().add_variant_column(&mut ids());
        let a = &next.filters()[0].variants[2].id;
        let b = &next.filters()[1].variants[2].id;
        assert_ne!(a, b);
    }

    #[test]
    fn set_variant_image_touches_only_the_addressed_slot() {
        let board = Board::default().add_filter(&mut ids(), None);
        let next = board.set_variant_image(0, 1, picsum(5)).unwrap();

        let slot = &next.filters()[0].variants[1];
        assert_eq!(slot.image.as_ref().unwrap().url, "https://picsum.photos/id/5/200");
        assert_eq!(slot.name(), Some("Image 5"));

        let mut expected = board.clone();
        expected.filters[0].variants[1].image = Some(picsum(5));
        assert_eq!(next, expected);
    }

    #[test]
    fn set_variant_image_rejects_bad_addresses() {
        let board = Board::default();
        assert!(matches!(
            board.set_variant_image(2, 0, picsum(1)),
            Err(VarmanError::SlotNotFound { filter: 2, variant: 0 })
        ));
        assert!(matches!(
            board.set_variant_image(0, 2, picsum(1)),
            Err(VarmanError::SlotNotFound { filter: 0, variant: 2 })
        ));
    }

    #[test]
    fn clear_variant_image_unsets_image_and_name() {
        let board = Board::default().set_variant_image(1, 0, picsum(3)).unwrap();
        let next = board.clear_variant_image(1, 0).unwrap();
        assert_eq!(next, Board::default());
    }

    #[test]
    fn rename_filter_updates_label() {
        let next = Board::default()
            .rename_filter(&FilterId::new("2"), "  Color ")
            .unwrap();
        assert_eq!(next.filters()[1].label, "Color");
        assert_eq!(next.filters()[1].id, FilterId::new("2"));
    }

    #[test]
    fn rename_filter_errors() {
        let board = Board::default();
        assert!(matches!(
            board.rename_filter(&FilterId::new("8"), "x"),
            Err(VarmanError::FilterNotFound(_))
        ));
        assert!(matches!(
            board.rename_filter(&FilterId::new("1"), "   "),
            Err(VarmanError::Api(_))
        ));
    }

    #[test]
    fn reorder_filters_moves_rows_and_keeps_ids() {
        let board = Board::default().add_filter(&mut ids(), None);
        let next = board.reorder_filters(&FilterId::new("3"), &FilterId::new("1"));
        assert_eq!(filter_ids(&next), ["3", "1", "2"]);
        assert_eq!(next.filters()[0], board.filters()[2]);
    }

    #[test]
    fn add_after_reorder_keeps_ids_unique() {
        let mut alloc = ids();
        let board = Board::default()
            .add_filter(&mut alloc, None)
            .reorder_filters(&FilterId::new("3"), &FilterId::new("1"));
        // last filter is now "2", but "3" is taken
        let next = board.add_filter(&mut alloc, None);
        assert_eq!(filter_ids(&next), ["3", "1", "2", "4"]);
    }

    #[test]
    fn column_labels_name_the_primary_column() {
        assert_eq!(
            column_labels(3),
            ["Primary Variant", "Variant 2", "Variant 3"]
        );
        assert!(Board::empty().column_labels().is_empty());
    }

    #[test]
    fn deserialize_rejects_misaligned_columns() {
        let json = r#"[
            {"id":"1","productFilter":"a","variants":[{"id":"v1","image":"","name":""}]},
            {"id":"2","productFilter":"b","variants":[]}
        ]"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn deserialize_rejects_duplicate_filter_ids() {
        let json = r#"[
            {"id":"1","productFilter":"a","variants":[]},
            {"id":"1","productFilter":"b","variants":[]}
        ]"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn json_round_trip_preserves_board() {
        let mut alloc = ids();
        let board = Board::default()
            .add_filter(&mut alloc, Some("Size"))
            .add_variant_column(&mut alloc)
            .set_variant_image(2, 2, picsum(11))
            .unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
