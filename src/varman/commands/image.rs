//! Assigning and clearing the image of a single variant slot.
//!
//! Slots are addressed by zero-based `(filter_index, variant_index)`. A bad
//! address is an error and nothing is saved.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, VarmanError};
use crate::model::ImageRef;
use crate::store::{BoardStore, SlotStore};
use tracing::info;

pub fn set<S: SlotStore>(
    store: &mut BoardStore<S>,
    filter_index: usize,
    variant_index: usize,
    image: ImageRef,
) -> Result<CmdResult> {
    if image.url.trim().is_empty() || image.name.trim().is_empty() {
        return Err(VarmanError::Api(
            "Image url and name must both be given".into(),
        ));
    }

    let board = store
        .load()?
        .set_variant_image(filter_index, variant_index, image)?;
    store.save(&board)?;
    info!(filter_index, variant_index, "variant image set");

    Ok(CmdResult::default()
        .with_board(board)
        .with_message(CmdMessage::success("Image added/edited successfully")))
}

/// Sets the slot to catalog image `number`.
pub fn pick<S: SlotStore>(
    store: &mut BoardStore<S>,
    catalog: &Catalog,
    filter_index: usize,
    variant_index: usize,
    number: u32,
) -> Result<CmdResult> {
    let entry = catalog
        .get(number)
        .ok_or(VarmanError::ImageNotFound(number))?;
    set(store, filter_index, variant_index, entry.select())
}

pub fn clear<S: SlotStore>(
    store: &mut BoardStore<S>,
    filter_index: usize,
    variant_index: usize,
) -> Result<CmdResult> {
    let board = store
        .load()?
        .clear_variant_image(filter_index, variant_index)?;
    store.save(&board)?;
    info!(filter_index, variant_index, "variant image cleared");

    Ok(CmdResult::default()
        .with_board(board)
        .with_message(CmdMessage::success("Image removed")))
}
