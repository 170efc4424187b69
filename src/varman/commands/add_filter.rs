use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ident::VariantIds;
use crate::store::{BoardStore, SlotStore};
use tracing::info;

pub fn run<S: SlotStore>(
    store: &mut BoardStore<S>,
    ids: &mut VariantIds,
    label: &str,
) -> Result<CmdResult> {
    let board = store.load()?.add_filter(ids, Some(label));
    store.save(&board)?;

    let mut result = CmdResult::default();
    if let Some(added) = board.filters().last() {
        info!(filter = %added.id, variants = added.variants.len(), "filter added");
        result.add_message(CmdMessage::success(format!(
            "Filter {} added successfully",
            added.id
        )));
    }
    Ok(result.with_board(board))
}
