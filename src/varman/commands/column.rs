use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ident::VariantIds;
use crate::store::{BoardStore, SlotStore};
use tracing::info;

pub fn run<S: SlotStore>(store: &mut BoardStore<S>, ids: &mut VariantIds) -> Result<CmdResult> {
    let board = store.load()?;
    let mut result = CmdResult::default();

    if board.is_empty() {
        result.add_message(CmdMessage::warning(
            "No filters yet; add a filter before adding variants",
        ));
        return Ok(result.with_board(board));
    }

    let board = board.add_variant_column(ids);
    store.save(&board)?;
    info!(columns = board.column_count(), "variant column added");
    result.add_message(CmdMessage::success("New variant added successfully"));
    Ok(result.with_board(board))
}
