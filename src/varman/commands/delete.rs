use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FilterId;
use crate::store::{BoardStore, SlotStore};
use tracing::info;

pub fn run<S: SlotStore>(store: &mut BoardStore<S>, id: &FilterId) -> Result<CmdResult> {
    let board = store.load()?;
    let mut result = CmdResult::default();

    if board.position(id).is_none() {
        result.add_message(CmdMessage::warning(format!("Filter {} not found", id)));
        return Ok(result.with_board(board));
    }

    let board = board.delete_filter(id);
    store.save(&board)?;
    info!(filter = %id, "filter deleted");
    result.add_message(CmdMessage::success(format!(
        "Filter {} deleted successfully",
        id
    )));
    Ok(result.with_board(board))
}
