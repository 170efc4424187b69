use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FilterId;
use crate::store::{BoardStore, SlotStore};
use tracing::info;

/// Moves filter `source` to the position currently held by `target`.
pub fn run<S: SlotStore>(
    store: &mut BoardStore<S>,
    source: &FilterId,
    target: &FilterId,
) -> Result<CmdResult> {
    let board = store.load()?;
    let mut result = CmdResult::default();

    for id in [source, target] {
        if board.position(id).is_none() {
            result.add_message(CmdMessage::warning(format!("Filter {} not found", id)));
        }
    }
    if !result.messages.is_empty() {
        return Ok(result.with_board(board));
    }
    if source == target {
        result.add_message(CmdMessage::info(format!(
            "Filter {} is already in place",
            source
        )));
        return Ok(result.with_board(board));
    }

    let board = board.reorder_filters(source, target);
    store.save(&board)?;

    let position = board.position(source).map_or(0, |p| p + 1);
    info!(filter = %source, position, "filter moved");
    result.add_message(CmdMessage::success(format!(
        "Filter {} moved to position {}",
        source, position
    )));
    Ok(result.with_board(board))
}
