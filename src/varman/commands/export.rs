use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BoardStore, SlotStore};

/// Pretty-printed JSON of the board, in the persisted shape.
pub fn run<S: SlotStore>(store: &BoardStore<S>) -> Result<CmdResult> {
    let board = store.load()?;
    let json = serde_json::to_string_pretty(&board)?;
    Ok(CmdResult::default().with_exported(json).with_board(board))
}
