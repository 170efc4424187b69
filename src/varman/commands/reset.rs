use crate::board::Board;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BoardStore, SlotStore};
use tracing::info;

/// Discards the saved board; the next load starts from the default board.
pub fn run<S: SlotStore>(store: &mut BoardStore<S>) -> Result<CmdResult> {
    store.reset()?;
    info!(key = store.key(), "board reset");
    Ok(CmdResult::default()
        .with_board(Board::default())
        .with_message(CmdMessage::success("Board reset to defaults")))
}
