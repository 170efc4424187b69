use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{BoardStore, SlotStore};

pub fn run<S: SlotStore>(store: &BoardStore<S>) -> Result<CmdResult> {
    let board = store.load()?;
    Ok(CmdResult::default().with_board(board))
}
