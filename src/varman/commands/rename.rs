use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FilterId;
use crate::store::{BoardStore, SlotStore};

pub fn run<S: SlotStore>(
    store: &mut BoardStore<S>,
    id: &FilterId,
    label: &str,
) -> Result<CmdResult> {
    let board = store.load()?.rename_filter(id, label)?;
    store.save(&board)?;
    Ok(CmdResult::default()
        .with_board(board)
        .with_message(CmdMessage::success(format!("Filter {} renamed", id))))
}
