use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Searches the picker catalog by image name.
pub fn run(catalog: &Catalog, term: &str) -> Result<CmdResult> {
    let found = catalog.search(term);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!("No images match \"{}\"", term)));
    }
    Ok(result.with_images(found))
}
