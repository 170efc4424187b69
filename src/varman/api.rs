//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every UI client (the CLI today, anything else tomorrow).
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Owns** the long-lived collaborators: the [`BoardStore`], the variant id
//!   allocator, the picker catalog and the loaded configuration
//! - **Returns structured types** (`Result<CmdResult>`), never strings for a terminal
//!
//! Slot addresses are zero-based here. Converting from whatever a UI shows
//! (the CLI shows 1-based positions) is the client's job.
//!
//! `VarmanApi<S: SlotStore>` is generic over the slot backend:
//! - Production: `VarmanApi<FileSlots>`
//! - Testing: `VarmanApi<InMemorySlots>`

use crate::catalog::Catalog;
use crate::commands;
use crate::config::VarmanConfig;
use crate::error::Result;
use crate::ident::VariantIds;
use crate::model::{FilterId, ImageRef, Scope};
use crate::store::{BoardStore, SlotStore};

pub struct VarmanApi<S: SlotStore> {
    store: BoardStore<S>,
    ids: VariantIds,
    catalog: Catalog,
    config: VarmanConfig,
    paths: commands::VarmanPaths,
}

impl<S: SlotStore> VarmanApi<S> {
    pub fn new(slots: S, config: VarmanConfig, paths: commands::VarmanPaths) -> Self {
        Self {
            store: BoardStore::with_key(slots, config.storage_key.clone()),
            ids: VariantIds::new(),
            catalog: config.catalog(),
            config,
            paths,
        }
    }

    /// Replaces the variant id allocator (tests use a fixed clock).
    pub fn with_variant_ids(mut self, ids: VariantIds) -> Self {
        self.ids = ids;
        self
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.store)
    }

    /// Adds a filter; `None` uses the configured default label.
    pub fn add_filter(&mut self, label: Option<&str>) -> Result<commands::CmdResult> {
        let label = label.unwrap_or(self.config.default_label.as_str());
        commands::add_filter::run(&mut self.store, &mut self.ids, label)
    }

    pub fn delete_filter(&mut self, id: &FilterId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn add_variant_column(&mut self) -> Result<commands::CmdResult> {
        commands::column::run(&mut self.store, &mut self.ids)
    }

    pub fn set_variant_image(
        &mut self,
        filter_index: usize,
        variant_index: usize,
        url: &str,
        name: &str,
    ) -> Result<commands::CmdResult> {
        commands::image::set(
            &mut self.store,
            filter_index,
            variant_index,
            ImageRef::new(url, name),
        )
    }

    pub fn pick_image(
        &mut self,
        filter_index: usize,
        variant_index: usize,
        number: u32,
    ) -> Result<commands::CmdResult> {
        commands::image::pick(
            &mut self.store,
            &self.catalog,
            filter_index,
            variant_index,
            number,
        )
    }

    pub fn clear_variant_image(
        &mut self,
        filter_index: usize,
        variant_index: usize,
    ) -> Result<commands::CmdResult> {
        commands::image::clear(&mut self.store, filter_index, variant_index)
    }

    pub fn rename_filter(&mut self, id: &FilterId, label: &str) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, id, label)
    }

    pub fn reorder_filters(
        &mut self,
        source: &FilterId,
        target: &FilterId,
    ) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.store, source, target)
    }

    pub fn search_images(&self, term: &str) -> Result<commands::CmdResult> {
        commands::images::run(&self.catalog, term)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn export(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn paths(&self) -> &commands::VarmanPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, VarmanPaths};
