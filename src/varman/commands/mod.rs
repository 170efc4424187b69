//! # Command Layer
//!
//! One module per user-facing operation. Every mutating command follows the
//! same shape:
//!
//! 1. load the latest board from the [`BoardStore`](crate::store::BoardStore)
//! 2. apply a pure [`Board`] operation
//! 3. save the result (write-through) when the board actually changed
//! 4. return a [`CmdResult`] carrying the new board and user-facing messages
//!
//! Loading right before committing means an operation always applies to the
//! state on disk, never to a stale copy held by the caller.

use crate::board::Board;
use crate::catalog::CatalogEntry;
use crate::config::VarmanConfig;
use crate::error::{Result, VarmanError};
use crate::model::Scope;
use std::path::PathBuf;

pub mod add_filter;
pub mod column;
pub mod config;
pub mod delete;
pub mod export;
pub mod image;
pub mod images;
pub mod rename;
pub mod reorder;
pub mod reset;
pub mod show;

#[derive(Debug, Clone)]
pub struct VarmanPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl VarmanPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| VarmanError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub board: Option<Board>,
    pub images: Vec<CatalogEntry>,
    pub config: Option<VarmanConfig>,
    pub exported: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn with_images(mut self, images: Vec<CatalogEntry>) -> Self {
        self.images = images;
        self
    }

    pub fn with_config(mut self, config: VarmanConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_exported(mut self, exported: String) -> Self {
        self.exported = Some(exported);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
