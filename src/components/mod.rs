//! Reusable UI components for the tag overlays
//!
//! This module provides:
//! - `TagRow`: Four-cell list row on the shared column grid
//! - `HeaderBar`: Sticky related-tags header with alias block and controls
//! - `MessageCell`: Empty and failure message cell
//! - `Button`: Header control trigger
//! - `TagOverlay`: The floating list view that composes them

pub mod button;
pub mod header_bar;
pub mod message_cell;
pub mod overlay;
pub mod tag_row;

pub use button::{Button, ButtonColors};
pub use header_bar::{HeaderBar, OnHeaderAction};
pub use message_cell::MessageCell;
pub use overlay::{OverlayCallback, TagOverlay};
pub use tag_row::TagRow;
