//! Tag Overlay GPUI - tag autocomplete and related-tags overlays
//!
//! This library renders the two floating tag lists a host editor shows while
//! the user types tags: the autocomplete dropdown and the related-tags panel.
//! The host supplies row view models, an anchor point and the theme mode; the
//! overlays render them and report hover, selection and header-control
//! events back.
//!
//! Everything except `components` is independent of the UI toolkit.

pub mod components;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod model;
pub mod overlay_state;
pub mod presentation;
pub mod selection;
pub mod theme;
pub mod watcher;

pub use components::TagOverlay;
pub use error::{OverlayError, Result};
pub use model::{
    Anchor, HeaderAction, HeaderViewModel, ListStatus, MetricKind, PanelKind, PanelVisibility,
    RowViewModel, TagCategory, Taxonomy,
};
pub use overlay_state::{OverlayEvent, OverlayState};
pub use theme::ThemeMode;
