//! Render-pass composition.
//!
//! [`PanelPresentation::build`] turns the host's inputs into everything the
//! gpui components draw: resolved colors, truncated text, row backgrounds,
//! the shared column template and the panel geometry. It is a pure function
//! of its input, so building twice from the same input yields equal output.

use smallvec::SmallVec;

use crate::layout::{truncate_to_width, GridColumns, LayoutConfig, PanelGeometry};
use crate::model::{
    HeaderAction, HeaderViewModel, ListStatus, MetricKind, PanelKind, PanelVisibility,
    RowViewModel,
};
use crate::selection::{RowBackground, SelectionState};
use crate::theme::hex_color::{opacity_to_alpha, with_alpha, TRANSPARENT};
use crate::theme::{resolve, resolve_row_color, HexColor, ModeTokens, TagTheme, ThemeMode};

/// Fallback text when the host reports a failure without a message
pub const FAILED_MESSAGE: &str = "Tag lookup failed";

/// One grid cell. Always present; `text` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub color: HexColor,
}

impl Cell {
    fn new(text: impl Into<String>, color: HexColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowPresentation {
    pub index: usize,
    pub icon: Cell,
    pub name: Cell,
    pub alias: Cell,
    pub metric: Cell,
    /// Full alias text when the cell had to be shortened (tooltip)
    pub alias_full: Option<String>,
    pub disabled: bool,
    pub background: RowBackground,
    /// Packed 0xRRGGBBAA
    pub background_rgba: u32,
    pub border: HexColor,
}

impl RowPresentation {
    fn build(
        index: usize,
        row: &RowViewModel,
        ctx: &RowContext<'_>,
        selection: &SelectionState,
    ) -> Self {
        let tokens = ctx.tokens;
        let name_color = resolve_row_color(ctx.theme, row, ctx.mode);
        let (alias_text, alias_truncated) = match row.alias.as_deref() {
            Some(alias) => truncate_to_width(alias, ctx.columns.alias, ctx.layout.char_width),
            None => (String::new(), false),
        };
        let background = selection.background_for(index);

        Self {
            index,
            icon: Cell::new(row.category.indicator(), name_color),
            name: Cell::new(row.name.clone(), name_color),
            alias: Cell::new(alias_text, tokens.text_muted),
            metric: Cell::new(ctx.metric_kind.format(row.metric), tokens.text_muted),
            alias_full: if alias_truncated { row.alias.clone() } else { None },
            disabled: row.already_present,
            background,
            background_rgba: background_rgba(tokens, background),
            border: tokens.border,
        }
    }

    /// `[icon, name, alias, metric]`
    pub fn cells(&self) -> [&Cell; 4] {
        [&self.icon, &self.name, &self.alias, &self.metric]
    }
}

/// Row background color with the configured opacity applied
pub fn background_rgba(tokens: &ModeTokens, background: RowBackground) -> u32 {
    let opacity = tokens.opacity.clamped();
    match background {
        RowBackground::Selected => {
            with_alpha(tokens.row_selected, opacity_to_alpha(opacity.selected))
        }
        RowBackground::Hovered => with_alpha(tokens.row_hover, opacity_to_alpha(opacity.hover)),
        RowBackground::AlternateBase => {
            with_alpha(tokens.row_alternate, opacity_to_alpha(opacity.alternate))
        }
        // Panel background shows through
        RowBackground::Base => TRANSPARENT,
    }
}

struct RowContext<'a> {
    theme: &'a TagTheme,
    tokens: &'a ModeTokens,
    mode: ThemeMode,
    layout: &'a LayoutConfig,
    columns: &'a GridColumns,
    metric_kind: MetricKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPresentation {
    pub icon: Cell,
    pub name: Cell,
    /// Full alias text; the header block scrolls instead of truncating
    pub alias: Option<Cell>,
    pub alias_height: f32,
    pub alias_scrollable: bool,
    pub actions: SmallVec<[HeaderAction; 4]>,
    pub height: f32,
}

impl HeaderPresentation {
    pub fn build(
        header: &HeaderViewModel,
        theme: &TagTheme,
        mode: ThemeMode,
        layout: &LayoutConfig,
    ) -> Self {
        let tokens = theme.tokens(mode);
        let color = resolve(theme, header.taxonomy, header.category, mode);
        let alias = header
            .alias
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty());

        let (alias_height, alias_scrollable) = match alias {
            Some(text) => (
                layout.alias_block_height(text),
                layout.alias_text_height(text) > layout.header_alias_max_height,
            ),
            None => (0.0, false),
        };

        Self {
            icon: Cell::new(header.category.indicator(), color),
            name: Cell::new(header.name.clone(), color),
            alias: alias.map(|text| Cell::new(text, tokens.text_secondary)),
            alias_height,
            alias_scrollable,
            actions: header.actions.clone(),
            height: layout.header_height(alias),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Neutral,
    Error,
}

/// Single full-width cell shown instead of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePresentation {
    pub text: String,
    pub tone: MessageTone,
    pub color: HexColor,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListPresentation {
    Rows(Vec<RowPresentation>),
    Message(MessagePresentation),
}

impl ListPresentation {
    /// Number of rendered rows (a message counts as one)
    pub fn rendered_len(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::Message(_) => 1,
        }
    }

    pub fn rows(&self) -> &[RowPresentation] {
        match self {
            Self::Rows(rows) => rows,
            Self::Message(_) => &[],
        }
    }

    pub fn message(&self) -> Option<&MessagePresentation> {
        match self {
            Self::Message(message) => Some(message),
            Self::Rows(_) => None,
        }
    }
}

/// Everything one render pass reads
#[derive(Debug, Clone, Copy)]
pub struct PanelInput<'a> {
    pub kind: PanelKind,
    pub rows: &'a [RowViewModel],
    pub status: &'a ListStatus,
    pub header: Option<&'a HeaderViewModel>,
    pub selection: &'a SelectionState,
    pub visibility: PanelVisibility,
    pub mode: ThemeMode,
    pub theme: &'a TagTheme,
    pub layout: &'a LayoutConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelPresentation {
    pub kind: PanelKind,
    pub mode: ThemeMode,
    pub geometry: PanelGeometry,
    pub columns: GridColumns,
    pub header: Option<HeaderPresentation>,
    pub body: ListPresentation,
}

impl PanelPresentation {
    pub fn build(input: PanelInput<'_>) -> Self {
        let layout = input.layout;
        let metric_kind = input.kind.metric_kind();
        let columns = GridColumns::measure(input.rows, metric_kind, layout);

        let header = if input.kind.has_header() {
            input
                .header
                .map(|h| HeaderPresentation::build(h, input.theme, input.mode, layout))
        } else {
            None
        };

        let body = Self::build_body(&input, &columns, metric_kind);
        let content_height = header.as_ref().map(|h| h.height).unwrap_or(0.0)
            + layout.body_height(body.rendered_len());
        let geometry = PanelGeometry::compute(input.visibility, layout, content_height);

        Self {
            kind: input.kind,
            mode: input.mode,
            geometry,
            columns,
            header,
            body,
        }
    }

    fn build_body(
        input: &PanelInput<'_>,
        columns: &GridColumns,
        metric_kind: MetricKind,
    ) -> ListPresentation {
        let tokens = input.theme.tokens(input.mode);

        if let ListStatus::Failed(reason) = input.status {
            let text = if reason.trim().is_empty() {
                FAILED_MESSAGE.to_string()
            } else {
                reason.clone()
            };
            return ListPresentation::Message(MessagePresentation {
                text,
                tone: MessageTone::Error,
                color: tokens.error,
            });
        }

        if input.rows.is_empty() {
            return ListPresentation::Message(MessagePresentation {
                text: input.kind.empty_message().to_string(),
                tone: MessageTone::Neutral,
                color: tokens.text_muted,
            });
        }

        let ctx = RowContext {
            theme: input.theme,
            tokens,
            mode: input.mode,
            layout: input.layout,
            columns,
            metric_kind,
        };
        ListPresentation::Rows(
            input
                .rows
                .iter()
                .enumerate()
                .map(|(index, row)| RowPresentation::build(index, row, &ctx, input.selection))
                .collect(),
        )
    }

    pub fn is_hidden(&self) -> bool {
        self.geometry.is_hidden()
    }
}
