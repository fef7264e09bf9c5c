//! Grid and panel geometry.
//!
//! Text measurement is estimated from display columns (fullwidth glyphs
//! count twice) so the whole layout stays a pure function of the row list and
//! [`LayoutConfig`]. The estimate sizes columns; gpui's `text_ellipsis` on
//! the alias cell catches glyphs wider than the estimate.

use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::defaults::*;
use crate::model::{Anchor, MetricKind, PanelVisibility, RowViewModel};

pub const ELLIPSIS: char = '…';

/// Pixel metrics shared by both overlays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub panel_width: f32,
    pub max_panel_height: f32,
    pub row_height: f32,
    pub icon_width: f32,
    /// Advance of one display column (half-width glyph)
    pub char_width: f32,
    pub alias_max_width: f32,
    pub metric_min_width: f32,
    pub header_alias_max_height: f32,
    pub cell_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_width: DEFAULT_PANEL_WIDTH,
            max_panel_height: DEFAULT_MAX_PANEL_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
            icon_width: DEFAULT_ICON_WIDTH,
            char_width: DEFAULT_CHAR_WIDTH,
            alias_max_width: DEFAULT_ALIAS_MAX_WIDTH,
            metric_min_width: DEFAULT_METRIC_MIN_WIDTH,
            header_alias_max_height: DEFAULT_HEADER_ALIAS_MAX_HEIGHT,
            cell_gap: DEFAULT_CELL_GAP,
        }
    }
}

impl LayoutConfig {
    /// Replace nonsensical values (zero, negative, NaN) with defaults
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            panel_width: pick(self.panel_width, d.panel_width),
            max_panel_height: pick(self.max_panel_height, d.max_panel_height),
            row_height: pick(self.row_height, d.row_height),
            icon_width: pick(self.icon_width, d.icon_width),
            char_width: pick(self.char_width, d.char_width),
            alias_max_width: pick(self.alias_max_width, d.alias_max_width),
            metric_min_width: pick(self.metric_min_width, d.metric_min_width),
            header_alias_max_height: pick(self.header_alias_max_height, d.header_alias_max_height),
            cell_gap: if self.cell_gap.is_finite() && self.cell_gap >= 0.0 {
                self.cell_gap
            } else {
                d.cell_gap
            },
        }
    }

    /// Estimated single-line width of `text`
    pub fn text_width(&self, text: &str) -> f32 {
        UnicodeWidthStr::width(text) as f32 * self.char_width
    }

    /// Height of the list body: one fixed row per entry, or one message row
    pub fn body_height(&self, row_count: usize) -> f32 {
        row_count.max(1) as f32 * self.row_height
    }

    /// Height of the related-tags header: name line plus the clamped alias block
    pub fn header_height(&self, alias: Option<&str>) -> f32 {
        let alias_height = alias
            .filter(|a| !a.trim().is_empty())
            .map(|a| self.alias_block_height(a))
            .unwrap_or(0.0);
        self.row_height + alias_height + self.cell_gap
    }

    /// Natural (unclamped) height of wrapped alias text in the header
    pub fn alias_text_height(&self, alias: &str) -> f32 {
        let usable = (self.panel_width - 2.0 * self.cell_gap).max(self.char_width);
        let per_line = (usable / self.char_width).floor().max(1.0) as usize;
        let lines = alias
            .lines()
            .map(|line| UnicodeWidthStr::width(line).max(1).div_ceil(per_line))
            .sum::<usize>()
            .max(1);
        lines as f32 * HEADER_ALIAS_LINE_HEIGHT
    }

    pub fn alias_block_height(&self, alias: &str) -> f32 {
        self.alias_text_height(alias).min(self.header_alias_max_height)
    }
}

/// Truncate `text` to a single line no wider than `width`.
///
/// Returns the display text and whether it was shortened. Widths are counted
/// in display columns, so a CJK glyph takes two. The ellipsis takes one.
pub fn truncate_to_width(text: &str, width: f32, char_width: f32) -> (String, bool) {
    // Line breaks never reach the cell
    let single_line: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if char_width <= 0.0 || !width.is_finite() {
        return (single_line, false);
    }

    let max_columns = (width.max(0.0) / char_width).floor() as usize;
    if UnicodeWidthStr::width(single_line.as_str()) <= max_columns {
        return (single_line, false);
    }
    if max_columns == 0 {
        return (String::new(), true);
    }

    let budget = max_columns - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for c in single_line.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push(ELLIPSIS);
    (truncated, true)
}

/// Column template shared by every row of one list.
///
/// `[icon: fixed][name: flexible][alias: auto][metric: auto]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridColumns {
    pub icon: f32,
    pub alias: f32,
    pub metric: f32,
    pub gap: f32,
    pub total: f32,
}

impl GridColumns {
    pub fn measure(rows: &[RowViewModel], metric_kind: MetricKind, config: &LayoutConfig) -> Self {
        let widest_alias = rows
            .iter()
            .filter_map(|row| row.alias.as_deref())
            .map(|alias| config.text_width(alias))
            .fold(0.0_f32, f32::max);

        let widest_metric = rows
            .iter()
            .map(|row| config.text_width(&metric_kind.format(row.metric)))
            .fold(0.0_f32, f32::max);

        Self {
            icon: config.icon_width,
            alias: widest_alias.min(config.alias_max_width),
            metric: widest_metric.max(config.metric_min_width),
            gap: config.cell_gap,
            total: config.panel_width,
        }
    }

    /// Whatever the fixed and auto columns leave for the name: three gaps
    /// between the four cells plus one gap of padding on each side
    pub fn name_width(&self) -> f32 {
        (self.total - self.icon - self.alias - self.metric - 5.0 * self.gap).max(0.0)
    }
}

/// Where and how large the overlay is for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub origin: Anchor,
    pub width: f32,
    pub height: f32,
    /// Only a visible panel receives pointer events
    pub interactive: bool,
    /// Content taller than the panel scrolls vertically
    pub scrollable: bool,
}

impl PanelGeometry {
    pub fn compute(visibility: PanelVisibility, config: &LayoutConfig, content_height: f32) -> Self {
        if !visibility.visible {
            return Self::hidden(visibility.anchor);
        }

        let content_height = content_height.max(0.0);
        Self {
            origin: visibility.anchor,
            width: config.panel_width,
            height: content_height.min(config.max_panel_height),
            interactive: true,
            scrollable: content_height > config.max_panel_height,
        }
    }

    /// Zero-sized, non-interactive placeholder
    pub fn hidden(anchor: Anchor) -> Self {
        Self {
            origin: anchor,
            width: 0.0,
            height: 0.0,
            interactive: false,
            scrollable: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        !self.interactive
    }

    /// Hit test in the same coordinate space as the anchor
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.interactive
            && x >= self.origin.x
            && x < self.origin.x + self.width
            && y >= self.origin.y
            && y < self.origin.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TagCategory, Taxonomy};

    fn row(name: &str) -> RowViewModel {
        RowViewModel::new(name, Taxonomy::Danbooru, TagCategory::General)
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        let (text, truncated) = truncate_to_width("cat", 70.0, 7.0);
        assert_eq!(text, "cat");
        assert!(!truncated);
    }

    #[test]
    fn test_truncate_long_alias_with_ellipsis() {
        let alias = "a very long alias that cannot possibly fit in the cell";
        let (text, truncated) = truncate_to_width(alias, 70.0, 7.0);
        assert!(truncated);
        assert!(text.ends_with(ELLIPSIS));
        assert_eq!(text.chars().count(), 10);
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_truncate_never_wraps() {
        let (text, _) = truncate_to_width("first\nsecond", 700.0, 7.0);
        assert_eq!(text, "first second");
    }

    #[test]
    fn test_truncate_counts_wide_glyphs_twice() {
        // 4 columns: one CJK glyph (2) plus the ellipsis (1)
        let (text, truncated) = truncate_to_width("猫耳猫耳猫耳", 28.0, 7.0);
        assert!(truncated);
        assert_eq!(text, "猫…");

        let (text, truncated) = truncate_to_width("猫耳猫耳猫耳", 42.0, 7.0);
        assert!(truncated);
        assert_eq!(text, "猫耳…");

        let (text, truncated) = truncate_to_width("猫耳猫耳猫耳", 84.0, 7.0);
        assert!(!truncated);
        assert_eq!(text, "猫耳猫耳猫耳");
    }

    #[test]
    fn test_wide_alias_gets_a_column_it_fits_in() {
        let config = LayoutConfig::default();
        let rows = vec![row("nekomimi").alias("猫耳猫耳猫耳")];
        let columns = GridColumns::measure(&rows, MetricKind::Count, &config);
        assert_eq!(columns.alias, 12.0 * config.char_width);

        let (text, truncated) = truncate_to_width("猫耳猫耳猫耳", columns.alias, config.char_width);
        assert!(!truncated);
        assert!(config.text_width(&text) <= columns.alias);
    }

    #[test]
    fn test_clamped_wide_alias_is_ellipsized() {
        let config = LayoutConfig {
            alias_max_width: 42.0,
            ..LayoutConfig::default()
        };
        let rows = vec![row("nekomimi").alias("猫耳猫耳猫耳")];
        let columns = GridColumns::measure(&rows, MetricKind::Count, &config);
        assert_eq!(columns.alias, 42.0);

        let (text, truncated) = truncate_to_width("猫耳猫耳猫耳", columns.alias, config.char_width);
        assert!(truncated);
        assert!(text.ends_with(ELLIPSIS));
        assert!(config.text_width(&text) <= columns.alias);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0.0, 7.0), (String::new(), true));
        assert_eq!(truncate_to_width("", 0.0, 7.0), (String::new(), false));
    }

    #[test]
    fn test_columns_shared_across_rows() {
        let config = LayoutConfig::default();
        let rows = vec![
            row("a").alias("xy").metric(5.0),
            row("b").alias("longer alias").metric(123_456.0),
            row("c"),
        ];
        let columns = GridColumns::measure(&rows, MetricKind::Count, &config);
        assert_eq!(columns.icon, config.icon_width);
        assert_eq!(columns.alias, 12.0 * config.char_width);
        // "123k" is narrower than the minimum
        assert_eq!(columns.metric, config.metric_min_width);
    }

    #[test]
    fn test_alias_column_is_clamped() {
        let config = LayoutConfig::default();
        let rows = vec![row("a").alias("x".repeat(200))];
        let columns = GridColumns::measure(&rows, MetricKind::Count, &config);
        assert_eq!(columns.alias, config.alias_max_width);
        assert!(columns.name_width() > 0.0);
    }

    #[test]
    fn test_name_width_fills_row_with_padding_and_gaps() {
        let config = LayoutConfig::default();
        let rows = vec![row("a").alias("alias").metric(42.0)];
        let columns = GridColumns::measure(&rows, MetricKind::Count, &config);
        let laid_out = columns.icon
            + columns.name_width()
            + columns.alias
            + columns.metric
            + 3.0 * columns.gap
            + 2.0 * columns.gap;
        assert!((laid_out - columns.total).abs() < 0.001);
    }

    #[test]
    fn test_alias_column_collapses_without_aliases() {
        let config = LayoutConfig::default();
        let columns = GridColumns::measure(&[row("a")], MetricKind::Similarity, &config);
        assert_eq!(columns.alias, 0.0);
    }

    #[test]
    fn test_visible_panel_pinned_to_anchor() {
        let config = LayoutConfig::default();
        let visibility = PanelVisibility::shown_at(Anchor::new(120.0, 340.0));
        let geometry = PanelGeometry::compute(visibility, &config, 3.0 * config.row_height);
        assert_eq!(geometry.origin, Anchor::new(120.0, 340.0));
        assert_eq!(geometry.height, 72.0);
        assert!(geometry.interactive);
        assert!(!geometry.scrollable);
        assert!(geometry.contains(120.0, 340.0));
    }

    #[test]
    fn test_tall_content_is_clamped_and_scrolls() {
        let config = LayoutConfig::default();
        let visibility = PanelVisibility::shown_at(Anchor::default());
        let geometry = PanelGeometry::compute(visibility, &config, 10_000.0);
        assert_eq!(geometry.height, config.max_panel_height);
        assert!(geometry.scrollable);
    }

    #[test]
    fn test_hidden_panel_has_no_footprint() {
        let config = LayoutConfig::default();
        let visibility = PanelVisibility {
            visible: false,
            anchor: Anchor::new(120.0, 340.0),
        };
        let geometry = PanelGeometry::compute(visibility, &config, 500.0);
        assert_eq!(geometry.width, 0.0);
        assert_eq!(geometry.height, 0.0);
        assert!(!geometry.interactive);
        assert!(!geometry.contains(120.0, 340.0));
    }

    #[test]
    fn test_body_height_reserves_message_row() {
        let config = LayoutConfig::default();
        assert_eq!(config.body_height(0), config.row_height);
        assert_eq!(config.body_height(4), 4.0 * config.row_height);
    }

    #[test]
    fn test_header_alias_block_is_clamped() {
        let config = LayoutConfig::default();
        let long_alias = "word ".repeat(400);
        assert!(config.alias_text_height(&long_alias) > config.header_alias_max_height);
        assert_eq!(config.alias_block_height(&long_alias), config.header_alias_max_height);
        assert_eq!(config.header_height(None), config.row_height + config.cell_gap);
    }

    #[test]
    fn test_sanitized_replaces_bad_values() {
        let config = LayoutConfig {
            char_width: 0.0,
            row_height: f32::NAN,
            cell_gap: -3.0,
            ..LayoutConfig::default()
        }
        .sanitized();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn test_layout_config_partial_json() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "panelWidth": 500 }"#).unwrap();
        assert_eq!(config.panel_width, 500.0);
        assert_eq!(config.row_height, DEFAULT_ROW_HEIGHT);
    }
}
