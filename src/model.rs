//! View models handed to the overlays by the host.
//!
//! Every object here is created fresh by the host for each query/result
//! update and consumed by a single render pass. Nothing in this module owns
//! state across renders.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

// =============================================================================
// Taxonomy / Category
// =============================================================================

/// The tagging vocabulary a tag belongs to. Selects which palette applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Taxonomy {
    Danbooru,
    E621,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 2] = [Taxonomy::Danbooru, Taxonomy::E621];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Danbooru => "danbooru",
            Self::E621 => "e621",
        }
    }

    /// Whether `category` is part of this vocabulary.
    ///
    /// Rendering never rejects a pair; unsupported pairs resolve to the
    /// palette's `unknown` color.
    pub fn supports(&self, category: TagCategory) -> bool {
        match category {
            TagCategory::Species | TagCategory::Lore => *self == Taxonomy::E621,
            _ => true,
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Taxonomy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "danbooru" => Ok(Self::Danbooru),
            "e621" => Ok(Self::E621),
            other => Err(format!(
                "unknown taxonomy '{}', expected danbooru or e621",
                other
            )),
        }
    }
}

/// Semantic grouping of a tag within its taxonomy.
///
/// One superset enum covers both vocabularies; see [`Taxonomy::supports`].
/// Unrecognized tokens decode to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    General,
    Artist,
    Copyright,
    Character,
    Species,
    Meta,
    Lore,
    #[serde(other)]
    Unknown,
}

impl TagCategory {
    pub const ALL: [TagCategory; 8] = [
        TagCategory::General,
        TagCategory::Artist,
        TagCategory::Copyright,
        TagCategory::Character,
        TagCategory::Species,
        TagCategory::Meta,
        TagCategory::Lore,
        TagCategory::Unknown,
    ];

    /// Token name used in theme files and host payloads
    pub fn token(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Artist => "artist",
            Self::Copyright => "copyright",
            Self::Character => "character",
            Self::Species => "species",
            Self::Meta => "meta",
            Self::Lore => "lore",
            Self::Unknown => "unknown",
        }
    }

    /// Exact token match; `None` for anything else.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.token() == token)
    }

    /// Lenient parse used for host-supplied strings: trims, ignores case and
    /// maps anything unrecognized to `Unknown`.
    pub fn parse_lenient(token: &str) -> Self {
        Self::from_token(&token.trim().to_ascii_lowercase()).unwrap_or(Self::Unknown)
    }

    /// Single-glyph category indicator drawn in the icon cell
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::General => "●",
            Self::Artist => "✎",
            Self::Copyright => "©",
            Self::Character => "☻",
            Self::Species => "◆",
            Self::Meta => "⚙",
            Self::Lore => "¶",
            Self::Unknown => "?",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// Rows
// =============================================================================

/// Data needed to render one list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowViewModel {
    pub name: String,
    pub taxonomy: Taxonomy,
    #[serde(default = "default_category")]
    pub category: TagCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Occurrence count (autocomplete) or similarity score (related tags)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<f64>,
    /// Tag already exists in the user's current input
    #[serde(default)]
    pub already_present: bool,
}

fn default_category() -> TagCategory {
    TagCategory::Unknown
}

impl RowViewModel {
    pub fn new(name: impl Into<String>, taxonomy: Taxonomy, category: TagCategory) -> Self {
        Self {
            name: name.into(),
            taxonomy,
            category,
            alias: None,
            metric: None,
            already_present: false,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn metric(mut self, metric: f64) -> Self {
        self.metric = Some(metric);
        self
    }

    pub fn already_present(mut self, present: bool) -> Self {
        self.already_present = present;
        self
    }
}

/// Decode an ordered row list supplied by the host as JSON
pub fn rows_from_json(json: &str) -> Result<Vec<RowViewModel>> {
    Ok(serde_json::from_str(json)?)
}

// =============================================================================
// Header (related tags only)
// =============================================================================

/// A control shown in the header bar. Activating it only emits an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderAction {
    pub id: String,
    pub label: String,
}

impl HeaderAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Summary row for the related-tags panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderViewModel {
    pub name: String,
    pub taxonomy: Taxonomy,
    #[serde(default = "default_category")]
    pub category: TagCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub actions: SmallVec<[HeaderAction; 4]>,
}

impl HeaderViewModel {
    pub fn new(name: impl Into<String>, taxonomy: Taxonomy, category: TagCategory) -> Self {
        Self {
            name: name.into(),
            taxonomy,
            category,
            alias: None,
            actions: SmallVec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn action(mut self, action: HeaderAction) -> Self {
        self.actions.push(action);
        self
    }
}

// =============================================================================
// Metric formatting
// =============================================================================

/// How the metric column is labelled; the only per-panel row difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Count,
    Similarity,
}

impl MetricKind {
    /// Format a metric for display. Missing, negative or non-finite values
    /// produce an empty string (an empty cell, never error text).
    pub fn format(&self, metric: Option<f64>) -> String {
        let value = match metric {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => return String::new(),
        };
        match self {
            Self::Count => format_count(value),
            Self::Similarity => format!("{:.1}%", value * 100.0),
        }
    }
}

/// 999 -> "999", 1_234 -> "1.2k", 12_345 -> "12k", 3_400_000 -> "3.4M"
fn format_count(value: f64) -> String {
    let value = value.round();
    if value < 1_000.0 {
        format!("{}", value as u64)
    } else if value < 1_000_000.0 {
        compact(value / 1_000.0, "k")
    } else {
        compact(value / 1_000_000.0, "M")
    }
}

fn compact(scaled: f64, suffix: &str) -> String {
    if scaled < 10.0 {
        let text = format!("{:.1}", (scaled * 10.0).floor() / 10.0);
        format!("{}{}", text.trim_end_matches(".0"), suffix)
    } else {
        format!("{}{}", scaled.floor() as u64, suffix)
    }
}

// =============================================================================
// Panel state inputs
// =============================================================================

/// Result status communicated by the host alongside a row list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Ready,
    /// Upstream query failed; rendered as an error-toned message
    Failed(String),
}

/// Screen point the overlay's top-left corner is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelVisibility {
    pub visible: bool,
    pub anchor: Anchor,
}

impl PanelVisibility {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown_at(anchor: Anchor) -> Self {
        Self {
            visible: true,
            anchor,
        }
    }
}

/// Which of the two overlay variants a widget instance is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelKind {
    Autocomplete,
    RelatedTags,
}

impl PanelKind {
    pub fn metric_kind(&self) -> MetricKind {
        match self {
            Self::Autocomplete => MetricKind::Count,
            Self::RelatedTags => MetricKind::Similarity,
        }
    }

    pub fn has_header(&self) -> bool {
        matches!(self, Self::RelatedTags)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Autocomplete => "autocomplete",
            Self::RelatedTags => "related_tags",
        }
    }

    /// Neutral message shown when the row list is empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::Autocomplete => "No matching tags",
            Self::RelatedTags => "No related tags found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_and_lore_are_e621_only() {
        assert!(Taxonomy::E621.supports(TagCategory::Species));
        assert!(Taxonomy::E621.supports(TagCategory::Lore));
        assert!(!Taxonomy::Danbooru.supports(TagCategory::Species));
        assert!(!Taxonomy::Danbooru.supports(TagCategory::Lore));
        assert!(Taxonomy::Danbooru.supports(TagCategory::Artist));
    }

    #[test]
    fn test_taxonomy_from_str() {
        assert_eq!(" E621 ".parse::<Taxonomy>(), Ok(Taxonomy::E621));
        assert_eq!("danbooru".parse::<Taxonomy>(), Ok(Taxonomy::Danbooru));
        let err = "gelbooru".parse::<Taxonomy>().unwrap_err();
        assert!(err.contains("gelbooru"));
    }

    #[test]
    fn test_category_parse_lenient() {
        assert_eq!(TagCategory::parse_lenient(" Artist "), TagCategory::Artist);
        assert_eq!(TagCategory::parse_lenient("invalid"), TagCategory::Unknown);
        assert_eq!(TagCategory::from_token("Artist"), None);
    }

    #[test]
    fn test_row_json_unknown_category_decodes_to_unknown() {
        let rows = rows_from_json(
            r#"[{"name":"1girl","taxonomy":"danbooru","category":"general","metric":5000000},
                {"name":"mystery","taxonomy":"e621","category":"invalid","alreadyPresent":true}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, TagCategory::General);
        assert_eq!(rows[0].alias, None);
        assert_eq!(rows[1].category, TagCategory::Unknown);
        assert!(rows[1].already_present);
    }

    #[test]
    fn test_row_json_missing_category_is_unknown() {
        let rows = rows_from_json(r#"[{"name":"x","taxonomy":"e621"}]"#).unwrap();
        assert_eq!(rows[0].category, TagCategory::Unknown);
    }

    #[test]
    fn test_rows_from_json_reports_bad_payload() {
        assert!(rows_from_json(r#"[{"name":"x"}]"#).is_err());
    }

    #[test]
    fn test_count_formatting() {
        let kind = MetricKind::Count;
        assert_eq!(kind.format(Some(0.0)), "0");
        assert_eq!(kind.format(Some(999.0)), "999");
        assert_eq!(kind.format(Some(1_234.0)), "1.2k");
        assert_eq!(kind.format(Some(1_000.0)), "1k");
        assert_eq!(kind.format(Some(12_345.0)), "12k");
        assert_eq!(kind.format(Some(3_400_000.0)), "3.4M");
        assert_eq!(kind.format(None), "");
        assert_eq!(kind.format(Some(-1.0)), "");
        assert_eq!(kind.format(Some(f64::NAN)), "");
    }

    #[test]
    fn test_similarity_formatting() {
        let kind = MetricKind::Similarity;
        assert_eq!(kind.format(Some(0.8734)), "87.3%");
        assert_eq!(kind.format(Some(1.0)), "100.0%");
        assert_eq!(kind.format(None), "");
    }

    #[test]
    fn test_panel_kind_parameters() {
        assert_eq!(PanelKind::Autocomplete.metric_kind(), MetricKind::Count);
        assert_eq!(PanelKind::RelatedTags.metric_kind(), MetricKind::Similarity);
        assert!(!PanelKind::Autocomplete.has_header());
        assert!(PanelKind::RelatedTags.has_header());
    }

    #[test]
    fn test_header_builder() {
        let header = HeaderViewModel::new("cat_ears", Taxonomy::Danbooru, TagCategory::General)
            .alias("nekomimi")
            .action(HeaderAction::new("rerun", "Rerun"));
        assert_eq!(header.actions.len(), 1);
        assert_eq!(header.alias.as_deref(), Some("nekomimi"));
    }
}
