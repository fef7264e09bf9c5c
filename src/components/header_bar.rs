//! Sticky header for the related-tags panel.
//!
//! Rendered outside the row list's scroll region so it stays put while rows
//! scroll beneath it. The alias block has its own clamp and scroll.

use gpui::prelude::FluentBuilder;
use gpui::*;

use super::button::{Button, ButtonColors};
use crate::presentation::HeaderPresentation;
use crate::theme::PanelColors;

/// Invoked with the action id when a header control is clicked
pub type OnHeaderAction = std::rc::Rc<dyn Fn(&str, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct HeaderBar {
    header: HeaderPresentation,
    colors: PanelColors,
    row_height: f32,
    gap: f32,
    on_action: Option<OnHeaderAction>,
}

impl HeaderBar {
    pub fn new(header: HeaderPresentation, colors: PanelColors, row_height: f32, gap: f32) -> Self {
        Self {
            header,
            colors,
            row_height,
            gap,
            on_action: None,
        }
    }

    pub fn on_action(mut self, callback: OnHeaderAction) -> Self {
        self.on_action = Some(callback);
        self
    }
}

impl RenderOnce for HeaderBar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let header = self.header;
        let colors = self.colors;
        let button_colors = ButtonColors::from_panel(&colors);

        let controls = header.actions.iter().fold(
            div().flex().flex_row().items_center().gap(px(4.)).flex_shrink_0(),
            |cluster, action| {
                let mut button = Button::new(action.id.clone(), action.label.clone(), button_colors);
                if let Some(callback) = self.on_action.clone() {
                    let id = action.id.clone();
                    button = button.on_click(Box::new(move |_event, window, cx| {
                        callback(&id, window, cx);
                    }));
                }
                cluster.child(button)
            },
        );

        let title = div()
            .w_full()
            .h(px(self.row_height))
            .flex()
            .flex_row()
            .items_center()
            .gap(px(self.gap))
            .child(
                div()
                    .flex_shrink_0()
                    .text_color(rgb(header.icon.color))
                    .child(header.icon.text),
            )
            .child(
                div()
                    .flex_1()
                    .min_w(px(0.))
                    .overflow_hidden()
                    .whitespace_nowrap()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(header.name.color))
                    .child(header.name.text),
            )
            .child(controls);

        let alias_height = header.alias_height;
        let alias_scrollable = header.alias_scrollable;

        div()
            .id("related-tags-header")
            .w_full()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .px(px(self.gap))
            .pb(px(self.gap))
            .bg(colors.header_background)
            .border_b_1()
            .border_color(colors.border)
            .text_sm()
            .child(title)
            .when_some(header.alias, |bar, alias| {
                bar.child(
                    div()
                        .id("related-tags-header-alias")
                        .w_full()
                        .h(px(alias_height))
                        .when(alias_scrollable, |d| d.overflow_y_scroll())
                        .when(!alias_scrollable, |d| d.overflow_hidden())
                        .text_xs()
                        .line_height(px(crate::config::defaults::HEADER_ALIAS_LINE_HEIGHT))
                        .text_color(rgb(alias.color))
                        .child(alias.text),
                )
            })
    }
}
