//! Header control button
//!
//! A plain trigger with hover feedback. It owns no state: clicking only runs
//! the callback, which the owning view turns into an event for the host.

use gpui::*;
use std::rc::Rc;

use crate::theme::PanelColors;

/// Pre-computed colors for Button rendering
#[derive(Clone, Copy, Debug)]
pub struct ButtonColors {
    pub text_color: Rgba,
    pub background_hover: Rgba,
    pub border: Rgba,
}

impl ButtonColors {
    pub fn from_panel(colors: &PanelColors) -> Self {
        Self {
            text_color: colors.text_secondary,
            background_hover: colors.control_hover,
            border: colors.border,
        }
    }
}

/// Callback type for button click events
pub type OnClickCallback = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// # Example
/// ```ignore
/// Button::new("rerun", "Rerun", ButtonColors::from_panel(&colors))
///     .on_click(Box::new(|_, _, _| println!("Clicked!")))
/// ```
#[derive(IntoElement)]
pub struct Button {
    id: SharedString,
    label: SharedString,
    colors: ButtonColors,
    on_click: Option<Rc<OnClickCallback>>,
}

impl Button {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>, colors: ButtonColors) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            colors,
            on_click: None,
        }
    }

    pub fn on_click(mut self, callback: OnClickCallback) -> Self {
        self.on_click = Some(Rc::new(callback));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let hover_bg = colors.background_hover;

        let mut button = div()
            .id(ElementId::Name(format!("header-action-{}", self.id).into()))
            .flex()
            .flex_row()
            .items_center()
            .justify_center()
            .px(px(6.))
            .py(px(2.))
            .rounded(px(4.))
            .border_1()
            .border_color(colors.border)
            .text_color(colors.text_color)
            .text_xs()
            .font_weight(FontWeight::MEDIUM)
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .child(self.label);

        if let Some(callback) = self.on_click {
            button = button.on_click(move |event, window, cx| {
                callback(event, window, cx);
            });
        }

        button
    }
}
