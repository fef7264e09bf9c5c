//! Full-width informational cell shown in place of an empty row list

use gpui::*;

use crate::presentation::{MessagePresentation, MessageTone};

#[derive(IntoElement)]
pub struct MessageCell {
    message: MessagePresentation,
    height: f32,
}

impl MessageCell {
    pub fn new(message: MessagePresentation, height: f32) -> Self {
        Self { message, height }
    }
}

impl RenderOnce for MessageCell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let id = match self.message.tone {
            MessageTone::Neutral => "overlay-message",
            MessageTone::Error => "overlay-message-error",
        };

        div()
            .id(id)
            .w_full()
            .h(px(self.height))
            .px(px(8.))
            .flex()
            .items_center()
            .justify_center()
            .overflow_hidden()
            .whitespace_nowrap()
            .italic()
            .text_sm()
            .text_color(rgb(self.message.color))
            .child(self.message.text)
    }
}
