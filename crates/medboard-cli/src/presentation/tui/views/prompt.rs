use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::centered;

pub const UPDATE_PROMPT: &str = "Enter the ID of the patient to update:";

/// Identifier prompt shown after the update form is submitted
pub struct PromptView<'a> {
    text: &'a str,
}

impl<'a> PromptView<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn area(screen: Rect) -> Rect {
        centered(screen, 48, 5)
    }
}

impl<'a> Widget for PromptView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(vec![
            Line::raw(UPDATE_PROMPT),
            Line::raw(format!("{}▏", self.text)),
        ])
        .block(
            Block::default()
                .title("Update Patient")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .render(area, buf);
    }
}
