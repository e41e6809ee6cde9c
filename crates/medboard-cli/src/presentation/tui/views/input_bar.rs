use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::border_style;

/// Single-line input for the identifier or search query
pub struct InputBarView<'a> {
    placeholder: &'a str,
    text: &'a str,
    focused: bool,
}

impl<'a> InputBarView<'a> {
    pub fn new(placeholder: &'a str, text: &'a str, focused: bool) -> Self {
        Self {
            placeholder,
            text,
            focused,
        }
    }
}

impl<'a> Widget for InputBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = if self.text.is_empty() {
            Span::styled(self.placeholder, Style::default().fg(Color::DarkGray))
        } else if self.focused {
            Span::raw(format!("{}▏", self.text))
        } else {
            Span::raw(self.text)
        };

        Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style(self.focused)),
            )
            .render(area, buf);
    }
}
