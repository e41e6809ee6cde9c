use medboard_engine::FormState;
use medboard_types::Field;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::centered;

/// Create/update dialog: one line per schema field
pub struct FormDialogView<'a> {
    form: &'a FormState,
}

impl<'a> FormDialogView<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self { form }
    }

    pub fn area(screen: Rect) -> Rect {
        centered(screen, 60, Field::ALL.len() as u16 + 4)
    }
}

impl<'a> Widget for FormDialogView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focused();
        let mut lines: Vec<Line> = Field::ALL
            .iter()
            .map(|field| {
                let value = self.form.value(*field);
                let label_style = if *field == focused {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let value_span = if value.is_empty() {
                    Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
                } else {
                    Span::raw(value.to_string())
                };
                Line::from(vec![
                    Span::styled(format!("{:<16}", field.key()), label_style),
                    value_span,
                ])
            })
            .collect();

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {} ", self.form.mode().action())),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Close"),
        ]));

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(self.form.mode().title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}
