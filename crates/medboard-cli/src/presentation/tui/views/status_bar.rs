//! Bottom status line: what the controller is doing and the last failure

use medboard_engine::{AppState, Phase};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusBarView<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_text(&self) -> String {
        match self.state.phase() {
            Phase::Idle => "Idle".to_string(),
            Phase::AwaitingFetch => format!("Loading ({} in flight)", self.state.in_flight),
            Phase::Displaying(value) => match value {
                serde_json::Value::Array(rows) => format!("{} rows", rows.len()),
                _ => "1 record".to_string(),
            },
            Phase::FormOpen(mode, _) => mode.title().to_string(),
            Phase::PromptingIdentifier(_) => "Waiting for patient ID".to_string(),
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let mut status = vec![Span::styled(
            self.phase_text(),
            Style::default().fg(Color::Green),
        )];
        if let Some(err) = &self.state.last_error {
            status.push(Span::raw(" | "));
            status.push(Span::styled(err.as_str(), Style::default().fg(Color::Red)));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[1-6]", key),
            Span::raw("select "),
            Span::styled("[Tab]", key),
            Span::raw("focus "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
