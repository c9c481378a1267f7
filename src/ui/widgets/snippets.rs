use crate::sentiment::SentimentResult;
use crate::ui::theme::ThemeMode;
use crate::ui::translations::Strings;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Evidence excerpts: one card per sentiment category.
pub struct SnippetsPanel<'a> {
    pub result: &'a SentimentResult,
}

impl SnippetsPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, strings: &Strings) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let cards = [
            (strings.best, &self.result.best_snippet, theme.positive()),
            (
                strings.neutral,
                &self.result.neutral_snippet,
                theme.neutral(),
            ),
            (strings.worst, &self.result.worst_snippet, theme.negative()),
        ];

        for ((title, snippet, color), chunk) in cards.iter().zip(chunks.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(*color))
                .title(*title);
            let inner = block.inner(*chunk);
            frame.render_widget(block, *chunk);

            let width = inner.width.max(1) as usize;
            let wrapped = textwrap::wrap(snippet, width).join("\n");
            let paragraph = Paragraph::new(format!("> {}", wrapped))
                .style(Style::default().fg(theme.fg()))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, inner);
        }
    }
}
