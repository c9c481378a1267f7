use crate::config::ConnectionConfig;
use crate::ui::theme::ThemeMode;
use crate::ui::translations::Strings;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// The terminal prompt card: connection info, the editable text box and
/// the execute hint.
pub struct PromptPanel<'a> {
    pub input: &'a str,
    pub analyzing: bool,
    pub connection: &'a ConnectionConfig,
    pub status: Option<&'a str>,
}

impl PromptPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, strings: &Strings) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .title(strings.terminal);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(inner);

        self.render_connection(frame, chunks[0], theme, strings);
        self.render_input_box(frame, chunks[1], theme, strings);
        self.render_footer(frame, chunks[2], theme, strings);
    }

    fn render_connection(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: ThemeMode,
        strings: &Strings,
    ) {
        let dim = Style::default().fg(theme.dim());
        let value = Style::default().fg(theme.fg());
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{}: ", strings.node), dim),
                Span::styled(self.connection.endpoint.as_str(), value),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", strings.port), dim),
                Span::styled(self.connection.port.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled(format!("{}: ", strings.link), dim),
                Span::styled(
                    strings.established,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_input_box(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, strings: &Strings) {
        let border = if self.analyzing {
            Style::default().fg(theme.dim())
        } else {
            Style::default().fg(theme.fg())
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut text = self.input.to_string();
        if self.analyzing {
            text = format!("{}\n\n{}", text, strings.waiting);
        } else {
            // Trailing block as a crude cursor.
            text.push('▌');
        }

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(theme.fg()))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, strings: &Strings) {
        let mut lines = vec![Line::from(Span::styled(
            format!(
                "Enter {} | ^T theme | ^L {} | ^U clear | Esc quit",
                strings.execute, strings.lang
            ),
            Style::default().fg(theme.dim()),
        ))];

        if let Some(status) = self.status {
            lines.push(Line::from(Span::styled(
                status,
                Style::default().fg(Color::Yellow),
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
