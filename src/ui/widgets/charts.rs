use crate::sentiment::SentimentResult;
use crate::ui::theme::ThemeMode;
use crate::ui::translations::Strings;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge},
    Frame,
};

/// Score gauge plus the positive/neutral/negative distribution bars.
pub struct ChartsPanel<'a> {
    pub result: &'a SentimentResult,
}

impl ChartsPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, strings: &Strings) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6)])
            .split(area);

        self.render_gauge(frame, chunks[0], theme, strings);
        self.render_bars(frame, chunks[1], theme, strings);
    }

    fn render_gauge(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, strings: &Strings) {
        let score = self.result.score;
        let color = if score > 50 {
            theme.positive()
        } else if score < 50 {
            theme.negative()
        } else {
            theme.neutral()
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.dim()))
                    .title(strings.score),
            )
            .gauge_style(Style::default().fg(color))
            .percent(u16::from(score))
            .label(format!("{}/100", score));
        frame.render_widget(gauge, area);
    }

    fn render_bars(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, strings: &Strings) {
        let breakdown = &self.result.breakdown;
        let entries = [
            ("POS", breakdown.positive, theme.positive()),
            ("NEU", breakdown.neutral, theme.neutral()),
            ("NEG", breakdown.negative, theme.negative()),
        ];

        let bars: Vec<Bar> = entries
            .iter()
            .map(|(label, count, color)| {
                let percent = percent_of(*count, breakdown.total());
                Bar::default()
                    .value(percent)
                    .label(Line::from(*label))
                    .text_value(format!("{}%", percent))
                    .style(Style::default().fg(*color))
                    .value_style(Style::default().fg(Color::Black).bg(*color))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.dim()))
                    .title(strings.breakdown),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(7)
            .bar_gap(2)
            .max(100);
        frame.render_widget(chart, area);
    }
}

fn percent_of(count: usize, total: usize) -> u64 {
    if total == 0 {
        0
    } else {
        ((count as f64 / total as f64) * 100.0).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(3, 3), 100);
    }
}
