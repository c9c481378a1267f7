use crate::sentiment::Sentiment;
use crate::ui::theme::ThemeMode;
use crate::ui::translations::Language;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Hand-drawn 12x12 mascot grids. '#' cells take the sentiment color,
// '.' cells stay transparent. Each cell renders as two block characters
// to keep the face roughly square in terminal cells.
const FACE_POSITIVE: [&str; 12] = [
    "....####....",
    "..########..",
    ".##########.",
    "###.####.###",
    "###.####.###",
    "############",
    "############",
    "#.########.#",
    "##........##",
    ".##########.",
    "..########..",
    "....####....",
];

const FACE_NEUTRAL: [&str; 12] = [
    "....####....",
    "..########..",
    ".##########.",
    "###.####.###",
    "###.####.###",
    "############",
    "############",
    "############",
    "#..........#",
    ".##########.",
    "..########..",
    "....####....",
];

const FACE_NEGATIVE: [&str; 12] = [
    "....####....",
    "..########..",
    ".##########.",
    "###.####.###",
    "###.####.###",
    "############",
    "############",
    "##........##",
    "#.########.#",
    ".##########.",
    "..########..",
    "....####....",
];

/// The central mascot: a pixel face matching the classification, with the
/// localized label underneath.
pub struct FacePanel {
    pub sentiment: Sentiment,
}

impl FacePanel {
    fn grid(&self) -> &'static [&'static str; 12] {
        match self.sentiment {
            Sentiment::Positive => &FACE_POSITIVE,
            Sentiment::Neutral => &FACE_NEUTRAL,
            Sentiment::Negative => &FACE_NEGATIVE,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: ThemeMode, language: Language) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let color = match self.sentiment {
            Sentiment::Positive => theme.positive(),
            Sentiment::Neutral => theme.neutral(),
            Sentiment::Negative => theme.negative(),
        };

        let mut lines = Vec::new();
        for row in self.grid() {
            let mut spans = Vec::new();
            for cell in row.chars() {
                let text = if cell == '#' { "██" } else { "  " };
                spans.push(Span::styled(text, Style::default().fg(color)));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            language.sentiment_label(self.sentiment),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grids_are_square() {
        for grid in [&FACE_POSITIVE, &FACE_NEUTRAL, &FACE_NEGATIVE] {
            for row in grid.iter() {
                assert_eq!(row.len(), 12);
            }
        }
    }

    #[test]
    fn test_faces_are_distinct() {
        assert_ne!(FACE_POSITIVE, FACE_NEUTRAL);
        assert_ne!(FACE_NEUTRAL, FACE_NEGATIVE);
        assert_ne!(FACE_POSITIVE, FACE_NEGATIVE);
    }

    #[test]
    fn test_grid_selection_follows_sentiment() {
        let panel = FacePanel {
            sentiment: Sentiment::Negative,
        };
        assert_eq!(panel.grid(), &FACE_NEGATIVE);
    }
}
