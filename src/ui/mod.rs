pub mod theme;
pub mod translations;
pub mod widgets;

use crate::config::AppConfig;
use crate::sentiment::{AnalysisData, Analyzer, LocalAnalyzer, SentimentResult};
use anyhow::Result;
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Duration;
use theme::ThemeMode;
use tokio::sync::mpsc::{self, UnboundedSender};
use translations::Language;
use widgets::{ChartsPanel, FacePanel, PromptPanel, SnippetsPanel};

/// Set up the terminal, run the dashboard, and restore the terminal on
/// the way out.
pub async fn run(config: AppConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(config).run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

pub struct App {
    config: AppConfig,
    theme: ThemeMode,
    language: Language,
    input: String,
    analyzing: bool,
    result: Option<SentimentResult>,
    status: Option<String>,
    analyzer: Arc<dyn Analyzer>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            theme: config.theme,
            language: config.language,
            config,
            input: String::new(),
            analyzing: false,
            result: None,
            status: None,
            analyzer: Arc::new(LocalAnalyzer),
            should_quit: false,
        }
    }

    async fn run(mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        // Blocking reader thread; events flow to the async loop over a
        // channel so analysis results and redraw ticks can interleave.
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        let (analysis_tx, mut analysis_rx) = mpsc::unbounded_channel();
        let mut tick = tokio::time::interval(Duration::from_millis(100));

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    if let Event::Key(key) = event {
                        self.handle_key(key, &analysis_tx);
                    }
                }
                Some(message) = analysis_rx.recv() => {
                    self.handle_analysis(message);
                }
                _ = tick.tick() => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, analysis_tx: &UnboundedSender<AnalysisData>) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('t') if ctrl => self.theme = self.theme.cycle(),
            KeyCode::Char('l') if ctrl => self.language = self.language.cycle(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Enter => self.submit(analysis_tx),
            KeyCode::Backspace if !self.analyzing => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl && !self.analyzing => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Kick off an analysis task. Input stays disabled until the result
    /// message comes back.
    fn submit(&mut self, analysis_tx: &UnboundedSender<AnalysisData>) {
        if self.analyzing || self.input.trim().is_empty() {
            return;
        }

        self.analyzing = true;
        self.status = None;

        let analyzer = Arc::clone(&self.analyzer);
        let text = self.input.clone();
        let tx = analysis_tx.clone();
        tokio::spawn(async move {
            let message = match analyzer.analyze(&text).await {
                Ok(result) => AnalysisData::Result(result),
                Err(e) => AnalysisData::Error(e.to_string()),
            };
            let _ = tx.send(message);
        });
    }

    fn handle_analysis(&mut self, message: AnalysisData) {
        self.analyzing = false;
        match message {
            AnalysisData::Result(result) => {
                self.result = Some(result);
                self.status = None;
            }
            AnalysisData::Error(e) => {
                self.status = Some(format!("Error: {}", e));
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let strings = self.language.strings();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(10)])
            .split(frame.area());

        self.draw_header(frame, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        let prompt = PromptPanel {
            input: &self.input,
            analyzing: self.analyzing,
            connection: &self.config.connection,
            status: self.status.as_deref(),
        };
        prompt.render(frame, columns[0], self.theme, strings);

        match &self.result {
            Some(result) => self.draw_result(frame, columns[1], result),
            None => self.draw_idle(frame, columns[1]),
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let strings = self.language.strings();
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    strings.title,
                    Style::default()
                        .fg(self.theme.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" v{}_CLI", env!("CARGO_PKG_VERSION")),
                    Style::default().fg(self.theme.dim()),
                ),
                Span::styled(
                    format!(
                        "  [{}] [{}]",
                        self.theme.name(),
                        self.language.code()
                    ),
                    Style::default().fg(self.theme.dim()),
                ),
            ]),
            Line::from(Span::styled(
                strings.subtitle,
                Style::default().fg(self.theme.dim()),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect, result: &SentimentResult) {
        let strings = self.language.strings();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(17),
                Constraint::Length(11),
                Constraint::Min(9),
            ])
            .split(area);

        let face = FacePanel {
            sentiment: result.sentiment,
        };
        face.render(frame, chunks[0], self.theme, self.language);

        let charts = ChartsPanel { result };
        charts.render(frame, chunks[1], self.theme, strings);

        let snippets = SnippetsPanel { result };
        snippets.render(frame, chunks[2], self.theme, strings);
    }

    fn draw_idle(&self, frame: &mut Frame, area: Rect) {
        let strings = self.language.strings();
        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                strings.idle_title,
                Style::default()
                    .fg(self.theme.dim())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                strings.idle_sub,
                Style::default().fg(self.theme.dim()),
            )),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::analyze_sentiment;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> (App, UnboundedSender<AnalysisData>) {
        let (tx, _rx) = mpsc::unbounded_channel();
        (App::new(AppConfig::default()), tx)
    }

    #[test]
    fn test_typing_edits_input() {
        let (mut app, tx) = test_app();
        app.handle_key(key(KeyCode::Char('h')), &tx);
        app.handle_key(key(KeyCode::Char('i')), &tx);
        assert_eq!(app.input, "hi");
        app.handle_key(key(KeyCode::Backspace), &tx);
        assert_eq!(app.input, "h");
    }

    #[test]
    fn test_ctrl_u_clears_input() {
        let (mut app, tx) = test_app();
        app.input = "something".to_string();
        app.handle_key(ctrl('u'), &tx);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_ctrl_t_cycles_theme() {
        let (mut app, tx) = test_app();
        let before = app.theme;
        app.handle_key(ctrl('t'), &tx);
        assert_ne!(app.theme, before);
    }

    #[test]
    fn test_ctrl_l_cycles_language() {
        let (mut app, tx) = test_app();
        assert_eq!(app.language, Language::Es);
        app.handle_key(ctrl('l'), &tx);
        assert_eq!(app.language, Language::En);
    }

    #[test]
    fn test_esc_quits() {
        let (mut app, tx) = test_app();
        app.handle_key(key(KeyCode::Esc), &tx);
        assert!(app.should_quit);
    }

    #[test]
    fn test_input_locked_while_analyzing() {
        let (mut app, tx) = test_app();
        app.analyzing = true;
        app.handle_key(key(KeyCode::Char('x')), &tx);
        assert!(app.input.is_empty());
    }

    #[tokio::test]
    async fn test_submit_requires_text() {
        let (mut app, tx) = test_app();
        app.input = "   ".to_string();
        app.submit(&tx);
        assert!(!app.analyzing);
    }

    #[tokio::test]
    async fn test_submit_and_receive_result() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(AppConfig::default());
        app.input = "good news".to_string();
        app.submit(&tx);
        assert!(app.analyzing);

        let message = rx.recv().await.unwrap();
        app.handle_analysis(message);
        assert!(!app.analyzing);
        let result = app.result.expect("result should be set");
        assert_eq!(result, analyze_sentiment("good news"));
    }

    #[test]
    fn test_analysis_error_sets_status() {
        let (mut app, _tx) = test_app();
        app.analyzing = true;
        app.handle_analysis(AnalysisData::Error("engine offline".to_string()));
        assert!(!app.analyzing);
        assert_eq!(app.status.as_deref(), Some("Error: engine offline"));
    }
}
