//! Ratatui-based terminal UI.
//!
//! The TUI is a small form: two birth-date fields and an Analyze action. The
//! result panel shows a score gauge plus the same sections as the text report.

use std::io;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::debug;

use crate::config::{DATE_FORMAT, parse_date};
use crate::domain::{Commentary, CompatibilityResult};
use crate::error::AppError;
use crate::report::{format_partner, format_relations, format_years};

/// Initial form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub date_a: NaiveDate,
    pub date_b: NaiveDate,
    pub current_year: i32,
}

/// Start the TUI.
pub fn run(defaults: FormDefaults) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(defaults);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

const FIELD_A: usize = 0;
const FIELD_B: usize = 1;
const FIELD_ANALYZE: usize = 2;

struct App {
    inputs: [String; 2],
    /// Text of the field being edited before the edit started (restored on Esc).
    edit_backup: Option<String>,
    selected_field: usize,
    current_year: i32,
    status: String,
    result: Option<CompatibilityResult>,
}

impl App {
    fn new(defaults: FormDefaults) -> Self {
        Self {
            inputs: [
                defaults.date_a.format(DATE_FORMAT).to_string(),
                defaults.date_b.format(DATE_FORMAT).to_string(),
            ],
            edit_backup: None,
            selected_field: FIELD_A,
            current_year: defaults.current_year,
            status: "Enter both birth dates, then Analyze.".to_string(),
            result: None,
        }
    }

    fn editing(&self) -> bool {
        self.edit_backup.is_some()
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing() {
            self.handle_date_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Tab => {
                if self.selected_field < FIELD_ANALYZE {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_year(-1),
            KeyCode::Right => self.adjust_year(1),
            KeyCode::Enter => {
                if self.selected_field == FIELD_ANALYZE {
                    self.analyze();
                } else {
                    self.edit_backup = Some(self.inputs[self.selected_field].clone());
                    self.status = "Editing date (YYYY-MM-DD). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('a') => self.analyze(),
            _ => {}
        }

        false
    }

    fn handle_date_edit(&mut self, code: KeyCode) {
        let field = &mut self.inputs[self.selected_field];
        match code {
            KeyCode::Esc => {
                if let Some(backup) = self.edit_backup.take() {
                    *field = backup;
                }
                self.status = "Date edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.edit_backup = None;
                self.status = match parse_date(field) {
                    Ok(date) => format!("Date set: {date}"),
                    Err(err) => err.to_string(),
                };
            }
            KeyCode::Backspace => {
                field.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                field.push(c);
            }
            _ => {}
        }
    }

    /// Shift the selected date by whole years (day clamped for Feb 29).
    fn adjust_year(&mut self, delta: i32) {
        if self.selected_field > FIELD_B {
            return;
        }
        let field = &mut self.inputs[self.selected_field];
        let Ok(date) = parse_date(field) else {
            self.status = format!("Cannot adjust invalid date '{}'.", field.trim());
            return;
        };
        let year = date.year().saturating_add(delta);
        let shifted = NaiveDate::from_ymd_opt(year, date.month(), date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28));
        if let Some(shifted) = shifted {
            *field = shifted.format(DATE_FORMAT).to_string();
            self.status = format!("Date set: {shifted}");
        }
    }

    fn analyze(&mut self) {
        let date_a = match parse_date(&self.inputs[FIELD_A]) {
            Ok(d) => d,
            Err(err) => {
                self.status = format!("Partner A: {err}");
                return;
            }
        };
        let date_b = match parse_date(&self.inputs[FIELD_B]) {
            Ok(d) => d,
            Err(err) => {
                self.status = format!("Partner B: {err}");
                return;
            }
        };

        let result = crate::app::pipeline::evaluate(date_a, date_b, self.current_year);
        debug!(score = result.score, "form analyzed");
        self.status = format!("Analyzed: score {}/100", result.score);
        self.result = Some(result);
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(vec![
                Span::styled("lovematch", Style::default().fg(Color::Magenta)),
                Span::raw(" — Love Match Compatibility Analyzer"),
            ]),
            Line::from(Span::styled(
                format!(
                    "Enter both partners' birth dates to get a full compatibility report. | wedding window from {}",
                    self.current_year
                ),
                Style::default().fg(Color::Gray),
            )),
        ];
        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(0)])
            .split(area);

        self.draw_form(frame, chunks[0]);
        self.draw_result(frame, chunks[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cursor = |field: usize| if self.editing() && self.selected_field == field { "_" } else { "" };

        let items = vec![
            ListItem::new(format!("Partner A: {}{}", self.inputs[FIELD_A], cursor(FIELD_A))),
            ListItem::new(format!("Partner B: {}{}", self.inputs[FIELD_B], cursor(FIELD_B))),
            ListItem::new("[ Analyze Compatibility ]"),
        ];

        let list = List::new(items)
            .block(Block::default().title("Birth Dates").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing() {
            let hint = Paragraph::new("Editing date…")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(result) = &self.result else {
            let msg = Paragraph::new("Press Enter on Analyze (or 'a') to compute the report.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().title("Report").borders(Borders::ALL));
            frame.render_widget(msg, area);
            return;
        };

        let (details, outlook) = result_lines(result);
        // Borders take two rows; long partner lines may still wrap past this.
        let details_height = u16::try_from(details.len() + 2).unwrap_or(u16::MAX);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(details_height),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let p = Paragraph::new(Text::from(details))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Report").borders(Borders::ALL));
        frame.render_widget(p, chunks[0]);

        let gauge = Gauge::default()
            .block(Block::default().title("Compatibility Score").borders(Borders::ALL))
            .gauge_style(Style::default().fg(commentary_color(result.commentary)))
            .percent(u16::from(result.score.min(100)))
            .label(format!("{}/100", result.score));
        frame.render_widget(gauge, chunks[1]);

        let p = Paragraph::new(Text::from(outlook))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, chunks[2]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ year  Enter edit/analyze  a analyze  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn commentary_color(commentary: Commentary) -> Color {
    match commentary {
        Commentary::Excellent => Color::Green,
        Commentary::Good => Color::Cyan,
        Commentary::Average => Color::Yellow,
        Commentary::Challenging => Color::Red,
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    ))
}

/// Report sections as styled lines, in the same order as the text report.
///
/// The first half ends at "Same Nayin Element" and the second starts at
/// "Commentary"; the score gauge is drawn between them.
fn result_lines(result: &CompatibilityResult) -> (Vec<Line<'static>>, Vec<Line<'static>>) {
    let rel = &result.element_relation;
    let details = vec![
        section("Basic Info"),
        Line::from(format!("- Partner A: {}", format_partner(&result.partner_a))),
        Line::from(format!("- Partner B: {}", format_partner(&result.partner_b))),
        Line::from(""),
        section("Zodiac Relations"),
        Line::from(format_relations(result)),
        Line::from(""),
        section("Nayin & Five Elements"),
        Line::from(format!(
            "- Elements: {} vs {}",
            result.partner_a.element, result.partner_b.element
        )),
        Line::from(format!("- Relation: {} ({})", rel.kind.display_name(), rel.description)),
        Line::from(format!(
            "- Same Nayin Element: {}",
            if result.same_nayin_element { "Yes" } else { "No" }
        )),
    ];
    let outlook = vec![
        section("Commentary"),
        Line::from(result.commentary.sentence()),
        Line::from(""),
        section("Recommended Wedding Years"),
        Line::from(format_years(&result.recommended_years)),
        Line::from(""),
        section("Children Forecast"),
        Line::from(result.children_outlook.clone()),
    ];
    (details, outlook)
}
