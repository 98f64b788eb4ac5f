//! Liver disease risk assessment — interactive Ratatui intake form.
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  Hepascore / Liver Disease Risk Assessment                          │
//!   ├─── left panel ──────────────────┬─── right panel ───────────────────┤
//!   │  Patient Biomarkers (form)      │  Assessment (result / pending)    │
//!   ├─────────────────────────────────┴───────────────────────────────────┤
//!   │  Session History                                                    │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Enter snapshots the form into an immutable `PatientData` and starts a
//! fixed 2-second simulated processing window; Enter is ignored while a run
//! is pending and Esc cancels it. Scoring itself is instantaneous — the
//! delay exists only to present a loading state.

use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use hepascore_contracts::{
    assessment::{Assessment, RiskLevel},
    patient::{Gender, PatientData},
};
use hepascore_engine::{ProfileScorer, RiskScorer};

/// Fixed simulated processing window before a result is shown.
const ANALYSIS_DELAY: Duration = Duration::from_secs(2);

/// Longest accepted numeric input per field.
const MAX_FIELD_LEN: usize = 8;

const DISCLAIMER: &str = "This tool produces a rule-based estimate for educational purposes \
                          only. It is not a medical diagnosis. Consult a qualified clinician \
                          for any health concern.";

// ── Form model ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// Digits only.
    Integer,
    /// Digits plus at most one decimal point.
    Decimal,
}

/// One editable numeric row of the intake form.
struct FormField {
    label: &'static str,
    unit: &'static str,
    kind: FieldKind,
    buffer: String,
}

impl FormField {
    fn new(label: &'static str, unit: &'static str, kind: FieldKind, initial: &str) -> Self {
        Self { label, unit, kind, buffer: initial.to_string() }
    }

    /// Accept or ignore one typed character, applying the numeric filter.
    fn push_char(&mut self, c: char) {
        if self.buffer.len() >= MAX_FIELD_LEN {
            return;
        }
        match c {
            '0'..='9' => self.buffer.push(c),
            '.' if self.kind == FieldKind::Decimal && !self.buffer.contains('.') => {
                self.buffer.push(c)
            }
            _ => {}
        }
    }

    /// Parse as integer; unparseable input degrades to 0 (no points fire).
    fn as_u32(&self) -> u32 {
        self.buffer.parse().unwrap_or(0)
    }

    /// Parse as decimal; unparseable input degrades to NaN (no points fire).
    fn as_f64(&self) -> f64 {
        self.buffer.parse().unwrap_or(f64::NAN)
    }
}

// Indices into `App::fields`.
const F_AGE: usize = 0;
const F_TOTAL_BILI: usize = 1;
const F_DIRECT_BILI: usize = 2;
const F_ALP: usize = 3;
const F_ALT: usize = 4;
const F_AST: usize = 5;
const F_TOTAL_PROT: usize = 6;
const F_ALBUMIN: usize = 7;
const F_AG_RATIO: usize = 8;

/// Form rows, top to bottom. The gender row sits between age and the labs
/// and is the only non-numeric row.
const ROW_COUNT: usize = 10;
const GENDER_ROW: usize = 1;

/// Map a form row to its index in `App::fields` (None for the gender row).
fn field_index(row: usize) -> Option<usize> {
    match row {
        0 => Some(F_AGE),
        GENDER_ROW => None,
        n => Some(n - 1),
    }
}

// ── App state ─────────────────────────────────────────────────────────────────

/// A triggered analysis waiting out its simulated processing window. The
/// patient snapshot is captured at trigger time, so keystrokes during the
/// window cannot change the result.
struct PendingRun {
    started: Instant,
    patient: PatientData,
}

struct App {
    scorer: ProfileScorer,
    fields: Vec<FormField>,
    gender: Gender,
    /// Focused form row, 0..ROW_COUNT.
    focus: usize,
    /// The pending analysis, if one is in flight.
    in_flight: Option<PendingRun>,
    /// Most recent completed assessment.
    current: Option<Assessment>,
    /// Every completed assessment this session, oldest first.
    history: Vec<Assessment>,
}

impl App {
    fn new(scorer: ProfileScorer) -> Self {
        let defaults = PatientData::default();
        let fields = vec![
            FormField::new("Age (1-120)", "years", FieldKind::Integer, &defaults.age.to_string()),
            FormField::new(
                "Total bilirubin",
                "mg/dL",
                FieldKind::Decimal,
                &format!("{:.1}", defaults.total_bilirubin),
            ),
            FormField::new(
                "Direct bilirubin",
                "mg/dL",
                FieldKind::Decimal,
                &format!("{:.1}", defaults.direct_bilirubin),
            ),
            FormField::new(
                "Alkaline phosphatase",
                "U/L",
                FieldKind::Integer,
                &defaults.alkaline_phosphatase.to_string(),
            ),
            FormField::new(
                "ALT",
                "U/L",
                FieldKind::Integer,
                &defaults.alanine_aminotransferase.to_string(),
            ),
            FormField::new(
                "AST",
                "U/L",
                FieldKind::Integer,
                &defaults.aspartate_aminotransferase.to_string(),
            ),
            FormField::new(
                "Total proteins",
                "g/dL",
                FieldKind::Decimal,
                &format!("{:.1}", defaults.total_proteins),
            ),
            FormField::new(
                "Albumin",
                "g/dL",
                FieldKind::Decimal,
                &format!("{:.1}", defaults.albumin),
            ),
            FormField::new(
                "A/G ratio",
                "",
                FieldKind::Decimal,
                &format!("{:.1}", defaults.albumin_globulin_ratio),
            ),
        ];

        Self {
            scorer,
            fields,
            gender: defaults.gender,
            focus: 0,
            in_flight: None,
            current: None,
            history: Vec::new(),
        }
    }

    /// Immutable snapshot of the form buffers. Taken once per analysis so
    /// the scorer never sees a partially edited record.
    fn snapshot(&self) -> PatientData {
        PatientData {
            age: self.fields[F_AGE].as_u32(),
            gender: self.gender,
            total_bilirubin: self.fields[F_TOTAL_BILI].as_f64(),
            direct_bilirubin: self.fields[F_DIRECT_BILI].as_f64(),
            alkaline_phosphatase: self.fields[F_ALP].as_u32(),
            alanine_aminotransferase: self.fields[F_ALT].as_u32(),
            aspartate_aminotransferase: self.fields[F_AST].as_u32(),
            total_proteins: self.fields[F_TOTAL_PROT].as_f64(),
            albumin: self.fields[F_ALBUMIN].as_f64(),
            albumin_globulin_ratio: self.fields[F_AG_RATIO].as_f64(),
        }
    }

    /// Snapshot the form and start a run, unless one is already pending
    /// (the trigger is disabled while in flight).
    fn start_analysis(&mut self) {
        if self.in_flight.is_none() {
            self.in_flight = Some(PendingRun {
                started: Instant::now(),
                patient: self.snapshot(),
            });
        }
    }

    /// Cancel a pending run without producing a result.
    fn cancel_analysis(&mut self) {
        self.in_flight = None;
    }

    /// Called by the event loop once the processing window has elapsed.
    /// Scores the snapshot taken at trigger time, not the current buffers.
    fn finish_analysis(&mut self) {
        let Some(pending) = self.in_flight.take() else {
            return;
        };
        let result = self.scorer.assess(&pending.patient);
        let assessment = Assessment::new(pending.patient, result);
        self.current = Some(assessment.clone());
        self.history.push(assessment);
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % ROW_COUNT;
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + ROW_COUNT - 1) % ROW_COUNT;
    }

    /// Route a typed character to the focused row.
    fn on_char(&mut self, c: char) {
        match field_index(self.focus) {
            Some(idx) => self.fields[idx].push_char(c),
            None => {
                if c == ' ' {
                    self.gender = self.gender.toggled();
                }
            }
        }
    }

    fn on_backspace(&mut self) {
        if let Some(idx) = field_index(self.focus) {
            self.fields[idx].buffer.pop();
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        // Terminal palettes have no orange; LightRed keeps High distinct.
        RiskLevel::High => Color::LightRed,
        RiskLevel::Critical => Color::Red,
    }
}

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Min(14),    // form + result
            Constraint::Length(6),  // session history
            Constraint::Length(3),  // footer
        ])
        .split(full);

    render_header(f, outer_chunks[0], app);

    let mid_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(outer_chunks[1]);

    render_form(f, mid_chunks[0], app);
    render_result(f, mid_chunks[1], app);
    render_history(f, outer_chunks[2], app);
    render_footer(f, outer_chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let state_str = if app.in_flight.is_some() {
        "analyzing..."
    } else if app.current.is_some() {
        "complete"
    } else {
        "idle"
    };

    let line = Line::from(vec![
        Span::styled("Hepascore ", title_style),
        Span::raw("Liver Disease Risk Assessment    "),
        Span::styled(format!("[{}]", state_str), Style::default().fg(Color::DarkGray)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    for row in 0..ROW_COUNT {
        let focused = row == app.focus;
        let label_style = if focused {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let line = match field_index(row) {
            Some(idx) => {
                let field = &app.fields[idx];
                let cursor = if focused { "_" } else { " " };
                Line::from(vec![
                    Span::styled(format!(" {:<22}", field.label), label_style),
                    Span::raw(" ["),
                    Span::styled(
                        format!("{:<9}", format!("{}{}", field.buffer, cursor)),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("] "),
                    Span::styled(field.unit, Style::default().fg(Color::DarkGray)),
                ])
            }
            None => Line::from(vec![
                Span::styled(format!(" {:<22}", "Gender"), label_style),
                Span::raw("  "),
                Span::styled(
                    format!("< {} >", app.gender.as_str()),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
        };
        items.push(ListItem::new(line));
    }

    let block = Block::default()
        .title(" Patient Biomarkers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(List::new(items).block(block), area);
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Assessment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // Pending state: progress caption, no result yet.
    if let Some(pending) = &app.in_flight {
        let dots = ".".repeat((pending.started.elapsed().as_millis() / 400 % 4) as usize + 1);
        let p = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Analyzing biomarkers{}", dots),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                "  Applying threshold rules to the patient snapshot",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        f.render_widget(p, area);
        return;
    }

    // Empty state: prompt to run.
    let Some(assessment) = &app.current else {
        let p = Paragraph::new(Span::styled(
            "  Enter patient values and press [Enter] to analyze.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(p, area);
        return;
    };

    let result = &assessment.result;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("  Risk level:  ", Style::default().fg(Color::Gray)),
        Span::styled(
            result.risk.as_str(),
            Style::default().fg(risk_color(result.risk)).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Confidence:  ", Style::default().fg(Color::Gray)),
        Span::raw(format!("{:.1}%", result.confidence)),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Risk factors:",
        Style::default().fg(Color::Gray),
    )));
    if result.risk_factors.is_empty() {
        lines.push(Line::from(Span::styled(
            "    (no specific risk factors identified)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for factor in &result.risk_factors {
            lines.push(Line::from(vec![
                Span::styled("    - ", Style::default().fg(Color::DarkGray)),
                Span::styled(factor.as_str(), Style::default().fg(risk_color(result.risk))),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Recommendations:",
        Style::default().fg(Color::Gray),
    )));
    for rec in &result.recommendations {
        lines.push(Line::from(vec![
            Span::styled("    - ", Style::default().fg(Color::DarkGray)),
            Span::raw(rec.as_str()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", DISCLAIMER),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    if app.history.is_empty() {
        items.push(ListItem::new(Span::styled(
            "  No assessments yet this session",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        // Newest first; the panel holds only a few rows.
        let visible = area.height.saturating_sub(2) as usize;
        for assessment in app.history.iter().rev().take(visible) {
            let result = &assessment.result;
            let when = assessment
                .created_at
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S");
            let line = Line::from(vec![
                Span::styled(
                    format!("  #{} ", assessment.id.short()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{}  ", when)),
                Span::styled(
                    format!("{:<9}", result.risk.as_str()),
                    Style::default().fg(risk_color(result.risk)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:.1}%  ", result.confidence),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{} factor(s)", result.risk_factors.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            items.push(ListItem::new(line));
        }
    }

    let block = Block::default()
        .title(" Session History ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(List::new(items).block(block), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![
        Span::styled(" [Tab/Up/Down] ", Style::default().fg(Color::Cyan)),
        Span::raw("Field  "),
        Span::styled("[Space] ", Style::default().fg(Color::Cyan)),
        Span::raw("Toggle gender  "),
    ];

    if app.in_flight.is_some() {
        spans.push(Span::styled("[Esc] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Cancel  "));
    } else {
        spans.push(Span::styled("[Enter] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Analyze  "));
    }

    spans.push(Span::styled("[q] ", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let scorer = ProfileScorer::liver_default()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let mut terminal = setup_terminal()?;
    let mut app = App::new(scorer);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        // Short ticks while pending so the progress caption animates; long
        // timeout when idle to avoid burning CPU.
        let timeout = if app.in_flight.is_some() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(200)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,

                    KeyCode::Tab | KeyCode::Down => app.focus_next(),
                    KeyCode::BackTab | KeyCode::Up => app.focus_prev(),

                    KeyCode::Left | KeyCode::Right if app.focus == GENDER_ROW => {
                        app.gender = app.gender.toggled();
                    }

                    KeyCode::Enter => app.start_analysis(),
                    KeyCode::Esc => app.cancel_analysis(),
                    KeyCode::Backspace => app.on_backspace(),
                    KeyCode::Char(c) => app.on_char(c),

                    _ => {}
                }
            }
        }

        // Complete the pending run once the processing window has elapsed.
        let due = app
            .in_flight
            .as_ref()
            .is_some_and(|pending| pending.started.elapsed() >= ANALYSIS_DELAY);
        if due {
            app.finish_analysis();
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use hepascore_contracts::assessment::RiskLevel;
    use hepascore_contracts::patient::PatientData;
    use hepascore_engine::ProfileScorer;

    use super::{App, F_AGE};

    fn app() -> App {
        App::new(ProfileScorer::liver_default().unwrap())
    }

    #[test]
    fn form_seeds_match_the_contract_defaults() {
        assert_eq!(app().snapshot(), PatientData::default());
    }

    #[test]
    fn edits_during_the_pending_window_do_not_affect_the_result() {
        let mut app = app();
        app.start_analysis();

        // Typed while the simulated processing window is still open; the
        // run must score the snapshot taken at trigger time.
        app.fields[F_AGE].buffer = "70".to_string();
        app.finish_analysis();

        let assessment = app.current.as_ref().unwrap();
        assert_eq!(assessment.patient.age, 45);
        assert_eq!(assessment.result.risk, RiskLevel::Low);
        assert!(assessment.result.risk_factors.is_empty());
    }

    #[test]
    fn cancel_discards_the_pending_run() {
        let mut app = app();
        app.start_analysis();
        app.cancel_analysis();
        app.finish_analysis();

        assert!(app.in_flight.is_none());
        assert!(app.current.is_none());
        assert!(app.history.is_empty());
    }

    #[test]
    fn retrigger_while_pending_keeps_the_original_snapshot() {
        let mut app = app();
        app.start_analysis();

        app.fields[F_AGE].buffer = "70".to_string();
        app.start_analysis();
        app.finish_analysis();

        let assessment = app.current.as_ref().unwrap();
        assert_eq!(assessment.patient.age, 45);
    }
}
