use crate::app::{App, Phase};
use crate::braille::BrailleCanvas;
use crate::rules::ALL_TYPES;
use crate::run::{World, TOTAL_TICKS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 22;

// UI color scheme
const BORDER_COLOR: Color = Color::Cyan;
const HIGHLIGHT_COLOR: Color = Color::Yellow;
const TEXT_COLOR: Color = Color::White;
const DIM_TEXT_COLOR: Color = Color::Gray;

/// Creates a standard styled block with rounded borders
fn styled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(title)
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_sidebar(frame, layout[0], app);
    render_worlds(frame, layout[1], app);
}

/// Character area available to one world canvas (inside its panel
/// borders) for a given frame size. All four panels share it.
pub fn world_canvas_size(frame_area: Rect) -> (u16, u16) {
    let grid_width = frame_area.width.saturating_sub(SIDEBAR_WIDTH);
    let cols = (grid_width / 2).saturating_sub(2);
    let rows = (frame_area.height / 2).saturating_sub(2);
    (cols.max(1), rows.max(1))
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Status
            Constraint::Min(10),   // Per-world rules and results
        ])
        .split(area);

    render_status_box(frame, sections[0], app);
    render_worlds_box(frame, sections[1], app);
}

fn render_status_box(frame: &mut Frame, area: Rect, app: &App) {
    let block = styled_block(" Particle Life ");

    let progress = app.run.tick() as f32 / TOTAL_TICKS as f32;
    let progress_width = (area.width.saturating_sub(4)) as usize;
    let filled = (progress * progress_width as f32) as usize;
    let empty = progress_width.saturating_sub(filled);

    let phase = app.phase();
    let phase_color = match phase {
        Phase::Warmup => BORDER_COLOR,
        Phase::Sampling => HIGHLIGHT_COLOR,
        Phase::Done => Color::Green,
    };

    let worlds = app.run.worlds();
    let population = worlds.first().map_or(0, |w| w.sim.particles().len());

    let content = vec![
        Line::from(Span::styled(
            format!("tick {} / {}", app.run.tick(), TOTAL_TICKS),
            Style::default().fg(TEXT_COLOR),
        )),
        Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
            Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(phase.name(), Style::default().fg(phase_color))),
        Line::from(Span::styled(
            format!("{} x {} particles", worlds.len(), population),
            Style::default().fg(DIM_TEXT_COLOR),
        )),
    ];

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

/// One section per world: its rule matrix (rows are the acting type,
/// marked with a dot in that type's color; entries are colored by the
/// type they act on) and, once sampling is over, its results.
fn render_worlds_box(frame: &mut Frame, area: Rect, app: &App) {
    let block = styled_block(" Worlds ");

    let mut content: Vec<Line> = Vec::new();
    for (index, world) in app.run.worlds().iter().enumerate() {
        content.push(Line::from(Span::styled(
            format!("world {}", index + 1),
            Style::default().fg(TEXT_COLOR),
        )));

        let rules = world.sim.rules();
        for &acting in &ALL_TYPES {
            let mut spans = vec![Span::styled("●", Style::default().fg(acting.color()))];
            for (i, &other) in ALL_TYPES.iter().enumerate() {
                let text = if i == 0 {
                    fmt_rule(rules.get(acting, other))
                } else {
                    format!(" {}", fmt_rule(rules.get(acting, other)))
                };
                spans.push(Span::styled(text, Style::default().fg(other.color())));
            }
            content.push(Line::from(spans));
        }

        if let Some(report) = world.sim.report() {
            content.push(Line::from(vec![
                Span::styled("mean ", Style::default().fg(DIM_TEXT_COLOR)),
                Span::styled(format!("{:.0}", report.mean), Style::default().fg(TEXT_COLOR)),
            ]));
            content.push(Line::from(vec![
                Span::styled("VAR  ", Style::default().fg(DIM_TEXT_COLOR)),
                Span::styled(
                    format!("{:.0}", report.std_dev),
                    Style::default().fg(TEXT_COLOR),
                ),
            ]));
        }
        content.push(Line::from(""));
    }

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}

/// Compact signed coefficient: "+.12", "-.50".
fn fmt_rule(value: f32) -> String {
    format!("{:+.2}", value).replace("0.", ".")
}

fn render_worlds(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut panels: Vec<Rect> = Vec::with_capacity(4);
    for row in rows.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        panels.extend(cols.iter().copied());
    }

    for (index, (world, panel)) in app.run.worlds().iter().zip(panels.iter()).enumerate() {
        render_world_panel(frame, *panel, index, world);
    }
}

fn render_world_panel(frame: &mut Frame, area: Rect, index: usize, world: &World<BrailleCanvas>) {
    let title = format!(" world {} ", index + 1);
    let block = styled_block(&title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for cell in world.surface.cells() {
        if cell.x < inner.width && cell.y < inner.height {
            let cell_rect = Rect {
                x: inner.x + cell.x,
                y: inner.y + cell.y,
                width: 1,
                height: 1,
            };
            let span = Span::styled(cell.char.to_string(), Style::default().fg(cell.color));
            let paragraph = Paragraph::new(Line::from(span));
            frame.render_widget(paragraph, cell_rect);
        }
    }
}
