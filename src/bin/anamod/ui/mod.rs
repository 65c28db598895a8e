//! Terminal preview of the comparison grid.
//!
//! Renders the same 3x2 layout the plotting collaborator produces (AM
//! column on the left, FM column on the right, original at the top left)
//! as ratatui charts over the first preview window of each signal.

mod charts;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};

use anamod::pipeline::PipelineRun;

use charts::render_signal;

/// Show the grid until the user presses q or Esc.
pub fn preview(run: &PipelineRun) -> EyreResult<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, run);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, run: &PipelineRun) -> EyreResult<()> {
    loop {
        terminal.draw(|frame| render(frame, run))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }
    }
}

fn render(frame: &mut Frame, run: &PipelineRun) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let mut cells: Vec<Rect> = Vec::with_capacity(6);
    for row in rows.iter() {
        let pair = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row);
        cells.extend(pair.iter().copied());
    }

    let am = run.am.as_ref().ok();
    let fm = run.fm.as_ref().ok();

    render_signal(frame, cells[0], "Original Audio Signal", Some(run.original.as_slice()));
    render_signal(frame, cells[1], "FM Modulated Signal", fm.map(|b| b.modulated.as_slice()));
    render_signal(frame, cells[2], "AM Modulated Signal", am.map(|b| b.modulated.as_slice()));
    render_signal(frame, cells[3], "FM Demodulated Signal", fm.map(|b| b.demodulated.as_slice()));
    render_signal(frame, cells[4], "AM Demodulated Signal", am.map(|b| b.demodulated.as_slice()));

    let help = Paragraph::new(" [Q] Quit").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, cells[5]);
}
