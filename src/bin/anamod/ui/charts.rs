//! Single-signal chart panel.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use anamod::PREVIEW_SAMPLES;

/// Render one amplitude-vs-sample-index chart, or a failure note when the
/// branch produced nothing.
pub fn render_signal(frame: &mut Frame, area: Rect, title: &str, samples: Option<&[f32]>) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);

    let Some(samples) = samples else {
        let note = Paragraph::new("branch failed, no signal")
            .style(Style::default().fg(Color::Red))
            .block(block);
        frame.render_widget(note, area);
        return;
    };

    let window = &samples[..samples.len().min(PREVIEW_SAMPLES)];
    let data: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64, sample as f64))
        .collect();

    // Modulated AM swings past unity, so size the y axis to the signal.
    let bound = window
        .iter()
        .fold(1.0f64, |m, &s| m.max(s.abs() as f64));

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, window.len().max(1) as f64])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-bound, bound])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
