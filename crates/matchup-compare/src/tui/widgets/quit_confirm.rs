// Modal overlay shown while `ViewState::confirm_quit` is set. Everything
// underneath stays rendered; only the dialog area is cleared.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 32;
const DIALOG_HEIGHT: u16 = 5;

/// Draw the quit confirmation dialog over the given area.
pub fn render(frame: &mut Frame, area: Rect) {
    let dialog = centered(DIALOG_WIDTH, DIALOG_HEIGHT, area);

    frame.render_widget(Clear, dialog);

    let title = Span::styled(
        " Quit? ",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let prompt = Line::from(vec![
        Span::raw("Quit the dashboard? ("),
        Span::styled(
            "y",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("/"),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(")"),
    ]);

    let body = Paragraph::new(prompt)
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(title),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(body, dialog);
}

/// Center a `width` x `height` box inside `area`, shrinking it when the
/// terminal is smaller than the dialog.
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
