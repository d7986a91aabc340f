//! Login screen view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{LoginField, LoginScreen};

const FORM_WIDTH: u16 = 46;
const FORM_HEIGHT: u16 = 12;
const LABEL_WIDTH: u16 = 10;

/// Renders the login screen centered in `area`.
pub fn render_login(frame: &mut Frame, screen: &LoginScreen, area: Rect) {
    let form = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);

    let block = Block::default()
        .title(" Relay login ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form);

    let inner = Rect::new(
        form.x + 2,
        form.y + 1,
        form.width.saturating_sub(4),
        form.height.saturating_sub(2),
    );

    let masked = "*".repeat(screen.password.value().chars().count());
    let checkbox = if screen.remember { "[x]" } else { "[ ]" };
    let submit_style = if screen.focus == LoginField::Submit {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut lines = vec![
        field_line("Username", screen.username.value(), screen.focus == LoginField::Username),
        Line::from(""),
        field_line("Password", &masked, screen.focus == LoginField::Password),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{checkbox} Remember me"),
                focus_style(screen.focus == LoginField::Remember),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("  [ Sign in ]", submit_style)),
        Line::from(""),
    ];

    lines.push(footer_line(screen));

    frame.render_widget(Paragraph::new(lines), inner);

    // Place the hardware cursor inside the focused text field. The password
    // renders masked, so its cursor column is the char count, not the
    // display width of the real value.
    match screen.focus {
        LoginField::Username => {
            let prefix: String = screen
                .username
                .value()
                .chars()
                .take(screen.username.cursor())
                .collect();
            set_field_cursor(frame, inner, 0, prefix.width() as u16);
        }
        LoginField::Password => {
            set_field_cursor(frame, inner, 2, screen.password.cursor() as u16);
        }
        LoginField::Remember | LoginField::Submit => {}
    }
}

/// The line under the form: status message, in-flight indicator, or key hint.
///
/// A status message outranks the in-flight indicator: with overlapping
/// submits, a rejection from the first completion must not hide behind the
/// second request's spinner until it expires.
fn footer_line(screen: &LoginScreen) -> Line<'static> {
    if let Some(status) = &screen.status {
        Line::from(Span::styled(
            status.text.clone(),
            Style::default().fg(Color::Red),
        ))
    } else if screen.in_flight > 0 {
        Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Tab to move, Enter to sign in, Esc to quit",
            Style::default().fg(Color::DarkGray),
        ))
    }
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH as usize),
            Style::default().fg(Color::White),
        ),
        Span::styled(value.to_string(), focus_style(focused)),
    ])
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn set_field_cursor(frame: &mut Frame, inner: Rect, row: u16, col: u16) {
    let x = inner.x + LABEL_WIDTH + col;
    frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + row));
}

/// Centers a `width` x `height` rect inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use relay_core::prefs::LoginPrefs;

    use super::*;
    use crate::common::StatusMessage;
    use crate::features::login::MSG_INVALID_LOGIN;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_footer_shows_status_over_in_flight_indicator() {
        let mut screen = LoginScreen::from_prefs(&LoginPrefs::default());
        screen.in_flight = 1;
        screen.status = Some(StatusMessage::new(
            MSG_INVALID_LOGIN,
            Duration::from_secs(10),
        ));

        assert_eq!(line_text(&footer_line(&screen)), MSG_INVALID_LOGIN);
    }

    #[test]
    fn test_footer_shows_in_flight_indicator_without_status() {
        let mut screen = LoginScreen::from_prefs(&LoginPrefs::default());
        screen.in_flight = 1;

        assert_eq!(line_text(&footer_line(&screen)), "Signing in...");
    }

    #[test]
    fn test_footer_shows_hint_when_idle() {
        let screen = LoginScreen::from_prefs(&LoginPrefs::default());

        assert!(line_text(&footer_line(&screen)).contains("Enter to sign in"));
    }
}
