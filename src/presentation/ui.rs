use crate::application::{App, AppMode, Clock};
use crate::domain::Severity;
use crate::domain::dispatcher::classify;
use crate::presentation::pages::{Page, page_for};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 3;

pub fn render_ui<C: Clock>(f: &mut Frame, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let page = page_for(&app.view(), app.role());

    render_header(f, app, chunks[0]);
    render_page(f, app, &page, chunks[1]);
    render_status_bar(f, app, chunks[2]);
    render_toasts(f, app, chunks[1]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let header = Paragraph::new(format!(
        "paperdesk | {} | role: {} | {:?}",
        app.current_path(),
        app.role().label(),
        classify(app.current_path()),
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_page<C: Clock>(f: &mut Frame, app: &App<C>, page: &Page, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            page.summary.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];

    for (index, link) in page.links.iter().enumerate() {
        let style = if index == app.selected_link {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", link.label), style),
            Span::styled(format!("  {}", link.path), Style::default().fg(Color::DarkGray)),
        ]));
    }

    if !page.actions.is_empty() {
        lines.push(Line::from(""));
        for action in &page.actions {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}]", action.key), Style::default().fg(Color::Green)),
                Span::raw(format!(" {}", action.label)),
            ]));
        }
    }

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(page.title.clone()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(body, area);
}

/// Stacks live toasts in the top-right corner of `area`, oldest on top.
fn render_toasts<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let width = TOAST_WIDTH.min(area.width);
    let max_visible = (area.height / TOAST_HEIGHT) as usize;
    let toasts = app.toasts();

    for (slot, toast) in toasts.toasts().take(max_visible).enumerate() {
        let rect = Rect {
            x: area.x + area.width - width,
            y: area.y + slot as u16 * TOAST_HEIGHT,
            width,
            height: TOAST_HEIGHT,
        };
        let color = severity_color(toast.severity);
        let remaining = toasts
            .remaining(toast.id)
            .map(|d| format!(" {:.1}s", d.as_secs_f32()))
            .unwrap_or_default();

        f.render_widget(Clear, rect);
        let widget = Paragraph::new(toast.message.clone())
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!("{} {}{}", toast.severity, toast.id, remaining)),
            );
        f.render_widget(widget, rect);
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
    }
}

fn render_status_bar<C: Clock>(f: &mut Frame, app: &App<C>, area: Rect) {
    let input_text = match app.mode {
        AppMode::Browse => {
            "↑↓/jk: select | Enter: open | g: go to | t: toast | Bksp: dismiss | Ctrl+S: snapshot | ?: help | q: quit".to_string()
        }
        AppMode::GoTo => format!("Go to: {} (Enter to go, Esc to cancel)", app.input),
        AppMode::PostToast => format!("Toast <error|success|info> <message>: {} (Enter to post, Esc to cancel)", app.input),
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Browse => Style::default(),
            AppMode::GoTo => Style::default().fg(Color::Yellow),
            AppMode::PostToast => Style::default().fg(Color::Magenta),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("paperdesk help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"PAPERDESK NAVIGATION SHELL

=== PAGES ===
Each screen lists its links. Select one and press Enter to open it.
The header shows the current path, the active role and how the path
was classified.

=== ROLES ===
The active role only changes on these pages:
  /dashboard/researcher, /dashboard/pro-researcher,
  /dashboard/team-lead, /dashboard/admin   set that role
  /admin...                                 sets admin
  /, /login, /signup, /pricing, /faq,
  /features, /about, /blog, ...             reset to researcher
Everywhere else the role stays as it was.

=== TOASTS ===
Page actions (shown as [key] on a page) post notifications.
Notifications disappear on their own after a few seconds.
t               Post a toast: <error|success|info> <message>
Backspace/Esc   Dismiss the newest toast

=== KEYS ===
↑↓ or j/k       Select link
Enter           Open selected link
g or :          Go to a path
Home            Go to the landing page
PgUp/PgDn       Scroll the page
Ctrl+S          Export a session snapshot (JSON)
F1 or ?         Show this help
q               Quit"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{DEFAULT_TOAST_TTL, ManualClock, ToastManager};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App<ManualClock>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_page_and_toasts() {
        let clock = ManualClock::new();
        let mut app = App::with_toasts(ToastManager::with_clock(clock, DEFAULT_TOAST_TTL));
        app.navigate("/dashboard/team-lead");
        app.show_toast("Upload failed", Severity::Error);

        let text = screen_text(&app);
        assert!(text.contains("Team Lead dashboard"));
        assert!(text.contains("role: Team Lead"));
        assert!(text.contains("Upload failed"));
        assert!(text.contains("error #1"));
    }

    #[test]
    fn test_renders_help_popup() {
        let mut app = App::with_toasts(ToastManager::with_clock(
            ManualClock::new(),
            DEFAULT_TOAST_TTL,
        ));
        app.open_help();
        assert!(screen_text(&app).contains("paperdesk help"));
    }
}
