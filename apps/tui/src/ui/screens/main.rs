use crate::app::{App, Focus};
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use crate::ui::widgets::tables::tail_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ITEMS_HEADER: &str = "Items";
pub const INPUT_PLACEHOLDER: &str = "Add item...";
pub const ADD_LABEL: &str = "Add";
pub const REMOVE_ALL_LABEL: &str = "Remove all";

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Item table
            Constraint::Length(3), // Input row
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_item_table(app, f, main_layout[0]);
    render_input_row(app, f, main_layout[1]);
    render_shortcuts(app, f, main_layout[2]);

    if app.show_help {
        render_help_popup(f);
    }
}

fn render_item_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let entries = app.controller().entries();

    let header = Row::new(vec![Cell::from(ITEMS_HEADER)]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    // Borders and header take three rows
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = tail_offset(entries.len(), max_visible_rows);

    let rows = entries
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .map(|entry| Row::new(vec![Cell::from(entry.as_str())]));

    let table = Table::new(rows, [Constraint::Percentage(100)])
        .header(header)
        .block(
            Block::default()
                .title(format!(" {} ({}) ", app.title, entries.len()))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(table, area);
}

fn render_input_row(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(9),
            Constraint::Length(14),
        ])
        .split(area);

    render_input_field(app, f, chunks[0]);

    let can_submit = app.controller().can_submit();
    render_button(
        f,
        chunks[1],
        ADD_LABEL,
        button_style(app.focus == Focus::AddButton, can_submit),
    );
    render_button(
        f,
        chunks[2],
        REMOVE_ALL_LABEL,
        button_style(app.focus == Focus::RemoveAll, true),
    );
}

fn render_input_field(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.focus == Focus::Input;
    let border_color = if focused { Color::Green } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    let draft = app.controller().draft();
    let width = inner.width as usize;
    let (visible, cursor_col) = visible_tail(draft, width);

    let line = if draft.is_empty() {
        TextLine::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        TextLine::from(Span::styled(visible, Style::default().fg(Color::White)))
    };

    f.render_widget(Paragraph::new(line).block(block), area);

    if focused && !app.show_help && inner.width > 0 {
        let x = inner
            .x
            .saturating_add(u16::try_from(cursor_col).unwrap_or(inner.width - 1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

/// Returns the part of `text` that fits in `width` columns, keeping the end
/// visible, and the column the cursor should sit on.
fn visible_tail(text: &str, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", 0);
    }

    // One column stays free for the cursor
    let mut used = text.width();
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if used < width {
            break;
        }
        used -= ch.width().unwrap_or(0);
        start = index + ch.len_utf8();
    }

    (&text[start..], used)
}

fn button_style(focused: bool, enabled: bool) -> Style {
    if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}

fn render_button(f: &mut Frame<'_>, area: Rect, label: &str, style: Style) {
    let block = Block::default().borders(Borders::ALL).border_style(style);
    let button = Paragraph::new(Text::from(Span::styled(label.to_string(), style)))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(button, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let hint = TextLine::from(vec![
        Span::styled("Enter", key_style),
        Span::raw(": Activate   "),
        Span::styled("Tab", key_style),
        Span::raw(": Next control   "),
        Span::styled("F1", key_style),
        Span::raw(": Help   "),
        Span::styled("Esc", key_style),
        Span::raw(": Quit   "),
        Span::styled(
            format!("[{}]", app.focus.label()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    f.render_widget(
        Paragraph::new(hint).alignment(Alignment::Center),
        area,
    );
}

fn render_help_popup(f: &mut Frame<'_>) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let help_line = |key: &'static str, text: &'static str| {
        TextLine::from(vec![Span::styled(format!("{key:<10}"), key_style), Span::raw(text)])
    };

    let lines = vec![
        help_line("Type", "Edit the new item"),
        help_line("Enter", "Add item / press focused control"),
        help_line("Space", "Press the focused button"),
        help_line("Tab", "Next control"),
        help_line("Shift+Tab", "Previous control"),
        help_line("F1", "Toggle this help"),
        help_line("Esc", "Close help / quit"),
        help_line("Ctrl+C", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Blank items are not added.",
            Style::default().fg(Color::Gray),
        )),
    ];

    // Sized to the content so no line wraps out of view
    let content_width = lines.iter().map(TextLine::width).max().unwrap_or(0);
    let width = u16::try_from(content_width + 2).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(width, height, f.area());
    f.render_widget(ClearWidget, area);

    let popup = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(popup, area);
}
