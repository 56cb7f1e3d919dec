//! The picker body: search line, match counter and the grouped result list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use kaopick_core::{FilterResult, Locales, Navigation};

use super::visible_window;

/// One display row of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A localized category path, shown above the first entry of each group.
    Header(String),
    /// A kaomoji; `selected` marks the highlighted one.
    Entry { text: String, selected: bool },
}

/// Display label for a category path, e.g. `Positive › Joy`.
pub fn group_label(path: &[String], locales: &Locales) -> String {
    path.iter()
        .map(|segment| locales.category_label(segment))
        .collect::<Vec<_>>()
        .join(" › ")
}

/// Flattens the filter result into display rows.
///
/// Returns the rows together with the row index of the highlighted entry.
pub fn build_rows(
    result: &FilterResult<'_>,
    cursor: Option<usize>,
    locales: &Locales,
    show_headers: bool,
) -> (Vec<Row>, Option<usize>) {
    let mut rows = Vec::with_capacity(result.len() + 8);
    let mut selected_row = None;

    for group in result.groups() {
        if show_headers {
            rows.push(Row::Header(group_label(group.path(), locales)));
        }
        for (offset, entry) in group.entries().iter().enumerate() {
            let selected = cursor == Some(group.start() + offset);
            if selected {
                selected_row = Some(rows.len());
            }
            rows.push(Row::Entry {
                text: entry.text().to_string(),
                selected,
            });
        }
    }

    (rows, selected_row)
}

fn row_line(row: &Row) -> Line<'_> {
    match row {
        Row::Header(label) => Line::from(Span::styled(
            label.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Row::Entry { text, selected } => {
            let (marker, style) = if *selected {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(text.as_str(), style),
            ])
        }
    }
}

/// Renders the picker into `area`.
pub fn render_picker(
    f: &mut Frame,
    area: Rect,
    nav: &Navigation<'_>,
    total: usize,
    locales: &Locales,
    show_headers: bool,
    show_counts: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(locales.t("window_title").to_owned())
        .border_style(Style::default().fg(Color::Cyan));
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    // Split: input line (1) + counter (1) + list (rest)
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner_area);

    let input_line = Line::from(vec![
        Span::styled(
            format!("{}: ", locales.t("search_prompt")),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(nav.query()),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(input_line), layout[0]);

    if show_counts {
        let shown = nav.result().len().to_string();
        let total = total.to_string();
        let counter = Line::from(Span::styled(
            locales.format("match_count", &[("shown", &shown), ("total", &total)]),
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(counter), layout[1]);
    }

    if nav.result().is_empty() {
        let empty = Line::from(Span::styled(
            locales.t("no_matches"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        f.render_widget(Paragraph::new(empty), layout[2]);
        return;
    }

    let (rows, selected_row) = build_rows(nav.result(), nav.cursor(), locales, show_headers);
    let list_height = layout[2].height as usize;
    let (win_start, win_end) = visible_window(selected_row.unwrap_or(0), rows.len(), list_height);

    let lines: Vec<Line> = rows[win_start..win_end].iter().map(row_line).collect();
    f.render_widget(Paragraph::new(lines), layout[2]);
}
