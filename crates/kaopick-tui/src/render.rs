use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppMode};
use crate::ui::picker::render_picker;
use crate::ui::popup::render_popup;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function: composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App<'_>) {
    let locales = app.locales();
    let ui = &app.config().ui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    render_picker(
        f,
        chunks[0],
        app.nav(),
        app.catalog().len(),
        locales,
        ui.show_category_headers,
        ui.show_counts,
    );

    let props = StatusBarProps {
        match_count: app.nav().result().len(),
        cursor: app.nav().cursor(),
        status_message: app.status_message(),
        hint: locales.t("hint"),
    };
    render_statusbar(f, chunks[1], &props);

    if let AppMode::Notice(message) = app.mode() {
        let lines = vec![
            message.clone(),
            String::new(),
            locales.t("notice_dismiss").to_owned(),
        ];
        render_popup(f, locales.t("notice_title"), &lines);
    }
}
