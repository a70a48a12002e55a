use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::app::App;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 46;

/// Render the recent-search popup over the main UI.
pub fn render_history_popup(app: &mut App, frame: &mut Frame) {
    if !app.history.is_visible() {
        return;
    }

    let entries: Vec<(usize, String)> = app
        .history
        .visible_entries()
        .map(|(idx, entry)| (idx, entry.to_string()))
        .collect();

    // Entries + filter line + borders.
    let height = entries.len().max(1) as u16 + 4;
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent Searches ")
        .border_style(Style::default().fg(Color::LightMagenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [filter_area, list_area] = ratatui::layout::Layout::vertical([
        ratatui::layout::Constraint::Length(1),
        ratatui::layout::Constraint::Min(1),
    ])
    .areas(inner);

    let filter_textarea = app.history.filter_textarea_mut();
    filter_textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(&*filter_textarea, filter_area);

    let selected = app.history.selected_index();
    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "(no recent searches)",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        entries
            .iter()
            .map(|(idx, entry)| {
                let style = if *idx == selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(Span::styled(entry.clone(), style)))
            })
            .collect()
    };

    frame.render_widget(List::new(items), list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_popup_lists_entries() {
        let mut app = test_app();
        app.history.record("approved");
        app.history.record("Shot02");
        app.history.open();

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_history_popup(&mut app, frame))
            .unwrap();

        let output = terminal.backend().to_string();
        assert!(output.contains("Recent Searches"));
        assert!(output.contains("Shot02"));
        assert!(output.contains("approved"));
    }

    #[test]
    fn test_closed_popup_renders_nothing() {
        let mut app = test_app();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_history_popup(&mut app, frame))
            .unwrap();

        let output = terminal.backend().to_string();
        assert!(!output.contains("Recent Searches"));
    }
}
