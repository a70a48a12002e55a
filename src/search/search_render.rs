use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

pub const FIND_BAR_HEIGHT: u16 = 3;

/// Render the find bar: pattern input, option indicators, match counter.
pub fn render_find_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let match_count = app.search.match_count_display();
    let is_confirmed = app.search.is_confirmed();
    let focused = app.focus == Focus::FindBar;

    let border_color = if !focused {
        Color::DarkGray
    } else if is_confirmed {
        Color::Gray
    } else {
        Color::LightMagenta
    };

    let match_count_style = if app.search.match_list().is_empty() && !app.search.pattern().is_empty()
    {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };

    let title = if is_confirmed {
        " Find (Enter: next, Shift+Enter: previous): "
    } else {
        " Find: "
    };

    let options = format!(
        " {} | {} | {} | {} ",
        app.search.scope().label(),
        if app.search.use_regex() { "regex" } else { "plain" },
        if app.search.case_sensitive() {
            "case"
        } else {
            "ignore case"
        },
        app.reach.label(),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_top(
            Line::from(Span::styled(
                format!(" {} ", match_count),
                match_count_style,
            ))
            .alignment(Alignment::Right),
        )
        .title_bottom(
            Line::from(Span::styled(options, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let search_textarea = app.search.search_textarea_mut();
    search_textarea.set_style(Style::default().fg(Color::White));
    search_textarea.set_cursor_line_style(Style::default());

    if focused && !is_confirmed {
        search_textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        search_textarea.set_cursor_style(Style::default());
    }

    frame.render_widget(&*search_textarea, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(app: &mut App) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_find_bar(app, frame, area);
            })
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_bar_shows_pattern_and_counter() {
        let mut app = test_app();
        app.search.set_pattern("Shot02");
        app.run_search();

        let output = render_to_string(&mut app);
        assert!(output.contains("Shot02"));
        assert!(output.contains("(1/1)"));
    }

    #[test]
    fn test_bar_shows_option_indicators() {
        let mut app = test_app();
        app.search.toggle_regex();
        app.search.toggle_case_sensitive();

        let output = render_to_string(&mut app);
        assert!(output.contains("regex"));
        assert!(output.contains("ignore case"));
        assert!(output.contains("All"));
    }

    #[test]
    fn test_confirmed_bar_shows_navigation_hint() {
        let mut app = test_app();
        app.search.set_pattern("Shot");
        app.run_search();
        app.search.confirm();

        let output = render_to_string(&mut app);
        assert!(output.contains("Enter: next"));
    }
}
