use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::history::history_render;
use crate::search::search_render::{self, FIND_BAR_HEIGHT};

use super::state::{App, Focus};

const DETAIL_HEIGHT: u16 = 7;

impl App {
    /// Render the whole panel: find bar, results table, detail pane,
    /// status line, and the history popup on top when open.
    pub fn render(&mut self, frame: &mut Frame) {
        let [find_area, results_area, detail_area, status_area] = Layout::vertical([
            Constraint::Length(FIND_BAR_HEIGHT),
            Constraint::Min(4),
            Constraint::Length(DETAIL_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        search_render::render_find_bar(self, frame, find_area);
        self.render_results(frame, results_area);
        self.render_detail(frame, detail_area);
        self.render_status(frame, status_area);

        history_render::render_history_popup(self, frame);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Results;

        let header = Row::new(
            ["#", "Name", "Track", "Sequence", "Project", "In", "Out"]
                .into_iter()
                .map(Cell::from),
        )
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .search
            .match_list()
            .indices()
            .iter()
            .enumerate()
            .filter_map(|(row_number, &index)| self.records.get(index).map(|r| (row_number, r)))
            .map(|(row_number, record)| {
                Row::new(vec![
                    Cell::from((row_number + 1).to_string()),
                    Cell::from(format!("{} ({})", record.shot_name, record.clip_name)),
                    Cell::from(record.track.clone()),
                    Cell::from(record.sequence.clone()),
                    Cell::from(record.project.clone()),
                    Cell::from(record.timeline_in.to_string()),
                    Cell::from(record.timeline_out.to_string()),
                ])
            })
            .collect();

        let border_color = if focused { Color::LightMagenta } else { Color::DarkGray };

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(24),
                Constraint::Length(10),
                Constraint::Length(14),
                Constraint::Length(14),
                Constraint::Length(8),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Results ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_stateful_widget(table, area, &mut self.table);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(record) = self.current_record() {
            let media = match (&record.media_path, record.media_online) {
                (Some(path), true) => format!("{} (OK)", path),
                (Some(path), false) => format!("{} (OFF)", path),
                (None, _) => "(no media)".to_string(),
            };

            lines.push(detail_line("Shot", &record.shot_name));
            lines.push(detail_line("Clip", &record.clip_name));
            lines.push(detail_line("Media", &media));
            lines.push(detail_line(
                "Range",
                &format!("{} - {}", record.timeline_in, record.timeline_out),
            ));

            if !record.shot_metadata.is_empty() || !record.clip_metadata.is_empty() {
                let rendered: Vec<String> = record
                    .shot_metadata
                    .iter()
                    .chain(record.clip_metadata.iter())
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect();
                lines.push(detail_line("Metadata", &rendered.join(", ")));
            }

            if !record.tags.is_empty() {
                let rendered: Vec<String> = record
                    .tags
                    .iter()
                    .map(|t| {
                        if t.note.is_empty() {
                            t.name.clone()
                        } else {
                            format!("{} ({})", t.name, t.note)
                        }
                    })
                    .collect();
                lines.push(detail_line("Tags", &rendered.join(", ")));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "No current match",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shot ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = " Tab focus | C-r regex | C-t scope | C-g case | C-w reach | C-p recent ";

        let [message_area, hints_area] = Layout::horizontal([
            Constraint::Min(10),
            Constraint::Length(hints.len() as u16),
        ])
        .areas(area);

        let message = Paragraph::new(Line::from(Span::styled(
            self.status.message(),
            Style::default().fg(self.status.kind().color()),
        )));
        frame.render_widget(message, message_area);

        let hints = Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(hints, hints_area);
    }
}

fn detail_line<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:>9}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(width: u16, height: u16, app: &mut crate::app::App) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_full_frame_renders_results_and_status() {
        let mut app = test_app();
        app.search.set_pattern("Shot");
        app.run_search();

        let output = render_to_string(120, 30, &mut app);
        assert!(output.contains("Shot010 (A001)"));
        assert!(output.contains("Shot030 (B002)"));
        assert!(output.contains("cut01"));
        assert!(output.contains("1 of 3 matches"));
        assert!(output.contains("Results"));
    }

    #[test]
    fn test_detail_pane_shows_current_match() {
        let mut app = test_app();
        app.search.set_pattern("Shot030");
        app.run_search();

        let output = render_to_string(120, 30, &mut app);
        assert!(output.contains("/media/plates/B002.mov (OK)"));
        assert!(output.contains("Review (needs regrade)"));
    }

    #[test]
    fn test_empty_panel_shows_ready_status() {
        let mut app = test_app();
        let output = render_to_string(120, 30, &mut app);
        assert!(output.contains("Ready"));
        assert!(output.contains("No current match"));
    }
}
