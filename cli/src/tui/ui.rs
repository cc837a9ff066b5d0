use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};
use tasklist_core::DashboardView;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let view = app.view();
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Form
            Constraint::Length(1), // Counters
            Constraint::Min(1),    // Tasks
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new(app.labels.title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_form(f, app, &view, main_chunks[1]);
    draw_counters(f, app, &view, main_chunks[2]);

    if view.is_empty {
        draw_empty_state(f, app, main_chunks[3]);
    } else {
        draw_task_list(f, app, &view, main_chunks[3]);
    }

    let footer = match app.validation {
        Some(message) => Paragraph::new(message)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        None => {
            let help = match app.input_mode {
                InputMode::Editing => app.labels.help_editing,
                InputMode::Normal => app.labels.help_normal,
            };
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray))
        }
    };
    f.render_widget(footer.alignment(Alignment::Center), main_chunks[4]);
}

fn draw_form(f: &mut Frame, app: &App, view: &DashboardView, area: Rect) {
    let submit_width = app.labels.submit.width() as u16 + 6;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(submit_width)])
        .split(area);

    let editing = app.input_mode == InputMode::Editing;
    let border_style = if app.validation.is_some() {
        Style::default().fg(Color::Red)
    } else if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let input_area = chunks[0];
    let inner_width = input_area.width.saturating_sub(2);
    let cursor_x = view
        .pending_input
        .chars()
        .take(app.cursor_position)
        .collect::<String>()
        .width() as u16;
    let scroll = cursor_x.saturating_sub(inner_width.saturating_sub(1));

    let input = if view.pending_input.is_empty() {
        Paragraph::new(Span::styled(app.labels.placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Paragraph::new(view.pending_input.as_str()).scroll((0, scroll))
    };
    let input = input.block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    f.render_widget(input, input_area);

    if editing {
        f.set_cursor_position((input_area.x + 1 + cursor_x - scroll, input_area.y + 1));
    }

    let button_style = if view.can_submit {
        Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(format!("{} +", app.labels.submit))
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(button, chunks[1]);
}

fn draw_counters(f: &mut Frame, app: &App, view: &DashboardView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let created = Paragraph::new(Line::from(vec![
        Span::styled(app.labels.created, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", view.total_count),
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left);

    let completed = Paragraph::new(Line::from(vec![
        Span::styled(app.labels.completed, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", view.completed_summary),
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);

    f.render_widget(created, chunks[0]);
    f.render_widget(completed, chunks[1]);
}

fn draw_empty_state(f: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(app.labels.empty_title, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(app.labels.empty_hint),
    ];
    let empty = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(empty, area);
}

fn draw_task_list(f: &mut Frame, app: &mut App, view: &DashboardView, area: Rect) {
    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let (check, check_style, text_style) = if row.completed {
                (
                    "[✔]",
                    Style::default().fg(Color::Magenta),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ]", Style::default().fg(Color::Cyan), Style::default())
            };

            Row::new(vec![
                Span::styled(check, check_style),
                Span::styled(row.text.clone(), text_style),
                Span::styled("✖", Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3), // Toggle
            Constraint::Min(10),   // Text
            Constraint::Length(1), // Delete
        ],
    )
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, buffer::Cell, Terminal};
    use tasklist_core::{Labels, Locale};

    fn render_buffer(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &mut App) -> String {
        let buffer = render_buffer(app);
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn pt_app() -> App {
        App::new(Labels::for_locale(Locale::PtBr))
    }

    #[test]
    fn test_empty_state() {
        let mut app = pt_app();
        let screen = render(&mut app);
        assert!(screen.contains("Lista de tarefas"));
        assert!(screen.contains("Adicione uma nova tarefa"));
        assert!(screen.contains("Criar"));
        assert!(screen.contains("Tarefas criadas  0"));
        assert!(screen.contains("Concluídas  0"));
        assert!(screen.contains("Você ainda não tem tarefas cadastradas"));
        assert!(screen.contains("Crie tarefas e organize seus itens a fazer"));
    }

    #[test]
    fn test_rows_and_summary() {
        let mut app = pt_app();
        app.seed(&["Buy milk".to_string(), "Walk dog".to_string()]);
        let milk = app.store.tasks()[0].id;
        app.store.toggle_task(&milk);

        let screen = render(&mut app);
        assert!(screen.contains("Tarefas criadas  2"));
        assert!(screen.contains("1 de 2"));
        assert!(screen.contains("[✔]"));
        assert!(screen.contains("[ ]"));
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("Walk dog"));
        assert!(!screen.contains("Você ainda não tem tarefas"));

        let milk_line = screen.lines().position(|l| l.contains("Buy milk")).unwrap();
        let dog_line = screen.lines().position(|l| l.contains("Walk dog")).unwrap();
        assert!(milk_line < dog_line);
    }

    #[test]
    fn test_required_message_in_footer() {
        let mut app = pt_app();
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let screen = render(&mut app);
        assert!(screen.contains("Esse campo é obrigatório"));
    }

    #[test]
    fn test_pending_input_replaces_placeholder() {
        let mut app = pt_app();
        for c in "Comprar pão".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let screen = render(&mut app);
        assert!(screen.contains("Comprar pão"));
        assert!(!screen.contains("Adicione uma nova tarefa"));
    }

    #[test]
    fn test_english_labels() {
        let mut app = App::new(Labels::for_locale(Locale::En));
        app.seed(&["Walk dog".to_string()]);
        let screen = render(&mut app);
        assert!(screen.contains("Created tasks"));
        assert!(screen.contains("0 of 1"));
        assert!(screen.contains("Create"));
    }

    /// Cells spelling `needle` on the first row that contains it.
    fn find_cells<'a>(buffer: &'a Buffer, needle: &str) -> Vec<&'a Cell> {
        let width = buffer.area.width as usize;
        let len = needle.chars().count();
        for line in buffer.content.chunks(width) {
            for start in 0..=width.saturating_sub(len) {
                let cells = &line[start..start + len];
                let text: String = cells.iter().map(|c| c.symbol()).collect();
                if text == needle {
                    return cells.iter().collect();
                }
            }
        }
        panic!("{:?} not rendered", needle);
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_submit_button_dimmed_until_input_has_text() {
        let mut app = pt_app();
        let buffer = render_buffer(&mut app);
        for cell in find_cells(&buffer, "Criar") {
            assert_eq!(cell.fg, Color::DarkGray);
            assert_eq!(cell.bg, Color::Reset);
        }

        type_str(&mut app, "   ");
        let buffer = render_buffer(&mut app);
        for cell in find_cells(&buffer, "Criar") {
            assert_eq!(cell.fg, Color::DarkGray);
            assert_eq!(cell.bg, Color::Reset);
        }

        type_str(&mut app, "Buy milk");
        let buffer = render_buffer(&mut app);
        for cell in find_cells(&buffer, "Criar") {
            assert_eq!(cell.fg, Color::White);
            assert_eq!(cell.bg, Color::Blue);
        }
    }
}
