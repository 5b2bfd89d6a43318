use crate::diary_entry::{DiaryEntry, EntryStatus};
use crate::diary_store::DiaryStore;
use crate::projects::{self, Project, ProjectCategory, ProjectFilter};
use crate::skills::SKILLS;
use crate::validation;
use chrono::{Datelike, NaiveDate};
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use std::io::{stdout, Stdout};

pub enum Action {
    AddEntry,
    DeleteEntry,
    Projects,
    Skills,
    Contact,
    Quit,
}

/// Validated form output handed to the store.
pub struct EntryDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub status: EntryStatus,
}

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    notification: Option<String>,
}

impl UI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI {
            terminal,
            notification: None,
        })
    }

    /// Transient success banner, shown until the next user action.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
    }

    pub fn display(&mut self, store: &DiaryStore) -> Result<()> {
        let stats = store.stats();
        let percent = store.progress_percent();
        let entries = store.sorted_for_display();
        let notification = self.notification.clone();

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(3),
                        Constraint::Length(5),
                        Constraint::Length(3),
                        Constraint::Min(5),
                        Constraint::Length(1),
                        Constraint::Length(3),
                    ]
                    .as_ref(),
                )
                .split(f.area());

            let title = Paragraph::new("Дневник обучения")
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            f.render_widget(title, chunks[0]);

            let cards = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(
                    [
                        Constraint::Percentage(33),
                        Constraint::Percentage(34),
                        Constraint::Percentage(33),
                    ]
                    .as_ref(),
                )
                .split(chunks[1]);

            let card = |value: usize, label: &str, color: Color| {
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        value.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(label.to_string()),
                ])
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL))
            };
            f.render_widget(card(stats.total, "Всего задач", Color::Blue), cards[0]);
            f.render_widget(card(stats.completed, "Завершено", Color::Green), cards[1]);
            f.render_widget(
                card(stats.in_progress, "В процессе", Color::Yellow),
                cards[2],
            );

            let progress = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Общий прогресс обучения"),
                )
                .gauge_style(Style::default().fg(Color::Green))
                .percent(percent)
                .label(format!("{percent}%"));
            f.render_widget(progress, chunks[2]);

            if entries.is_empty() {
                let empty = Paragraph::new("Записей пока нет. Добавьте первую запись!")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).title("Записи"));
                f.render_widget(empty, chunks[3]);
            } else {
                let items: Vec<ListItem> = entries.iter().map(entry_list_item).collect();
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title("Записи"));
                f.render_widget(list, chunks[3]);
            }

            if let Some(message) = &notification {
                let banner = Paragraph::new(message.clone())
                    .style(Style::default().fg(Color::Green))
                    .alignment(Alignment::Center);
                f.render_widget(banner, chunks[4]);
            }

            let controls = Line::from(vec![
                Span::raw("Нажмите "),
                Span::styled("a", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" — добавить, "),
                Span::styled("d", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" — удалить, "),
                Span::styled("p", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" — проекты, "),
                Span::styled("s", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" — навыки, "),
                Span::styled("c", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" — контакты, "),
                Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" — выход"),
            ]);
            let controls_paragraph = Paragraph::new(controls)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(controls_paragraph, chunks[5]);
        })?;

        Ok(())
    }

    pub fn handle_input(&mut self, store: &DiaryStore) -> Result<Option<Action>> {
        if let Event::Key(key) = event::read()? {
            let action = match key.code {
                KeyCode::Char('a') => Some(Action::AddEntry),
                KeyCode::Char('d') if !store.entries().is_empty() => Some(Action::DeleteEntry),
                KeyCode::Char('p') => Some(Action::Projects),
                KeyCode::Char('s') => Some(Action::Skills),
                KeyCode::Char('c') => Some(Action::Contact),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
            if action.is_some() {
                self.notification = None;
            }
            Ok(action)
        } else {
            Ok(None)
        }
    }

    /// Add-entry form with inline per-field errors. Returns None on cancel,
    /// a validated draft on submit.
    pub fn add_entry_form(&mut self) -> Result<Option<EntryDraft>> {
        let mut title = String::new();
        let mut date = String::new();
        let mut status = EntryStatus::InProgress;
        let mut title_error: Option<String> = None;
        let mut date_error: Option<String> = None;
        let mut focused = 0usize;

        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Length(1),
                            Constraint::Length(3),
                            Constraint::Length(1),
                            Constraint::Length(3),
                            Constraint::Min(1),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let heading = Paragraph::new("Новая запись")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center);
                f.render_widget(heading, chunks[0]);

                f.render_widget(
                    field_widget("Название задачи", &title, focused == 0),
                    chunks[1],
                );
                f.render_widget(error_widget(&title_error), chunks[2]);

                f.render_widget(
                    field_widget("Дата (ГГГГ-ММ-ДД, пусто — сегодня)", &date, focused == 1),
                    chunks[3],
                );
                f.render_widget(error_widget(&date_error), chunks[4]);

                let status_line = format!("◄ {} ►", status.label());
                f.render_widget(
                    field_widget("Статус (◄/► для выбора)", &status_line, focused == 2),
                    chunks[5],
                );

                let instructions =
                    Paragraph::new("Tab — следующее поле, Enter — сохранить, Esc — отмена")
                        .style(Style::default().fg(Color::Yellow))
                        .alignment(Alignment::Center);
                f.render_widget(instructions, chunks[7]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => return Ok(None),
                    KeyCode::Tab | KeyCode::Down => {
                        // Blur-style validation when leaving a field.
                        match focused {
                            0 if !title.trim().is_empty() => {
                                title_error = validation::validate_entry_title(&title).err();
                            }
                            1 => date_error = validation::parse_entry_date(&date).err(),
                            _ => {}
                        }
                        focused = (focused + 1) % 3;
                    }
                    KeyCode::BackTab | KeyCode::Up => focused = (focused + 2) % 3,
                    KeyCode::Left | KeyCode::Right if focused == 2 => {
                        status = match status {
                            EntryStatus::Completed => EntryStatus::InProgress,
                            EntryStatus::InProgress => EntryStatus::Completed,
                        };
                    }
                    KeyCode::Enter => {
                        title_error = validation::validate_entry_title(&title).err();
                        match validation::parse_entry_date(&date) {
                            Ok(parsed) => {
                                date_error = None;
                                if title_error.is_none() {
                                    return Ok(Some(EntryDraft {
                                        title: title.trim().to_string(),
                                        date: parsed,
                                        status,
                                    }));
                                }
                            }
                            Err(e) => date_error = Some(e),
                        }
                    }
                    KeyCode::Char(c) => match focused {
                        0 => title.push(c),
                        1 => date.push(c),
                        _ => {}
                    },
                    KeyCode::Backspace => {
                        match focused {
                            0 => title.pop(),
                            1 => date.pop(),
                            _ => None,
                        };
                    }
                    _ => {}
                }
            }
        }
    }

    /// Pick an entry from the display-ordered list, then confirm.
    pub fn select_entry_to_delete(
        &mut self,
        entries: &[DiaryEntry],
    ) -> Result<Option<DiaryEntry>> {
        let mut selected_index = 0;

        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Min(5),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let heading = Paragraph::new("Удаление записи")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center);
                f.render_widget(heading, chunks[0]);

                let items: Vec<ListItem> = entries.iter().map(entry_list_item).collect();
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title("Записи"))
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");
                f.render_stateful_widget(
                    list,
                    chunks[1],
                    &mut ListState::default().with_selected(Some(selected_index)),
                );

                let instructions = Paragraph::new("Вверх/Вниз — выбор, Enter — удалить, Esc — отмена")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center);
                f.render_widget(instructions, chunks[2]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up => selected_index = selected_index.saturating_sub(1),
                    KeyCode::Down => {
                        if selected_index < entries.len() - 1 {
                            selected_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let entry = &entries[selected_index];
                        if self.confirm_delete(entry)? {
                            return Ok(Some(entry.clone()));
                        }
                    }
                    KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }

    fn confirm_delete(&mut self, entry: &DiaryEntry) -> Result<bool> {
        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Min(3),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let question = Paragraph::new(format!(
                    "Вы уверены, что хотите удалить запись \"{}\"?",
                    entry.title
                ))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Подтверждение"));
                f.render_widget(question, chunks[1]);

                let instructions = Paragraph::new("y — удалить, n — отмена")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center);
                f.render_widget(instructions, chunks[2]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(true),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
                    _ => {}
                }
            }
        }
    }

    /// Project gallery: filter buttons, list, detail view.
    pub fn browse_projects(&mut self) -> Result<()> {
        let mut filter = ProjectFilter::All;
        let mut selected_index = 0usize;

        loop {
            let visible = projects::filtered(filter);

            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Length(1),
                            Constraint::Min(5),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let heading = Paragraph::new("Проекты")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center);
                f.render_widget(heading, chunks[0]);

                let buttons = [
                    ('1', ProjectFilter::All),
                    ('2', ProjectFilter::Category(ProjectCategory::Html)),
                    ('3', ProjectFilter::Category(ProjectCategory::Js)),
                    ('4', ProjectFilter::Category(ProjectCategory::React)),
                ];
                let mut spans = Vec::new();
                for (key, button) in buttons {
                    let style = if button == filter {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    spans.push(Span::styled(format!("[{key}] {}  ", button.label()), style));
                }
                let filter_row = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
                f.render_widget(filter_row, chunks[1]);

                let items: Vec<ListItem> = visible
                    .iter()
                    .map(|project| {
                        ListItem::new(vec![
                            Line::from(Span::styled(
                                project.title,
                                Style::default().add_modifier(Modifier::BOLD),
                            )),
                            Line::from(Span::styled(
                                format!("  {}", project.category.label()),
                                Style::default().fg(Color::DarkGray),
                            )),
                        ])
                    })
                    .collect();
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title("Портфолио"))
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");
                f.render_stateful_widget(
                    list,
                    chunks[2],
                    &mut ListState::default().with_selected(Some(selected_index)),
                );

                let instructions = Paragraph::new(
                    "1-4 — фильтр, Вверх/Вниз — выбор, Enter — подробнее, Esc — назад",
                )
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
                f.render_widget(instructions, chunks[3]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => {
                        filter = ProjectFilter::All;
                        selected_index = 0;
                    }
                    KeyCode::Char('2') => {
                        filter = ProjectFilter::Category(ProjectCategory::Html);
                        selected_index = 0;
                    }
                    KeyCode::Char('3') => {
                        filter = ProjectFilter::Category(ProjectCategory::Js);
                        selected_index = 0;
                    }
                    KeyCode::Char('4') => {
                        filter = ProjectFilter::Category(ProjectCategory::React);
                        selected_index = 0;
                    }
                    KeyCode::Up => selected_index = selected_index.saturating_sub(1),
                    KeyCode::Down => {
                        if selected_index + 1 < visible.len() {
                            selected_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        if let Some(project) = visible.get(selected_index) {
                            self.project_detail(project)?;
                        }
                    }
                    KeyCode::Esc => return Ok(()),
                    _ => {}
                }
            }
        }
    }

    fn project_detail(&mut self, project: &Project) -> Result<()> {
        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Min(5),
                            Constraint::Length(3),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let heading = Paragraph::new(project.title)
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center);
                f.render_widget(heading, chunks[0]);

                let description = Paragraph::new(project.description)
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).title("Описание"));
                f.render_widget(description, chunks[1]);

                let badges: Vec<Span> = project
                    .technologies
                    .iter()
                    .map(|tech| {
                        Span::styled(
                            format!(" {tech} "),
                            Style::default().fg(Color::Black).bg(Color::Gray),
                        )
                    })
                    .collect();
                let mut tech_spans = Vec::new();
                for badge in badges {
                    tech_spans.push(badge);
                    tech_spans.push(Span::raw(" "));
                }
                let technologies = Paragraph::new(Line::from(tech_spans))
                    .block(Block::default().borders(Borders::ALL).title("Технологии"));
                f.render_widget(technologies, chunks[2]);

                let instructions = Paragraph::new(format!(
                    "Живая версия: {}  Исходный код: {}  (любая клавиша — назад)",
                    project.live_link, project.code_link
                ))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
                f.render_widget(instructions, chunks[3]);
            })?;

            if let Event::Key(_) = event::read()? {
                break;
            }
        }

        Ok(())
    }

    /// Skill gauges from the main page.
    pub fn show_skills(&mut self) -> Result<()> {
        loop {
            self.terminal.draw(|f| {
                let mut constraints = vec![Constraint::Length(3)];
                constraints.extend(SKILLS.iter().map(|_| Constraint::Length(3)));
                constraints.push(Constraint::Min(0));
                constraints.push(Constraint::Length(3));

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(constraints)
                    .split(f.area());

                let heading = Paragraph::new("Навыки")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center);
                f.render_widget(heading, chunks[0]);

                for (i, skill) in SKILLS.iter().enumerate() {
                    let gauge = Gauge::default()
                        .block(Block::default().borders(Borders::ALL).title(skill.name))
                        .gauge_style(Style::default().fg(Color::Cyan))
                        .percent(skill.percent)
                        .label(format!("{}%", skill.percent));
                    f.render_widget(gauge, chunks[1 + i]);
                }

                let instructions = Paragraph::new("Любая клавиша — назад")
                    .style(Style::default().fg(Color::Yellow))
                    .alignment(Alignment::Center);
                f.render_widget(instructions, chunks[chunks.len() - 1]);
            })?;

            if let Event::Key(_) = event::read()? {
                break;
            }
        }

        Ok(())
    }

    /// Contact form with the same inline validation as the page. Returns
    /// whether a valid submission happened.
    pub fn contact_form(&mut self) -> Result<bool> {
        let mut fields = [String::new(), String::new(), String::new()];
        let mut errors: [Option<String>; 3] = [None, None, None];
        let mut focused = 0usize;

        let validators: [fn(&str) -> Result<(), String>; 3] = [
            validation::validate_name,
            validation::validate_email,
            validation::validate_message,
        ];
        let labels = ["Имя", "Email", "Сообщение"];

        loop {
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints(
                        [
                            Constraint::Length(3),
                            Constraint::Length(3),
                            Constraint::Length(1),
                            Constraint::Length(3),
                            Constraint::Length(1),
                            Constraint::Length(3),
                            Constraint::Length(1),
                            Constraint::Min(1),
                            Constraint::Length(3),
                        ]
                        .as_ref(),
                    )
                    .split(f.area());

                let heading = Paragraph::new("Контакты")
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .alignment(Alignment::Center);
                f.render_widget(heading, chunks[0]);

                for i in 0..3 {
                    f.render_widget(
                        field_widget(labels[i], &fields[i], focused == i),
                        chunks[1 + i * 2],
                    );
                    f.render_widget(error_widget(&errors[i]), chunks[2 + i * 2]);
                }

                let instructions =
                    Paragraph::new("Tab — следующее поле, Enter — отправить, Esc — отмена")
                        .style(Style::default().fg(Color::Yellow))
                        .alignment(Alignment::Center);
                f.render_widget(instructions, chunks[8]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => return Ok(false),
                    KeyCode::Tab | KeyCode::Down => {
                        if !fields[focused].trim().is_empty() {
                            errors[focused] = validators[focused](&fields[focused]).err();
                        }
                        focused = (focused + 1) % 3;
                    }
                    KeyCode::BackTab | KeyCode::Up => focused = (focused + 2) % 3,
                    KeyCode::Enter => {
                        for i in 0..3 {
                            errors[i] = validators[i](&fields[i]).err();
                        }
                        if errors.iter().all(Option::is_none) {
                            return Ok(true);
                        }
                    }
                    KeyCode::Char(c) => fields[focused].push(c),
                    KeyCode::Backspace => {
                        fields[focused].pop();
                    }
                    _ => {}
                }
            }
        }
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        disable_raw_mode().unwrap();
        stdout().execute(LeaveAlternateScreen).unwrap();
    }
}

fn entry_list_item(entry: &DiaryEntry) -> ListItem<'_> {
    let status_color = match entry.status {
        EntryStatus::Completed => Color::Green,
        EntryStatus::InProgress => Color::Yellow,
    };
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", entry.status.icon()),
                Style::default().fg(status_color),
            ),
            Span::styled(
                entry.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "  Дата: {} · {}",
                format_date(entry.date),
                entry.status.label()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn field_widget<'a>(label: &'a str, value: &str, focused: bool) -> Paragraph<'a> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Paragraph::new(if focused {
        format!("{value}_")
    } else {
        value.to_string()
    })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(label),
    )
}

fn error_widget(error: &Option<String>) -> Paragraph<'static> {
    Paragraph::new(error.clone().unwrap_or_default()).style(Style::default().fg(Color::Red))
}

/// Long-form Russian date, the way the page formatted it.
fn format_date(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ];
    format!(
        "{} {} {} г.",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_format_in_russian_long_form() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(format_date(date), "15 декабря 2024 г.");
    }
}
