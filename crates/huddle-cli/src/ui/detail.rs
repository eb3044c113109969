//! Detail pane: the right column and its tabs.

use chrono::Local;
use huddle_client::ApiError;
use huddle_core::{
  request::{RequestState, ResourceSlot},
  schedule::{Schedule, ScheduleRange},
};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::app::{App, Focus, Tab};

// ─── Public entry ─────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let border = if app.focus == Focus::Detail { Color::Cyan } else { Color::DarkGray };
  let title = match app.session.workspace() {
    Some(workspace) => format!(" {} ", workspace.name),
    None => " Detail ".to_string(),
  };
  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0)])
    .split(inner);

  let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or_default();
  let tabs = Tabs::new(
    Tab::ALL
      .iter()
      .enumerate()
      .map(|(i, t)| format!("{} {}", i + 1, t.title())),
  )
  .select(selected)
  .style(Style::default().fg(Color::DarkGray))
  .highlight_style(
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  f.render_widget(tabs, rows[0]);

  if app.session.workspace().is_none() {
    hint(f, rows[1], "Select a workspace and press Enter.");
    return;
  }

  match app.tab {
    Tab::Chat => draw_chat(f, rows[1], app),
    Tab::Announcements => draw_announcements(f, rows[1], app),
    Tab::Schedule => draw_schedule(f, rows[1], app),
    Tab::Board => draw_board(f, rows[1], app),
  }
}

fn hint(f: &mut Frame, area: Rect, text: &str) {
  f.render_widget(
    Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray)),
    area,
  );
}

/// Render the placeholder for a slot that has nothing to show yet. Returns
/// `true` when it did.
fn draw_pending<T>(
  f: &mut Frame,
  area: Rect,
  slot: &ResourceSlot<T, ApiError>,
  idle: &str,
) -> bool {
  match slot.state() {
    RequestState::Idle => hint(f, area, idle),
    RequestState::Loading => hint(f, area, "Loading…"),
    RequestState::Failed(e) => f.render_widget(
      Paragraph::new(e.message.clone())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true }),
      area,
    ),
    RequestState::Succeeded(_) => return false,
  }
  true
}

/// The scrollable lines of the active tab. The Board tab lays out columns
/// instead and has none.
pub fn content_lines(app: &App) -> Vec<Line<'static>> {
  match app.tab {
    Tab::Chat => chat_lines(app),
    Tab::Announcements => announcement_lines(app),
    Tab::Schedule => schedule_lines(app),
    Tab::Board => Vec::new(),
  }
}

fn scrolled(lines: Vec<Line<'static>>, app: &App) -> Paragraph<'static> {
  Paragraph::new(lines)
    .wrap(Wrap { trim: false })
    .scroll((app.detail_scroll.min(u16::MAX as usize) as u16, 0))
}

// ─── Chat ─────────────────────────────────────────────────────────────────────

fn chat_lines(app: &App) -> Vec<Line<'static>> {
  let messages = app.messages.value().map(Vec::as_slice).unwrap_or_default();
  messages
    .iter()
    .map(|m| {
      Line::from(vec![
        Span::styled(
          m.sent_at.with_timezone(&Local).format("%H:%M ").to_string(),
          Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
          format!("{}: ", m.sender.name),
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ),
        Span::raw(m.content.clone()),
      ])
    })
    .collect()
}

fn draw_chat(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(1)])
    .split(area);

  if !draw_pending(f, rows[0], &app.messages, "Open a room to read messages.") {
    let lines = chat_lines(app);
    if lines.is_empty() {
      hint(f, rows[0], "No messages yet.");
    } else {
      f.render_widget(scrolled(lines, app), rows[0]);
    }
  }

  let compose = if app.composing {
    Line::from(vec![
      Span::styled("> ", Style::default().fg(Color::Yellow)),
      Span::raw(format!("{}_", app.compose)),
    ])
  } else if app.selected_room.is_empty() {
    Line::default()
  } else {
    Line::from(Span::styled(
      "[i] write a message",
      Style::default().fg(Color::DarkGray),
    ))
  };
  f.render_widget(Paragraph::new(compose), rows[1]);
}

// ─── Announcements ────────────────────────────────────────────────────────────

fn announcement_lines(app: &App) -> Vec<Line<'static>> {
  let Some(page) = app.announcements.value() else {
    return Vec::new();
  };
  let mut lines = Vec::new();
  if page.content.is_empty() {
    return lines;
  }
  for announcement in &page.content {
    let mut title = Vec::new();
    if announcement.pinned {
      title.push(Span::styled("[pinned] ", Style::default().fg(Color::Yellow)));
    }
    title.push(Span::styled(
      announcement.title.clone(),
      Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(title));
    lines.push(Line::from(Span::styled(
      format!(
        "{} · {}",
        announcement.author.name,
        announcement.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
      ),
      Style::default().fg(Color::DarkGray),
    )));
    lines.extend(announcement.content.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
  }
  lines.push(Line::from(Span::styled(
    format!("page {} · {} total", page.page + 1, page.total_elements),
    Style::default().fg(Color::DarkGray),
  )));
  lines
}

fn draw_announcements(f: &mut Frame, area: Rect, app: &App) {
  if draw_pending(f, area, &app.announcements, "") {
    return;
  }
  let lines = announcement_lines(app);
  if lines.is_empty() {
    hint(f, area, "No announcements.");
    return;
  }
  f.render_widget(scrolled(lines, app), area);
}

// ─── Schedule ─────────────────────────────────────────────────────────────────

fn schedule_line(schedule: &Schedule) -> Line<'static> {
  let starts = schedule.starts_at.with_timezone(&Local);
  let ends = schedule.ends_at.with_timezone(&Local);
  let when = if schedule.all_day {
    format!("{}  all day     ", starts.format("%a %d"))
  } else {
    format!("{}  {}–{}", starts.format("%a %d"), starts.format("%H:%M"), ends.format("%H:%M"))
  };
  Line::from(vec![
    Span::styled(format!("{when}  "), Style::default().fg(Color::Cyan)),
    Span::raw(schedule.title.clone()),
    Span::styled(
      format!("  ({} attending)", schedule.participants.len()),
      Style::default().fg(Color::DarkGray),
    ),
  ])
}

fn schedule_lines(app: &App) -> Vec<Line<'static>> {
  let Some(schedules) = app.schedules.value() else {
    return Vec::new();
  };
  let range = ScheduleRange::month_of(app.today);
  let mut schedules: Vec<&Schedule> = schedules.iter().collect();
  schedules.sort_by_key(|s| s.starts_at);

  let mut lines = vec![
    Line::from(Span::styled(
      range.start.format("%B %Y").to_string(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
  ];
  if schedules.is_empty() {
    lines.push(Line::from(Span::styled(
      "Nothing scheduled this month.",
      Style::default().fg(Color::DarkGray),
    )));
  }
  lines.extend(schedules.into_iter().map(schedule_line));
  lines
}

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
  if draw_pending(f, area, &app.schedules, "") {
    return;
  }
  f.render_widget(scrolled(schedule_lines(app), app), area);
}

// ─── Board ────────────────────────────────────────────────────────────────────

fn draw_board(f: &mut Frame, area: Rect, app: &App) {
  let Some(board) = app.current_board() else {
    draw_pending(f, area, &app.boards, "");
    if app.boards.value().is_some() {
      hint(f, area, "This workspace has no boards.");
    }
    return;
  };
  if draw_pending(f, area, &app.cards, "") {
    return;
  }

  let cards = app.cards.value().map(Vec::as_slice).unwrap_or_default();
  let columns = board.group_cards(cards);
  if columns.is_empty() {
    hint(f, area, "This board has no columns.");
    return;
  }

  let areas = Layout::default()
    .direction(Direction::Horizontal)
    .constraints(vec![Constraint::Ratio(1, columns.len() as u32); columns.len()])
    .split(area);

  for ((column, cards), area) in columns.into_iter().zip(areas.iter()) {
    let mut lines: Vec<Line> = Vec::new();
    for card in cards {
      lines.push(Line::from(format!("• {}", card.title)));
      let mut meta = Vec::new();
      if let Some(assignee) = &card.assignee {
        meta.push(assignee.name.clone());
      }
      if let Some(due) = card.due_date {
        meta.push(format!("due {}", due.format("%m-%d")));
      }
      if !meta.is_empty() {
        lines.push(Line::from(Span::styled(
          format!("  {}", meta.join(" · ")),
          Style::default().fg(Color::DarkGray),
        )));
      }
    }
    let block = Block::default()
      .title(format!(" {} ", column.name))
      .borders(Borders::TOP)
      .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
      Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true }),
      *area,
    );
  }
}
