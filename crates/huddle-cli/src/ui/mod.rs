//! TUI rendering: header, three columns, status bar.

pub mod detail;
pub mod selection;

use huddle_core::{chat::ChatRoom, kanban::KanbanBoard, selection::SelectionList, workspace::Workspace};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use self::selection::Pane;
use crate::app::{App, Focus, Tab};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(f.area());

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

/// The workspace's icon URL, or its initial when it has none.
fn workspace_badge(app: &App, workspace: &Workspace) -> String {
  app
    .session
    .resolver()
    .resolve_workspace_icon_url(workspace.icon_url.as_deref())
    .unwrap_or_else(|| format!("[{}]", workspace.initial()))
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let mut left = vec![Span::styled(
    " huddle ",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  )];
  if let Some(workspace) = app.session.workspace() {
    left.push(Span::raw(format!(
      " {} {}",
      workspace_badge(app, workspace),
      workspace.name
    )));
  }

  let user = match (app.session.user(), app.session.profile_image_url()) {
    (Some(user), Some(avatar)) => format!("{} <{avatar}>", user.name),
    (Some(user), None) => user.name.clone(),
    _ => "signed out".to_string(),
  };
  let right = Span::styled(
    format!("{user}  {} ", app.today.format("%Y-%m-%d")),
    Style::default().fg(Color::Gray),
  );

  let used: usize = left.iter().map(|s| s.width()).sum::<usize>() + right.width();
  let pad = (area.width as usize).saturating_sub(used);
  left.push(Span::raw(" ".repeat(pad)));
  left.push(right);

  f.render_widget(
    Paragraph::new(Line::from(left)).block(Block::default().style(Style::default().bg(Color::DarkGray))),
    area,
  );
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn filter_for(app: &App, focus: Focus) -> Option<(&str, bool)> {
  (app.focus == focus).then_some((app.filter.as_str(), app.filter_active))
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage(22),
      Constraint::Percentage(22),
      Constraint::Percentage(56),
    ])
    .split(area);

  draw_workspaces(f, cols[0], app);
  if app.tab == Tab::Board {
    draw_boards(f, cols[1], app);
  } else {
    draw_rooms(f, cols[1], app);
  }
  detail::draw(f, cols[2], app);
}

fn draw_workspaces(f: &mut Frame, area: Rect, app: &App) {
  let items = app.visible_workspaces();
  let pane = Pane {
    title:   format!(" Workspaces ({}) ", items.len()),
    focused: app.focus == Focus::Workspaces,
    cursor:  app.workspace_cursor,
    filter:  filter_for(app, Focus::Workspaces),
  };
  let list = SelectionList::new(&items, &app.selected_workspace, |w: &Workspace| w.id)
    .max_height(area.height.saturating_sub(2));
  selection::draw(f, area, &pane, &list, |w| {
    Line::from(vec![
      Span::styled(format!("{} ", w.initial()), Style::default().fg(Color::Magenta)),
      Span::raw(w.name.clone()),
    ])
  });
}

fn draw_rooms(f: &mut Frame, area: Rect, app: &App) {
  let items = app.visible_rooms();
  let pane = Pane {
    title:   format!(" Rooms ({}) ", items.len()),
    focused: app.focus == Focus::Side,
    cursor:  app.side_cursor,
    filter:  filter_for(app, Focus::Side),
  };
  let list = SelectionList::new(&items, &app.selected_room, |r: &ChatRoom| r.id)
    .max_height(area.height.saturating_sub(2));
  selection::draw(f, area, &pane, &list, |r| {
    Line::from(vec![
      Span::raw(format!("# {}", r.name)),
      Span::styled(format!("  {}", r.member_count), Style::default().fg(Color::DarkGray)),
    ])
  });
}

fn draw_boards(f: &mut Frame, area: Rect, app: &App) {
  let items = app.visible_boards();
  let pane = Pane {
    title:   format!(" Boards ({}) ", items.len()),
    focused: app.focus == Focus::Side,
    cursor:  app.side_cursor,
    filter:  filter_for(app, Focus::Side),
  };
  let list = SelectionList::new(&items, &app.selected_board, |b: &KanbanBoard| b.id)
    .max_height(area.height.saturating_sub(2));
  selection::draw(f, area, &pane, &list, |b| Line::from(b.name.clone()));
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = if app.filter_active {
    ("FILTER", "Type to filter  Esc clear  Enter keep")
  } else if app.composing {
    ("COMPOSE", "Enter send  Esc cancel")
  } else {
    (
      "NORMAL",
      "Tab focus  1-4 tabs  jk move  Enter open  / filter  r reload  L logout  q quit",
    )
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let line = Line::from(vec![
    Span::styled(
      format!(" {mode_label} "),
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {status}"), Style::default().fg(Color::DarkGray)),
  ]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
