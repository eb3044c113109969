//! Draws a [`SelectionList`] as a bordered ratatui list.

use huddle_core::selection::{ListView, SelectionList};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Chrome around one list column.
pub struct Pane<'a> {
  pub title:   String,
  pub focused: bool,
  pub cursor:  usize,
  /// The fuzzy query and whether it is still being typed.
  pub filter:  Option<(&'a str, bool)>,
}

/// Render `list` into `area`. `label` draws one item; selected rows get a
/// marker in front of it.
pub fn draw<T, K, F>(
  f: &mut Frame,
  area: Rect,
  pane: &Pane,
  list: &SelectionList<'_, T, K, F>,
  label: impl Fn(&T) -> Line<'static>,
) where
  F: Fn(&T) -> K,
  K: PartialEq,
{
  let border = if pane.focused { Color::Cyan } else { Color::DarkGray };
  let block = Block::default()
    .title(pane.title.clone())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));

  let mut inner = block.inner(area);
  f.render_widget(block, area);

  let filter = pane
    .filter
    .filter(|(query, typing)| (*typing || !query.is_empty()) && inner.height > 2);
  if let Some((query, typing)) = filter {
    let filter_area = Rect {
      y: inner.y + inner.height - 1,
      height: 1,
      ..inner
    };
    inner.height -= 1;
    let text = if typing { format!("/{query}_") } else { format!("/{query}") };
    f.render_widget(
      Paragraph::new(text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  match list.render(|item, _| label(item)) {
    ListView::Empty { message } => {
      f.render_widget(
        Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
        inner,
      );
    }
    ListView::Rows { rows, max_height } => {
      let items: Vec<ListItem> = rows
        .into_iter()
        .map(|row| {
          let marker = if row.selected {
            Span::styled("● ", Style::default().fg(Color::Green))
          } else {
            Span::raw("  ")
          };
          let mut spans = vec![marker];
          spans.extend(row.view.spans);
          let style = if row.selected {
            Style::default().add_modifier(Modifier::BOLD)
          } else {
            Style::default()
          };
          ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

      inner.height = inner.height.min(max_height);
      let highlight = if pane.focused {
        Style::default().bg(Color::Blue).fg(Color::White)
      } else {
        Style::default().bg(Color::DarkGray)
      };

      let mut state = ListState::default();
      state.select(Some(pane.cursor.min(items.len().saturating_sub(1))));
      f.render_stateful_widget(List::new(items).highlight_style(highlight), inner, &mut state);
    }
  }
}
