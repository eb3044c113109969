//! Application state machine and reducer.
//!
//! Key handling never waits on the network: it dispatches calls through the
//! [`Dispatcher`] and returns immediately. Results come back as [`Msg`]s and
//! are folded in by [`App::apply`], one at a time, on the UI thread.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use huddle_client::{ApiError, ApiResult, Dispatcher, Outcome, Session};
use huddle_core::{
  announcement::Announcement,
  chat::{ChatMessage, ChatRoom, MessageCursor},
  kanban::{KanbanBoard, KanbanCard},
  page::{Page, PageRequest},
  request::{Resolution, ResourceSlot},
  schedule::{Schedule, ScheduleRange},
  selection::SelectionList,
  workspace::Workspace,
};

// ─── Focus / tabs ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  /// Left column: the user's workspaces.
  Workspaces,
  /// Middle column: chat rooms, or boards on the Board tab.
  Side,
  /// Right column: the active tab.
  Detail,
}

impl Focus {
  fn next(self) -> Self {
    match self {
      Self::Workspaces => Self::Side,
      Self::Side => Self::Detail,
      Self::Detail => Self::Workspaces,
    }
  }

  fn prev(self) -> Self {
    match self {
      Self::Workspaces => Self::Detail,
      Self::Side => Self::Workspaces,
      Self::Detail => Self::Side,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
  Chat,
  Announcements,
  Schedule,
  Board,
}

impl Tab {
  pub const ALL: [Tab; 4] = [Tab::Chat, Tab::Announcements, Tab::Schedule, Tab::Board];

  pub fn title(self) -> &'static str {
    match self {
      Self::Chat => "Chat",
      Self::Announcements => "Announcements",
      Self::Schedule => "Schedule",
      Self::Board => "Board",
    }
  }
}

// ─── Messages ─────────────────────────────────────────────────────────────────

/// A finished API call, delivered by the [`Dispatcher`].
#[derive(Debug)]
pub enum Msg {
  Workspaces(Outcome<Vec<Workspace>>),
  Rooms(Outcome<Vec<ChatRoom>>),
  Messages(Outcome<Vec<ChatMessage>>),
  Sent(ApiResult<ChatMessage>),
  Announcements(Outcome<Page<Announcement>>),
  Schedules(Outcome<Vec<Schedule>>),
  Boards(Outcome<Vec<KanbanBoard>>),
  Cards(Outcome<Vec<KanbanCard>>),
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit,
  /// Sign out, then quit.
  Logout,
}

// ─── App ──────────────────────────────────────────────────────────────────────

pub struct App {
  pub focus: Focus,
  pub tab:   Tab,

  pub session: Session,
  dispatcher:  Dispatcher<Msg>,

  pub workspaces:    ResourceSlot<Vec<Workspace>, ApiError>,
  pub rooms:         ResourceSlot<Vec<ChatRoom>, ApiError>,
  pub messages:      ResourceSlot<Vec<ChatMessage>, ApiError>,
  pub announcements: ResourceSlot<Page<Announcement>, ApiError>,
  pub schedules:     ResourceSlot<Vec<Schedule>, ApiError>,
  pub boards:        ResourceSlot<Vec<KanbanBoard>, ApiError>,
  pub cards:         ResourceSlot<Vec<KanbanCard>, ApiError>,

  /// Selections handed to each [`SelectionList`]. At most one entry each.
  pub selected_workspace: Vec<Workspace>,
  pub selected_room:      Vec<ChatRoom>,
  pub selected_board:     Vec<KanbanBoard>,

  pub workspace_cursor: usize,
  pub side_cursor:      usize,
  pub detail_scroll:    usize,

  /// Fuzzy query applied to the focused list.
  pub filter:        String,
  pub filter_active: bool,

  /// Chat compose line.
  pub compose:   String,
  pub composing: bool,

  pub status_msg: String,

  /// Anchors the Schedule tab's month.
  pub today: NaiveDate,
}

impl App {
  pub fn new(session: Session, dispatcher: Dispatcher<Msg>, today: NaiveDate) -> Self {
    Self {
      focus: Focus::Workspaces,
      tab: Tab::Chat,
      session,
      dispatcher,
      workspaces: ResourceSlot::new(),
      rooms: ResourceSlot::new(),
      messages: ResourceSlot::new(),
      announcements: ResourceSlot::new(),
      schedules: ResourceSlot::new(),
      boards: ResourceSlot::new(),
      cards: ResourceSlot::new(),
      selected_workspace: Vec::new(),
      selected_room: Vec::new(),
      selected_board: Vec::new(),
      workspace_cursor: 0,
      side_cursor: 0,
      detail_scroll: 0,
      filter: String::new(),
      filter_active: false,
      compose: String::new(),
      composing: false,
      status_msg: String::new(),
      today,
    }
  }

  // ── Loading ───────────────────────────────────────────────────────────────

  pub fn load_workspaces(&mut self) {
    let client = self.session.client().clone();
    self.status_msg = "Loading workspaces…".into();
    self.dispatcher.dispatch_tracked(
      &mut self.workspaces,
      async move { client.list_workspaces().await },
      Msg::Workspaces,
    );
  }

  fn load_workspace_content(&mut self, workspace_id: i64) {
    let client = self.session.client().clone();
    self.dispatcher.dispatch_tracked(
      &mut self.rooms,
      async move { client.list_rooms(workspace_id).await },
      Msg::Rooms,
    );

    let client = self.session.client().clone();
    self.dispatcher.dispatch_tracked(
      &mut self.announcements,
      async move {
        client
          .list_announcements(workspace_id, PageRequest::default())
          .await
      },
      Msg::Announcements,
    );

    let client = self.session.client().clone();
    let range = ScheduleRange::month_of(self.today);
    self.dispatcher.dispatch_tracked(
      &mut self.schedules,
      async move { client.list_schedules(workspace_id, range).await },
      Msg::Schedules,
    );

    let client = self.session.client().clone();
    self.dispatcher.dispatch_tracked(
      &mut self.boards,
      async move { client.list_boards(workspace_id).await },
      Msg::Boards,
    );
  }

  fn load_messages(&mut self, room_id: i64) {
    let client = self.session.client().clone();
    self.dispatcher.dispatch_tracked(
      &mut self.messages,
      async move { client.list_messages(room_id, MessageCursor::default()).await },
      Msg::Messages,
    );
  }

  fn load_cards(&mut self, board_id: i64) {
    let client = self.session.client().clone();
    self.dispatcher.dispatch_tracked(
      &mut self.cards,
      async move { client.list_cards(board_id).await },
      Msg::Cards,
    );
  }

  /// Re-issue the requests behind the current view.
  fn reload(&mut self) {
    match self.selected_workspace.first().map(|w| w.id) {
      Some(workspace_id) => {
        self.load_workspace_content(workspace_id);
        if let Some(room_id) = self.selected_room.first().map(|r| r.id) {
          self.load_messages(room_id);
        }
        if let Some(board_id) = self.selected_board.first().map(|b| b.id) {
          self.load_cards(board_id);
        }
      }
      None => self.load_workspaces(),
    }
  }

  // ── Reducer ───────────────────────────────────────────────────────────────

  /// Fold a finished call into the view state. Results whose ticket has been
  /// superseded leave their slot untouched.
  pub fn apply(&mut self, msg: Msg) {
    match msg {
      Msg::Workspaces(outcome) => {
        let resolution = outcome.apply_to(&mut self.workspaces);
        if self.settle(resolution, |app| &app.workspaces) && self.selected_workspace.is_empty() {
          let first = self.workspaces.value().and_then(|w| w.first()).cloned();
          if let Some(workspace) = first {
            self.open_workspace(workspace);
          }
        }
      }
      Msg::Rooms(outcome) => {
        let resolution = outcome.apply_to(&mut self.rooms);
        self.settle(resolution, |app| &app.rooms);
      }
      Msg::Messages(outcome) => {
        let resolution = outcome.apply_to(&mut self.messages);
        if self.settle(resolution, |app| &app.messages) {
          if let Some(messages) = self.messages.state_mut().value_mut() {
            messages.sort_by_key(|m| m.sent_at);
          }
        }
      }
      Msg::Sent(Ok(message)) => {
        let in_open_room = self.selected_room.first().is_some_and(|r| r.id == message.room_id);
        if let Some(messages) = self.messages.state_mut().value_mut().filter(|_| in_open_room) {
          messages.push(message);
        }
      }
      Msg::Sent(Err(e)) => {
        tracing::warn!(error = %e, "message not sent");
        self.status_msg = format!("Error: {e}");
      }
      Msg::Announcements(outcome) => {
        let resolution = outcome.apply_to(&mut self.announcements);
        self.settle(resolution, |app| &app.announcements);
      }
      Msg::Schedules(outcome) => {
        let resolution = outcome.apply_to(&mut self.schedules);
        self.settle(resolution, |app| &app.schedules);
      }
      Msg::Boards(outcome) => {
        let resolution = outcome.apply_to(&mut self.boards);
        if self.settle(resolution, |app| &app.boards) && self.selected_board.is_empty() {
          let first = self.boards.value().and_then(|b| b.first()).cloned();
          if let Some(board) = first {
            self.open_board(board);
          }
        }
      }
      Msg::Cards(outcome) => {
        let resolution = outcome.apply_to(&mut self.cards);
        self.settle(resolution, |app| &app.cards);
      }
    }
  }

  /// Update the status line after a resolution. Returns `true` when the
  /// result was applied and succeeded.
  fn settle<T>(
    &mut self,
    resolution: Resolution,
    slot: impl Fn(&Self) -> &ResourceSlot<T, ApiError>,
  ) -> bool {
    if resolution != Resolution::Applied {
      return false;
    }
    match slot(self).state().error().map(|e| e.message.clone()) {
      Some(message) => {
        self.status_msg = format!("Error: {message}");
        false
      }
      None => {
        self.status_msg.clear();
        true
      }
    }
  }

  // ── Selection ─────────────────────────────────────────────────────────────

  /// Make `workspace` current and load everything scoped to it. Requests
  /// still in flight for the previous workspace become stale.
  pub fn open_workspace(&mut self, workspace: Workspace) {
    let workspace_id = workspace.id;
    self.session.switch_workspace(workspace.clone());
    self.selected_workspace = vec![workspace];

    self.rooms.reset();
    self.messages.reset();
    self.announcements.reset();
    self.schedules.reset();
    self.boards.reset();
    self.cards.reset();
    self.selected_room.clear();
    self.selected_board.clear();
    self.side_cursor = 0;
    self.detail_scroll = 0;

    self.load_workspace_content(workspace_id);
  }

  fn open_room(&mut self, room: ChatRoom) {
    let room_id = room.id;
    self.selected_room = vec![room];
    self.detail_scroll = 0;
    self.load_messages(room_id);
  }

  fn open_board(&mut self, board: KanbanBoard) {
    let board_id = board.id;
    self.selected_board = vec![board];
    self.detail_scroll = 0;
    self.load_cards(board_id);
  }

  /// The board whose columns the Board tab lays cards out under.
  pub fn current_board(&self) -> Option<&KanbanBoard> { self.selected_board.first() }

  // ── Filtered lists ────────────────────────────────────────────────────────

  fn query_for(&self, focus: Focus) -> &str {
    if self.focus == focus { &self.filter } else { "" }
  }

  pub fn visible_workspaces(&self) -> Vec<Workspace> {
    fuzzy_filter(
      self.workspaces.value().map(Vec::as_slice).unwrap_or_default(),
      self.query_for(Focus::Workspaces),
      |w| w.name.as_str(),
    )
  }

  pub fn visible_rooms(&self) -> Vec<ChatRoom> {
    fuzzy_filter(
      self.rooms.value().map(Vec::as_slice).unwrap_or_default(),
      self.query_for(Focus::Side),
      |r| r.name.as_str(),
    )
  }

  pub fn visible_boards(&self) -> Vec<KanbanBoard> {
    fuzzy_filter(
      self.boards.value().map(Vec::as_slice).unwrap_or_default(),
      self.query_for(Focus::Side),
      |b| b.name.as_str(),
    )
  }

  /// Number of rows in the middle column for the current tab.
  fn side_len(&self) -> usize {
    if self.tab == Tab::Board {
      self.visible_boards().len()
    } else {
      self.visible_rooms().len()
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Flow::Quit;
    }
    if self.filter_active {
      self.handle_filter_key(key);
      return Flow::Continue;
    }
    if self.composing {
      self.handle_compose_key(key);
      return Flow::Continue;
    }

    match key.code {
      KeyCode::Char('q') => return Flow::Quit,
      KeyCode::Char('L') => return Flow::Logout,

      KeyCode::Tab => self.set_focus(self.focus.next()),
      KeyCode::BackTab => self.set_focus(self.focus.prev()),
      KeyCode::Char(c @ '1'..='4') => {
        let index = c as usize - '1' as usize;
        self.set_tab(Tab::ALL[index]);
      }

      KeyCode::Char('/') if self.focus != Focus::Detail => {
        self.filter_active = true;
        self.filter.clear();
        self.reset_cursor();
      }
      KeyCode::Char('r') => self.reload(),

      KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
      KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),

      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self.activate(),
      KeyCode::Char('i') if self.tab == Tab::Chat => self.start_compose(),
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') if self.focus != Focus::Workspaces => {
        self.set_focus(self.focus.prev());
      }

      _ => {}
    }
    Flow::Continue
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
        self.reset_cursor();
      }
      KeyCode::Enter => {
        self.filter_active = false;
        self.reset_cursor();
      }
      KeyCode::Backspace => {
        self.filter.pop();
        self.reset_cursor();
      }
      KeyCode::Char(c) => {
        self.filter.push(c);
        self.reset_cursor();
      }
      _ => {}
    }
  }

  fn handle_compose_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.composing = false;
      }
      KeyCode::Enter => self.send_compose(),
      KeyCode::Backspace => {
        self.compose.pop();
      }
      KeyCode::Char(c) => self.compose.push(c),
      _ => {}
    }
  }

  fn set_focus(&mut self, focus: Focus) {
    if self.focus != focus {
      self.filter.clear();
      self.filter_active = false;
    }
    self.focus = focus;
  }

  fn set_tab(&mut self, tab: Tab) {
    let side_changes = (self.tab == Tab::Board) != (tab == Tab::Board);
    self.tab = tab;
    self.detail_scroll = 0;
    if side_changes {
      self.side_cursor = 0;
      if self.focus == Focus::Side {
        self.filter.clear();
      }
    }
  }

  fn reset_cursor(&mut self) {
    match self.focus {
      Focus::Workspaces => self.workspace_cursor = 0,
      Focus::Side => self.side_cursor = 0,
      Focus::Detail => self.detail_scroll = 0,
    }
  }

  fn move_cursor(&mut self, delta: isize) {
    let (cursor, len) = match self.focus {
      Focus::Workspaces => {
        let len = self.visible_workspaces().len();
        (&mut self.workspace_cursor, len)
      }
      Focus::Side => {
        let len = self.side_len();
        (&mut self.side_cursor, len)
      }
      Focus::Detail => {
        let len = crate::ui::detail::content_lines(self).len();
        (&mut self.detail_scroll, len)
      }
    };
    if len == 0 {
      *cursor = 0;
      return;
    }
    *cursor = cursor.saturating_add_signed(delta).min(len - 1);
  }

  /// Act on the row under the cursor of the focused column.
  fn activate(&mut self) {
    match self.focus {
      Focus::Workspaces => {
        let items = self.visible_workspaces();
        let mut picked = None;
        SelectionList::new(&items, &self.selected_workspace, |w: &Workspace| w.id)
          .click(self.workspace_cursor, |w| picked = Some(w.clone()));
        if let Some(workspace) = picked {
          self.open_workspace(workspace);
          self.set_focus(Focus::Side);
        }
      }
      Focus::Side if self.tab == Tab::Board => {
        let items = self.visible_boards();
        let mut picked = None;
        SelectionList::new(&items, &self.selected_board, |b: &KanbanBoard| b.id)
          .click(self.side_cursor, |b| picked = Some(b.clone()));
        if let Some(board) = picked {
          self.open_board(board);
          self.set_focus(Focus::Detail);
        }
      }
      Focus::Side => {
        let items = self.visible_rooms();
        let mut picked = None;
        SelectionList::new(&items, &self.selected_room, |r: &ChatRoom| r.id)
          .click(self.side_cursor, |r| picked = Some(r.clone()));
        if let Some(room) = picked {
          self.open_room(room);
          self.set_tab(Tab::Chat);
          self.set_focus(Focus::Detail);
        }
      }
      Focus::Detail if self.tab == Tab::Chat => self.start_compose(),
      Focus::Detail => {}
    }
  }

  // ── Chat compose ──────────────────────────────────────────────────────────

  fn start_compose(&mut self) {
    if self.selected_room.is_empty() {
      self.status_msg = "Open a room first.".into();
      return;
    }
    self.focus = Focus::Detail;
    self.composing = true;
  }

  fn send_compose(&mut self) {
    let content = self.compose.trim().to_string();
    let Some(room_id) = self.selected_room.first().map(|r| r.id) else {
      self.composing = false;
      return;
    };
    if content.is_empty() {
      return;
    }
    let client = self.session.client().clone();
    self.dispatcher.dispatch(
      async move { client.send_message(room_id, &content).await },
      Msg::Sent,
    );
    self.compose.clear();
    self.composing = false;
  }
}

/// Items whose `text` fuzzy-matches `query`, all of them when it is empty.
fn fuzzy_filter<T: Clone>(items: &[T], query: &str, text: impl Fn(&T) -> &str) -> Vec<T> {
  if query.is_empty() {
    return items.to_vec();
  }
  let matcher = SkimMatcherV2::default();
  items
    .iter()
    .filter(|item| matcher.fuzzy_match(text(item), query).is_some())
    .cloned()
    .collect()
}
