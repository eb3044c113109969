//! A generic, fully controlled selection list.
//!
//! [`SelectionList`] renders any slice of items, marks the ones present in a
//! caller-supplied selection, and reports clicks back to the caller. It keeps
//! no state of its own: the caller owns `selected` and passes the updated
//! selection on the next render.
//!
//! Items are matched by an identity key rather than by reference. Keys are
//! expected to be unique within `items`; duplicates are not rejected and
//! make every item sharing the key highlight together.

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

/// Shown in place of the rows when there is nothing to select.
pub const EMPTY_MESSAGE: &str = "No selectable items.";

/// Default height of the scrollable viewport, in rows.
pub const DEFAULT_MAX_HEIGHT: u16 = 10;

// ─── Output ──────────────────────────────────────────────────────────────────

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow<K, R> {
  /// The item's identity, usable as a stable list key.
  pub key:      K,
  pub selected: bool,
  /// Whatever the caller's `render_item` produced.
  pub view:     R,
}

/// The result of [`SelectionList::render`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<K, R> {
  Empty { message: &'static str },
  Rows {
    rows:       Vec<ListRow<K, R>>,
    max_height: u16,
  },
}

impl<K, R> ListView<K, R> {
  pub fn is_empty(&self) -> bool { matches!(self, Self::Empty { .. }) }
}

// ─── List ────────────────────────────────────────────────────────────────────

/// A borrowed view over `items` with `selected` highlighted.
///
/// `identity` extracts the key used both for selection matching and for the
/// row key.
pub struct SelectionList<'a, T, K, F> {
  items:      &'a [T],
  selected:   &'a [T],
  identity:   F,
  max_height: u16,
  _key:       PhantomData<fn() -> K>,
}

impl<'a, T, K, F> SelectionList<'a, T, K, F>
where
  F: Fn(&T) -> K,
  K: PartialEq,
{
  pub fn new(items: &'a [T], selected: &'a [T], identity: F) -> Self {
    Self {
      items,
      selected,
      identity,
      max_height: DEFAULT_MAX_HEIGHT,
      _key: PhantomData,
    }
  }

  /// Bound the viewport to `rows` rows.
  pub fn max_height(mut self, rows: u16) -> Self {
    self.max_height = rows;
    self
  }

  pub fn items(&self) -> &'a [T] { self.items }

  /// Whether any selected element shares `item`'s identity key.
  pub fn is_selected(&self, item: &T) -> bool {
    let key = (self.identity)(item);
    self.selected.iter().any(|s| (self.identity)(s) == key)
  }

  /// Render every item through `render_item(item, is_selected)`.
  ///
  /// An empty `items` slice produces [`ListView::Empty`] without calling
  /// `render_item`.
  pub fn render<R>(&self, mut render_item: impl FnMut(&T, bool) -> R) -> ListView<K, R> {
    if self.items.is_empty() {
      return ListView::Empty {
        message: EMPTY_MESSAGE,
      };
    }
    if tracing::enabled!(tracing::Level::DEBUG) && self.has_duplicate_keys() {
      tracing::debug!(
        items = self.items.len(),
        "selection list contains duplicate identity keys"
      );
    }

    let rows = self
      .items
      .iter()
      .map(|item| {
        let selected = self.is_selected(item);
        ListRow {
          key: (self.identity)(item),
          selected,
          view: render_item(item, selected),
        }
      })
      .collect();

    ListView::Rows {
      rows,
      max_height: self.max_height,
    }
  }

  /// Report a click on the row at `index`.
  ///
  /// `on_select` runs exactly once with the clicked item, whatever its
  /// current selection state. Returns `false` without calling it when
  /// `index` is out of range.
  pub fn click(&self, index: usize, on_select: impl FnOnce(&'a T)) -> bool {
    match self.items.get(index) {
      Some(item) => {
        on_select(item);
        true
      }
      None => false,
    }
  }

  fn has_duplicate_keys(&self) -> bool {
    let keys: Vec<K> = self.items.iter().map(|item| (self.identity)(item)).collect();
    keys
      .iter()
      .enumerate()
      .any(|(i, key)| keys[..i].contains(key))
  }
}

impl<T, K, F> SelectionList<'_, T, K, F>
where
  F: Fn(&T) -> K,
  K: PartialEq + Clone,
{
  /// Identity keys that occur more than once in `items`, in first-seen
  /// order.
  pub fn duplicate_keys(&self) -> Vec<K> {
    let keys: Vec<K> = self.items.iter().map(|item| (self.identity)(item)).collect();
    let mut duplicates: Vec<K> = Vec::new();
    for (i, key) in keys.iter().enumerate() {
      if keys[..i].contains(key) && !duplicates.contains(key) {
        duplicates.push(key.clone());
      }
    }
    duplicates
  }
}

// ─── Named-field identity ────────────────────────────────────────────────────

/// Identity that looks up the field `name` on the item's serialised form.
///
/// An item without that field yields `None`. Two such items compare equal,
/// so a misspelt field name leaves everything unselected unless the
/// selection is missing the field as well.
pub fn field<T: Serialize>(name: &str) -> impl Fn(&T) -> Option<Value> + '_ {
  move |item| {
    serde_json::to_value(item)
      .ok()
      .and_then(|value| value.get(name).cloned())
  }
}
