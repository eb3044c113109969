//! Pagination envelope used by list endpoints.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
  pub content:        Vec<T>,
  /// Zero-based page index.
  pub page:           u32,
  pub size:           u32,
  pub total_elements: u64,
  /// `true` when no further page exists.
  pub last:           bool,
}

/// Query parameters selecting a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
  pub page: u32,
  pub size: u32,
}

impl PageRequest {
  pub fn first(size: u32) -> Self { Self { page: 0, size } }

  /// The page after this one. Stays put at the last representable index.
  pub fn next(self) -> Self {
    Self {
      page: self.page.saturating_add(1),
      ..self
    }
  }
}

impl Default for PageRequest {
  fn default() -> Self { Self::first(20) }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn next_advances_and_keeps_size() {
    let page = PageRequest::first(5).next().next();
    assert_eq!(page, PageRequest { page: 2, size: 5 });
  }

  #[test]
  fn next_saturates_at_last_index() {
    let last = PageRequest {
      page: u32::MAX,
      size: 20,
    };
    assert_eq!(last.next().page, u32::MAX);
  }

  #[test]
  fn page_envelope_is_camel_case() {
    let page: Page<i64> = serde_json::from_value(json!({
      "content": [1, 2],
      "page": 0,
      "size": 2,
      "totalElements": 7,
      "last": false,
    }))
    .unwrap();
    assert_eq!(page.total_elements, 7);
    assert!(!page.last);
    assert_eq!(PageRequest::default().next(), PageRequest { page: 1, size: 20 });
  }
}
