//! Resource-URL resolution.
//!
//! The backend hands out file and image references that are either already
//! absolute (`https://cdn…/a.png`) or root-relative (`/files/a.png`). The
//! [`Resolver`] turns them into absolute URLs against whichever origin the
//! client is currently served from, and derives deterministic placeholder
//! images for users without a profile picture.
//!
//! Nothing in this module fails: every input, including malformed strings,
//! maps to a defined result.

use std::fmt;

use url::Url;

use crate::{Error, Result};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Origin used while running against a local backend.
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:8080";

/// Origin used everywhere else.
pub const PRODUCTION_ORIGIN: &str = "https://api.huddle.team";

/// Ports that indicate a local development front-end.
pub const LOCAL_DEV_PORTS: [u16; 3] = [3000, 5173, 4173];

/// Default edge length, in pixels, of generated placeholder images.
pub const DEFAULT_IMAGE_SIZE: u32 = 128;

/// Seed used for placeholders when no identity is known.
pub const DEFAULT_IDENTITY: &str = "default";

const PLACEHOLDER_SERVICE: &str = "https://picsum.photos/";

// ─── Origin ──────────────────────────────────────────────────────────────────

/// A scheme + host (+ port) with no trailing slash, e.g.
/// `http://localhost:8080`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
  /// Parse and normalise an origin. Paths other than `/`, queries and
  /// fragments are rejected so that concatenating a root-relative path stays
  /// well formed.
  pub fn parse(raw: &str) -> Result<Self> {
    let url =
      Url::parse(raw).map_err(|e| Error::InvalidOrigin(raw.to_string(), e))?;
    let is_http = matches!(url.scheme(), "http" | "https");
    if !is_http
      || url.host_str().is_none()
      || url.path() != "/"
      || url.query().is_some()
      || url.fragment().is_some()
    {
      return Err(Error::NotAnOrigin(raw.to_string()));
    }
    Ok(Self(url.origin().ascii_serialization()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Origin {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Location ────────────────────────────────────────────────────────────────

/// Where the client believes it is being served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
  pub hostname: String,
  /// Explicit port only; `None` when the scheme default applies.
  pub port:     Option<u16>,
}

impl Location {
  pub fn new(hostname: impl Into<String>, port: Option<u16>) -> Self {
    Self {
      hostname: hostname.into(),
      port,
    }
  }

  pub fn from_url(url: &Url) -> Self {
    Self::new(url.host_str().unwrap_or_default(), url.port())
  }

  pub fn parse(raw: &str) -> Result<Self> {
    let url =
      Url::parse(raw).map_err(|e| Error::InvalidOrigin(raw.to_string(), e))?;
    Ok(Self::from_url(&url))
  }

  pub fn is_loopback(&self) -> bool {
    matches!(self.hostname.as_str(), "localhost" | "127.0.0.1")
  }
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// The two candidate origins and the ports that select the local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
  pub local_origin:      Origin,
  pub production_origin: Origin,
  pub dev_ports:         Vec<u16>,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self {
      local_origin:      Origin(LOCAL_DEV_ORIGIN.to_string()),
      production_origin: Origin(PRODUCTION_ORIGIN.to_string()),
      dev_ports:         LOCAL_DEV_PORTS.to_vec(),
    }
  }
}

impl ResolverConfig {
  /// Pin both origins to `origin`, e.g. from an API URL override.
  pub fn with_origin_override(mut self, origin: Origin) -> Self {
    self.local_origin = origin.clone();
    self.production_origin = origin;
    self
  }

  /// Treat `port` as an additional local development port.
  pub fn with_dev_port(mut self, port: u16) -> Self {
    if !self.dev_ports.contains(&port) {
      self.dev_ports.push(port);
    }
    self
  }
}

// ─── Resolver ────────────────────────────────────────────────────────────────

/// Resolves backend resource references for one [`Location`].
#[derive(Debug, Clone)]
pub struct Resolver {
  location: Location,
  config:   ResolverConfig,
}

impl Resolver {
  pub fn new(location: Location, config: ResolverConfig) -> Self {
    Self { location, config }
  }

  /// The local development origin for loopback hosts and known dev ports,
  /// the production origin otherwise.
  pub fn resolve_base_origin(&self) -> &Origin {
    let on_dev_port = self
      .location
      .port
      .is_some_and(|p| self.config.dev_ports.contains(&p));
    if self.location.is_loopback() || on_dev_port {
      &self.config.local_origin
    } else {
      &self.config.production_origin
    }
  }

  /// Make `reference` absolute.
  ///
  /// - missing or empty: `None`
  /// - `http://` or `https://`: returned unchanged
  /// - leading `/`: appended to [`Self::resolve_base_origin`]
  /// - anything else: returned unchanged
  pub fn resolve_resource_url(&self, reference: Option<&str>) -> Option<String> {
    let reference = reference.filter(|r| !r.is_empty())?;
    if has_http_scheme(reference) {
      return Some(reference.to_string());
    }
    if reference.starts_with('/') {
      return Some(format!("{}{reference}", self.resolve_base_origin()));
    }
    Some(reference.to_string())
  }

  /// The resolved profile image, or a deterministic placeholder for
  /// `identity` at `size` pixels.
  pub fn resolve_profile_image_url(
    &self,
    reference: Option<&str>,
    identity: Option<&str>,
    size: u32,
  ) -> String {
    self
      .resolve_resource_url(reference)
      .unwrap_or_else(|| placeholder_image_url(identity, size))
  }

  /// The resolved workspace icon. `None` means the caller shows a textual
  /// fallback instead of an image.
  pub fn resolve_workspace_icon_url(&self, reference: Option<&str>) -> Option<String> {
    self.resolve_resource_url(reference)
  }
}

fn has_http_scheme(reference: &str) -> bool {
  let lower = reference
    .get(..8)
    .unwrap_or(reference)
    .to_ascii_lowercase();
  lower.starts_with("http://") || lower.starts_with("https://")
}

// ─── Placeholders ────────────────────────────────────────────────────────────

/// Seeded placeholder image for `identity` (or [`DEFAULT_IDENTITY`]).
///
/// The same `(identity, size)` always produces the same URL.
pub fn placeholder_image_url(identity: Option<&str>, size: u32) -> String {
  let identity = identity
    .filter(|i| !i.is_empty())
    .unwrap_or(DEFAULT_IDENTITY);
  let size = size.to_string();

  match Url::parse(PLACEHOLDER_SERVICE) {
    Ok(mut url) => {
      if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["seed", identity, &size, &size]);
      }
      url.into()
    }
    Err(_) => format!("{PLACEHOLDER_SERVICE}seed/{identity}/{size}/{size}"),
  }
}

/// An image element's current source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
  pub src: String,
}

impl ImageSource {
  pub fn new(src: impl Into<String>) -> Self { Self { src: src.into() } }
}

/// Swap a failed image for the placeholder of `identity`.
pub fn on_image_load_failure(image: &mut ImageSource, identity: Option<&str>, size: u32) {
  image.src = placeholder_image_url(identity, size);
}
