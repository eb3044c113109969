//! Client configuration.
//!
//! Settings are layered: an optional TOML file, then `HUDDLE_*` environment
//! variables. Command-line flags are applied on top by the binary.

use std::{path::Path, time::Duration};

use huddle_core::resource::{Location, Origin, PRODUCTION_ORIGIN, Resolver, ResolverConfig};
use serde::{Deserialize, de::DeserializeOwned};

use crate::Result;

/// Connection settings for the Huddle API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
  /// Overrides both built-in origins (`HUDDLE_API_URL`).
  pub api_url:      Option<String>,
  /// URL the client considers itself served from (`HUDDLE_LOCATION`).
  /// Defaults to the production origin.
  pub location:     Option<String>,
  /// An extra local development port (`HUDDLE_DEV_PORT`).
  pub dev_port:     Option<u16>,
  /// Overall per-request timeout.
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_url:      None,
      location:     None,
      dev_port:     None,
      timeout_secs: 30,
    }
  }
}

impl ClientConfig {
  /// Read `path` (if given) and the environment.
  pub fn load(path: Option<&Path>) -> Result<Self> { load_layered(path) }

  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

  /// Build the resource resolver these settings describe.
  pub fn resolver(&self) -> Result<Resolver> {
    let mut config = ResolverConfig::default();
    if let Some(api_url) = self.api_url.as_deref().filter(|u| !u.is_empty()) {
      config = config.with_origin_override(Origin::parse(api_url)?);
    }
    if let Some(port) = self.dev_port {
      config = config.with_dev_port(port);
    }
    let location = Location::parse(
      self
        .location
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or(PRODUCTION_ORIGIN),
    )?;
    Ok(Resolver::new(location, config))
  }
}

/// Deserialise `T` from an optional TOML file overlaid with `HUDDLE_*`
/// environment variables.
pub fn load_layered<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
  let mut builder = config::Config::builder();
  if let Some(path) = path {
    builder = builder.add_source(config::File::from(path).required(true));
  }
  let settings = builder
    .add_source(config::Environment::with_prefix("HUDDLE").try_parsing(true))
    .build()?;
  Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use huddle_core::resource::LOCAL_DEV_ORIGIN;

  use super::*;

  #[test]
  fn default_resolves_to_production() {
    let resolver = ClientConfig::default().resolver().unwrap();
    assert_eq!(resolver.resolve_base_origin().as_str(), PRODUCTION_ORIGIN);
  }

  #[test]
  fn localhost_location_resolves_to_local_origin() {
    let config = ClientConfig {
      location: Some("http://localhost:3000".into()),
      ..Default::default()
    };
    let resolver = config.resolver().unwrap();
    assert_eq!(resolver.resolve_base_origin().as_str(), LOCAL_DEV_ORIGIN);
  }

  #[test]
  fn api_url_override_applies() {
    let config = ClientConfig {
      api_url: Some("http://127.0.0.1:9000".into()),
      ..Default::default()
    };
    let resolver = config.resolver().unwrap();
    assert_eq!(resolver.resolve_base_origin().as_str(), "http://127.0.0.1:9000");
  }

  #[test]
  fn bad_api_url_is_rejected() {
    let config = ClientConfig {
      api_url: Some("not a url".into()),
      ..Default::default()
    };
    assert!(config.resolver().is_err());
  }

  #[test]
  fn loads_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "api_url = \"http://127.0.0.1:7000\"\ntimeout_secs = 5").unwrap();

    let config = ClientConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.api_url.as_deref(), Some("http://127.0.0.1:7000"));
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert_eq!(config.dev_port, None);
  }
}
