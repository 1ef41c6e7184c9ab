// src/platforms/registry.rs
// =============================================================================
// PlatformSpec and PlatformRegistry.
//
// The registry is plain data: a list of (name, URL template) records loaded
// once at startup and shared read-only by every check. There is no dynamic
// registration; the only ways to change it are the config file (extra or
// replacement platforms) and the --platform filter, both applied before the
// scan starts.
//
// Rust concepts:
// - Validation in constructors: a PlatformSpec that exists is a valid one
// - Slices (&[T]): borrowing the list without copying it
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

use super::builtin::BUILTIN_PLATFORMS;
use crate::error::{HunterError, Result};

/// Placeholder replaced with the username in every URL template.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// One platform: its name and the profile URL template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub name: String,
    #[serde(rename = "url")]
    pub url_template: String,
}

impl PlatformSpec {
    /// Creates a platform after checking that the template has the
    /// `{username}` placeholder and renders to an http(s) URL.
    pub fn new(name: impl Into<String>, url_template: impl Into<String>) -> Result<Self> {
        let spec = Self {
            name: name.into(),
            url_template: url_template.into(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Substitutes the username into the template.
    ///
    /// Example:
    ///   template = "https://github.com/{username}"
    ///   profile_url("alice") = "https://github.com/alice"
    pub fn profile_url(&self, username: &str) -> String {
        self.url_template.replace(USERNAME_PLACEHOLDER, username)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| HunterError::InvalidPlatform {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("platform name is empty"));
        }
        if !self.url_template.contains(USERNAME_PLACEHOLDER) {
            return Err(invalid("URL template has no {username} placeholder"));
        }

        let sample = self.profile_url("username");
        let parsed = Url::parse(&sample).map_err(|e| invalid(&format!("bad URL template: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(invalid("URL template must be http or https"));
        }

        Ok(())
    }
}

/// The set of platforms a scan runs against.
#[derive(Debug, Clone, Default)]
pub struct PlatformRegistry {
    platforms: Vec<PlatformSpec>,
}

impl PlatformRegistry {
    /// The built-in table of 180+ platforms.
    pub fn builtin() -> Self {
        let platforms = BUILTIN_PLATFORMS
            .iter()
            .map(|(name, template)| PlatformSpec {
                name: (*name).to_string(),
                url_template: (*template).to_string(),
            })
            .collect();
        Self { platforms }
    }

    /// Builds a registry from arbitrary specs. Names must be unique.
    pub fn from_specs(specs: Vec<PlatformSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &specs {
            spec.validate()?;
            if !seen.insert(spec.name.to_lowercase()) {
                return Err(HunterError::InvalidPlatform {
                    name: spec.name.clone(),
                    reason: "duplicate platform name".to_string(),
                });
            }
        }
        Ok(Self { platforms: specs })
    }

    /// Adds platforms from configuration. A platform whose name is already
    /// present replaces the existing template in place.
    pub fn merge(mut self, extra: Vec<PlatformSpec>) -> Result<Self> {
        for spec in extra {
            spec.validate()?;
            match self
                .platforms
                .iter_mut()
                .find(|p| p.name.eq_ignore_ascii_case(&spec.name))
            {
                Some(existing) => existing.url_template = spec.url_template,
                None => self.platforms.push(spec),
            }
        }
        Ok(self)
    }

    /// Keeps only the named platforms (case-insensitive), in registry order.
    /// An empty filter keeps everything.
    pub fn select(self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self);
        }

        for name in names {
            if self.get(name).is_none() {
                return Err(HunterError::UnknownPlatform(name.clone()));
            }
        }

        let platforms = self
            .platforms
            .into_iter()
            .filter(|p| names.iter().any(|n| n.eq_ignore_ascii_case(&p.name)))
            .collect();
        Ok(Self { platforms })
    }

    pub fn get(&self, name: &str) -> Option<&PlatformSpec> {
        self.platforms
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn as_slice(&self) -> &[PlatformSpec] {
        &self.platforms
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlatformSpec> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
