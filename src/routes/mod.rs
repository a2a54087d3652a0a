// Routes module - capture parsing and pre/post comparison

pub mod diff;
pub mod parser;

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Routing context used for route lines that appear before any VRF header.
pub const DEFAULT_VRF: &str = "default";

/// One routing-table entry as reported by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub vrf: String,
    pub prefix: String, // canonical CIDR notation
    pub next_hop: String,
    pub interface: String,
    pub protocol: String,
    pub metric: Option<u32>,
    pub preference: Option<u32>,
}

/// Fields that decide whether two records describe the same route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub vrf: String,
    pub prefix: String,
    pub next_hop: String,
    pub interface: String,
}

impl RouteRecord {
    pub fn key(&self) -> RouteKey {
        RouteKey {
            vrf: self.vrf.clone(),
            prefix: self.prefix.clone(),
            next_hop: self.next_hop.clone(),
            interface: self.interface.clone(),
        }
    }
}

impl fmt::Display for RouteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        write!(
            f,
            "{:<20} via {:<18} {:<16} [{}]",
            self.prefix,
            or_dash(&self.next_hop),
            or_dash(&self.interface),
            or_dash(&self.protocol)
        )?;
        if let (Some(pref), Some(metric)) = (self.preference, self.metric) {
            write!(f, " {}/{}", pref, metric)?;
        }
        Ok(())
    }
}

/// A line that looked like route data but could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub line: usize,
    pub text: String,
    pub reason: String,
}

/// Routes of a single VRF in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct VrfRoutes {
    name: String,
    routes: Vec<RouteRecord>,
    index: HashMap<RouteKey, usize>,
}

impl VrfRoutes {
    fn new(name: &str) -> Self {
        VrfRoutes {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    pub fn get(&self, key: &RouteKey) -> Option<&RouteRecord> {
        self.index.get(key).map(|&i| &self.routes[i])
    }

    pub fn contains(&self, key: &RouteKey) -> bool {
        self.index.contains_key(key)
    }

    /// Insert a record, replacing any earlier record with the same identity in place.
    /// Returns true when an earlier record was replaced.
    fn upsert(&mut self, record: RouteRecord) -> bool {
        let key = record.key();
        match self.index.get(&key) {
            Some(&i) => {
                self.routes[i] = record;
                true
            }
            None => {
                self.index.insert(key, self.routes.len());
                self.routes.push(record);
                false
            }
        }
    }
}

/// Parsed capture: VRFs in discovery order plus non-fatal warnings.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    vrfs: Vec<VrfRoutes>,
    index: HashMap<String, usize>,
    warnings: Vec<ParseWarning>,
}

impl ParseResult {
    pub fn vrfs(&self) -> impl Iterator<Item = &VrfRoutes> {
        self.vrfs.iter()
    }

    pub fn vrf(&self, name: &str) -> Option<&VrfRoutes> {
        self.index.get(name).map(|&i| &self.vrfs[i])
    }

    pub fn vrf_names(&self) -> impl Iterator<Item = &str> {
        self.vrfs.iter().map(|v| v.name())
    }

    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    pub fn route_count(&self) -> usize {
        self.vrfs.iter().map(|v| v.routes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.route_count() == 0
    }

    pub(crate) fn insert(&mut self, record: RouteRecord) -> bool {
        let slot = match self.index.get(&record.vrf) {
            Some(&i) => i,
            None => {
                self.index.insert(record.vrf.clone(), self.vrfs.len());
                self.vrfs.push(VrfRoutes::new(&record.vrf));
                self.vrfs.len() - 1
            }
        };
        self.vrfs[slot].upsert(record)
    }

    pub(crate) fn warn(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }
}

/// Read a capture file and parse it with the given parser.
pub fn read_capture(path: &Path, parser: &parser::Parser) -> AppResult<ParseResult> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let result = parser.parse(&text);
    tracing::info!(
        "Parsed {}: {} route(s) in {} VRF(s), {} warning(s)",
        path.display(),
        result.route_count(),
        result.vrfs.len(),
        result.warnings.len()
    );
    if result.is_empty() {
        tracing::warn!("No routes found in {}", path.display());
    }

    Ok(result)
}
