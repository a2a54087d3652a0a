// Pre/post comparison engine, grouped by VRF

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::{ParseResult, RouteRecord, VrfRoutes};

/// Same identity on both sides, but protocol, metric or preference moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDrift {
    pub pre: RouteRecord,
    pub post: RouteRecord,
    pub changes: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffCounts {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub drifted: usize,
}

/// Comparison of one VRF.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VrfDiff {
    #[serde(skip)]
    pub vrf: String,
    pub added: Vec<RouteRecord>,
    pub removed: Vec<RouteRecord>,
    pub unchanged: Vec<RouteRecord>,
    pub drifted: Vec<RouteDrift>,
    pub counts: DiffCounts,
}

impl VrfDiff {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub vrfs: usize,
    pub pre_routes: usize,
    pub post_routes: usize,
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub drifted: usize,
}

/// Full comparison: VRFs in pre discovery order, then post-only VRFs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    vrfs: Vec<VrfDiff>,
    summary: DiffSummary,
}

impl DiffResult {
    pub fn vrfs(&self) -> impl Iterator<Item = &VrfDiff> {
        self.vrfs.iter()
    }

    pub fn vrf(&self, name: &str) -> Option<&VrfDiff> {
        self.vrfs.iter().find(|v| v.vrf == name)
    }

    pub fn summary(&self) -> &DiffSummary {
        &self.summary
    }

    pub fn has_changes(&self) -> bool {
        self.summary.added > 0 || self.summary.removed > 0
    }
}

// VRF keys go out in comparison order; serde_json's own map would sort them.
struct VrfMap<'a>(&'a [VrfDiff]);

impl Serialize for VrfMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for vrf in self.0 {
            map.serialize_entry(&vrf.vrf, vrf)?;
        }
        map.end()
    }
}

impl Serialize for DiffResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("vrfs", &VrfMap(&self.vrfs))?;
        map.serialize_entry("summary", &self.summary)?;
        map.end()
    }
}

/// Compare two parsed captures.
pub fn diff(pre: &ParseResult, post: &ParseResult) -> DiffResult {
    let empty = VrfRoutes::default();

    let mut names: Vec<&str> = pre.vrf_names().collect();
    for name in post.vrf_names() {
        if pre.vrf(name).is_none() {
            names.push(name);
        }
    }

    let mut summary = DiffSummary {
        vrfs: names.len(),
        pre_routes: pre.route_count(),
        post_routes: post.route_count(),
        ..Default::default()
    };

    let vrfs: Vec<VrfDiff> = names
        .into_iter()
        .map(|name| {
            let vrf = diff_vrf(
                name,
                pre.vrf(name).unwrap_or(&empty),
                post.vrf(name).unwrap_or(&empty),
            );
            summary.added += vrf.counts.added;
            summary.removed += vrf.counts.removed;
            summary.unchanged += vrf.counts.unchanged;
            summary.drifted += vrf.counts.drifted;
            vrf
        })
        .collect();

    tracing::info!(
        "Compared {} VRF(s): {} added, {} removed, {} unchanged",
        summary.vrfs,
        summary.added,
        summary.removed,
        summary.unchanged
    );

    DiffResult { vrfs, summary }
}

fn diff_vrf(name: &str, pre: &VrfRoutes, post: &VrfRoutes) -> VrfDiff {
    let removed: Vec<RouteRecord> = pre
        .routes()
        .iter()
        .filter(|r| !post.contains(&r.key()))
        .cloned()
        .collect();

    let mut added = Vec::new();
    let mut unchanged = Vec::new();
    let mut drifted = Vec::new();
    for route in post.routes() {
        match pre.get(&route.key()) {
            None => added.push(route.clone()),
            Some(before) => {
                let changes = attribute_changes(before, route);
                if !changes.is_empty() {
                    drifted.push(RouteDrift {
                        pre: before.clone(),
                        post: route.clone(),
                        changes,
                    });
                }
                unchanged.push(route.clone());
            }
        }
    }

    tracing::debug!(
        "VRF {}: {} added, {} removed, {} unchanged, {} drifted",
        name,
        added.len(),
        removed.len(),
        unchanged.len(),
        drifted.len()
    );

    let counts = DiffCounts {
        added: added.len(),
        removed: removed.len(),
        unchanged: unchanged.len(),
        drifted: drifted.len(),
    };

    VrfDiff {
        vrf: name.to_string(),
        added,
        removed,
        unchanged,
        drifted,
        counts,
    }
}

fn attribute_changes(pre: &RouteRecord, post: &RouteRecord) -> Vec<String> {
    fn show(value: Option<u32>) -> String {
        value.map_or_else(|| "none".to_string(), |v| v.to_string())
    }

    let mut changes = Vec::new();
    if pre.protocol != post.protocol {
        changes.push(format!("protocol: {} -> {}", pre.protocol, post.protocol));
    }
    if pre.metric != post.metric {
        changes.push(format!("metric: {} -> {}", show(pre.metric), show(post.metric)));
    }
    if pre.preference != post.preference {
        changes.push(format!(
            "preference: {} -> {}",
            show(pre.preference),
            show(post.preference)
        ));
    }
    changes
}
