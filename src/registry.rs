// proxyctl - administration CLI for a MariaDB database proxy
// Copyright (C) 2026 proxyctl contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Static command descriptors for the managed resource types.
//!
//! Each subcommand is pure data: an endpoint plus ordered column labels and
//! field-paths. Dispatch only selects a descriptor and hands it to the
//! fetch/render pipeline; there is no per-command logic.

use serde_json::Value;

use crate::path;

/// The resource types exposed by the management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Server,
    Service,
    Monitor,
    Session,
    Filter,
    Module,
}

pub const KINDS: &[ResourceKind] = &[
    ResourceKind::Server,
    ResourceKind::Service,
    ResourceKind::Monitor,
    ResourceKind::Session,
    ResourceKind::Filter,
    ResourceKind::Module,
];

/// Descriptor for a collection listing. `headers[i]` labels the column
/// produced by `paths[i]`; the two lists always have equal length.
#[derive(Debug)]
pub struct ListDescriptor {
    pub endpoint: &'static str,
    pub headers: &'static [&'static str],
    pub paths: &'static [&'static str],
}

/// Descriptor for a single-resource view: ordered (label, path) pairs
/// rendered as a transposed label/value table.
#[derive(Debug)]
pub struct ShowDescriptor {
    pub endpoint: &'static str,
    pub fields: &'static [(&'static str, &'static str)],
}

static LIST_SERVERS: ListDescriptor = ListDescriptor {
    endpoint: "servers",
    headers: &["Server", "Address", "Port", "Connections", "Status"],
    paths: &[
        "id",
        "attributes.parameters.address",
        "attributes.parameters.port",
        "attributes.statistics.connections",
        "attributes.status",
    ],
};

static LIST_SERVICES: ListDescriptor = ListDescriptor {
    endpoint: "services",
    headers: &[
        "Service",
        "Router",
        "Connections",
        "Total Connections",
        "Servers",
    ],
    paths: &[
        "id",
        "attributes.router",
        "attributes.connections",
        "attributes.total_connections",
        "relationships.servers.data[].id",
    ],
};

static LIST_MONITORS: ListDescriptor = ListDescriptor {
    endpoint: "monitors",
    headers: &["Monitor", "Status", "Servers"],
    paths: &["id", "attributes.state", "relationships.servers.data[].id"],
};

static LIST_SESSIONS: ListDescriptor = ListDescriptor {
    endpoint: "sessions",
    headers: &["Id", "Service", "User", "Host"],
    paths: &[
        "id",
        "relationships.services.data[].id",
        "attributes.user",
        "attributes.remote",
    ],
};

static LIST_FILTERS: ListDescriptor = ListDescriptor {
    endpoint: "filters",
    headers: &["Filter", "Service", "Module"],
    paths: &[
        "id",
        "relationships.services.data[].id",
        "attributes.module",
    ],
};

static LIST_MODULES: ListDescriptor = ListDescriptor {
    endpoint: "modules",
    headers: &["Module", "Type", "Version"],
    paths: &["id", "attributes.module_type", "attributes.version"],
};

static SHOW_SERVER: ShowDescriptor = ShowDescriptor {
    endpoint: "servers",
    fields: &[
        ("Server", "id"),
        ("Address", "attributes.parameters.address"),
        ("Port", "attributes.parameters.port"),
        ("Status", "attributes.status"),
        ("Services", "relationships.services.data[].id"),
        ("Monitors", "relationships.monitors.data[].id"),
        ("Master ID", "attributes.master_id"),
        ("Node ID", "attributes.node_id"),
        ("Slave Server IDs", "attributes.slaves"),
        ("Statistics", "attributes.statistics"),
    ],
};

static SHOW_SERVICE: ShowDescriptor = ShowDescriptor {
    endpoint: "services",
    fields: &[
        ("Service", "id"),
        ("Router", "attributes.router"),
        ("Started At", "attributes.started"),
        ("Current Connections", "attributes.connections"),
        ("Total Connections", "attributes.total_connections"),
        ("Servers", "relationships.servers.data[].id"),
        ("Parameters", "attributes.parameters"),
        ("Router Diagnostics", "attributes.router_diagnostics"),
    ],
};

static SHOW_MONITOR: ShowDescriptor = ShowDescriptor {
    endpoint: "monitors",
    fields: &[
        ("Monitor", "id"),
        ("Status", "attributes.state"),
        ("Servers", "relationships.servers.data[].id"),
        ("Parameters", "attributes.parameters"),
        ("Monitor Diagnostics", "attributes.monitor_diagnostics"),
    ],
};

static SHOW_SESSION: ShowDescriptor = ShowDescriptor {
    endpoint: "sessions",
    fields: &[
        ("Id", "id"),
        ("Service", "relationships.services.data[].id"),
        ("Status", "attributes.state"),
        ("User", "attributes.user"),
        ("Host", "attributes.remote"),
        ("Connected", "attributes.connected"),
        ("Idle", "attributes.idle"),
    ],
};

static SHOW_FILTER: ShowDescriptor = ShowDescriptor {
    endpoint: "filters",
    fields: &[
        ("Filter", "id"),
        ("Module", "attributes.module"),
        ("Services", "relationships.services.data[].id"),
        ("Parameters", "attributes.parameters"),
    ],
};

static SHOW_MODULE: ShowDescriptor = ShowDescriptor {
    endpoint: "modules",
    fields: &[
        ("Module", "id"),
        ("Type", "attributes.module_type"),
        ("Version", "attributes.version"),
        ("Maturity", "attributes.status"),
        ("Description", "attributes.description"),
        ("Parameters", "attributes.parameters"),
        ("Commands", "attributes.commands"),
    ],
};

impl ResourceKind {
    pub fn list_descriptor(self) -> &'static ListDescriptor {
        match self {
            ResourceKind::Server => &LIST_SERVERS,
            ResourceKind::Service => &LIST_SERVICES,
            ResourceKind::Monitor => &LIST_MONITORS,
            ResourceKind::Session => &LIST_SESSIONS,
            ResourceKind::Filter => &LIST_FILTERS,
            ResourceKind::Module => &LIST_MODULES,
        }
    }

    pub fn show_descriptor(self) -> &'static ShowDescriptor {
        match self {
            ResourceKind::Server => &SHOW_SERVER,
            ResourceKind::Service => &SHOW_SERVICE,
            ResourceKind::Monitor => &SHOW_MONITOR,
            ResourceKind::Session => &SHOW_SESSION,
            ResourceKind::Filter => &SHOW_FILTER,
            ResourceKind::Module => &SHOW_MODULE,
        }
    }
}

impl ListDescriptor {
    /// Project every element of the document's `data` array into one table
    /// row per resource. Fields a resource lacks render as empty cells.
    pub fn rows(&self, document: &Value) -> Vec<Vec<String>> {
        document
            .get("data")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        self.paths
                            .iter()
                            .map(|p| path::extract_or(item, p, ""))
                            .collect()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl ShowDescriptor {
    /// Project the document's single `data` resource into (label, value)
    /// rows, one per descriptor field.
    pub fn rows(&self, document: &Value) -> Vec<(String, String)> {
        let resource = document.get("data").unwrap_or(&Value::Null);
        self.fields
            .iter()
            .map(|(label, p)| (label.to_string(), path::extract_or(resource, p, "")))
            .collect()
    }

    pub fn object_endpoint(&self, id: &str) -> String {
        format!("{}/{}", self.endpoint, id)
    }
}
