use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

const HOSTNAME_ATTRIBUTE: &str = "guacd-hostname";
const MISSING_HOSTNAME: &str = "N/A";

/// One account as returned by `GET /users`. The client enforces no schema.
#[derive(Debug, Clone, PartialEq)]
pub enum UserRecord {
    Name(String),
    Other(Value),
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Self::Name(name),
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Body of `GET /users`.
#[derive(Debug, Clone, PartialEq)]
pub enum UsersResponse {
    /// `[...]`
    List(Vec<UserRecord>),
    /// `{"users": [...]}`
    Wrapped(Vec<UserRecord>),
    Unrecognized,
}

impl From<Value> for UsersResponse {
    fn from(body: Value) -> Self {
        match body {
            Value::Array(items) => Self::List(items.into_iter().map(UserRecord::from).collect()),
            Value::Object(mut fields) => match fields.remove("users") {
                Some(Value::Array(items)) => {
                    Self::Wrapped(items.into_iter().map(UserRecord::from).collect())
                }
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }
}

impl UsersResponse {
    pub fn into_users(self) -> Option<Vec<UserRecord>> {
        match self {
            Self::List(users) | Self::Wrapped(users) => Some(users),
            Self::Unrecognized => None,
        }
    }
}

/// A connection normalized for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRecord {
    pub id: String,
    pub name: String,
    pub protocol: String,
    pub hostname: String,
    /// Raw `activeConnections` value, usually a number.
    pub active: Value,
}

impl ConnectionRecord {
    /// Builds a record from one entry of the `connections` mapping. Missing
    /// fields become empty strings; a missing or empty `guacd-hostname`
    /// attribute becomes "N/A".
    pub fn from_entry(id: String, connection: &Value) -> Self {
        let text = |field: &str| {
            connection
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let hostname = connection
            .get("attributes")
            .and_then(|attributes| attributes.get(HOSTNAME_ATTRIBUTE))
            .and_then(Value::as_str)
            .filter(|hostname| !hostname.is_empty())
            .unwrap_or(MISSING_HOSTNAME)
            .to_string();

        Self {
            id,
            name: text("name"),
            protocol: text("protocol"),
            hostname,
            active: connection
                .get("activeConnections")
                .cloned()
                .unwrap_or(Value::Null),
        }
    }

    pub fn active_label(&self) -> String {
        match &self.active {
            Value::Null => String::new(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Name: {} | Protocol: {} | Host: {} | Active: {}",
            self.name,
            self.protocol,
            self.hostname,
            self.active_label()
        )
    }
}

/// Body of `GET /connections`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionsResponse {
    /// `{"connections": {"<id>": {...}, ...}}`, in server order.
    Listed(Vec<ConnectionRecord>),
    Unrecognized,
}

impl From<Value> for ConnectionsResponse {
    fn from(body: Value) -> Self {
        match body {
            Value::Object(mut fields) => match fields.remove("connections") {
                Some(Value::Object(connections)) => Self::Listed(normalize(connections)),
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }
}

impl ConnectionsResponse {
    pub fn into_connections(self) -> Option<Vec<ConnectionRecord>> {
        match self {
            Self::Listed(connections) => Some(connections),
            Self::Unrecognized => None,
        }
    }
}

fn normalize(connections: Map<String, Value>) -> Vec<ConnectionRecord> {
    connections
        .into_iter()
        .map(|(id, connection)| ConnectionRecord::from_entry(id, &connection))
        .collect()
}

/// Body of the backend root endpoint, `GET /`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendStatus {
    pub status: String,
    #[serde(default)]
    pub guacamole: Option<String>,
}
