//! In-memory state behind the dashboard view.
//!
//! Each slice is replaced wholesale by a successful fetch and left alone by
//! a failed one. Every fetch is identified by a [`RequestTicket`]; only the
//! most recently issued ticket of an action may write its slice.

use crate::api::responses::{ConnectionRecord, ConnectionsResponse, UserRecord, UsersResponse};
use crate::error::FetchError;
use tracing::{debug, warn};

pub const UNEXPECTED_USERS: &str = "Unexpected response format for users.";
pub const UNEXPECTED_CONNECTIONS: &str = "Unexpected response format for connections.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Users,
    Connections,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    action: Action,
    generation: u64,
}

impl RequestTicket {
    pub fn action(&self) -> Action {
        self.action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request for the same action was issued; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    message: String,
    users: Vec<UserRecord>,
    connections: Vec<ConnectionRecord>,
    users_generation: u64,
    connections_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn connections(&self) -> &[ConnectionRecord] {
        &self.connections
    }

    /// Marks the start of a fetch, superseding any in-flight one for `action`.
    pub fn begin(&mut self, action: Action) -> RequestTicket {
        let generation = match action {
            Action::Users => &mut self.users_generation,
            Action::Connections => &mut self.connections_generation,
        };
        *generation += 1;
        RequestTicket {
            action,
            generation: *generation,
        }
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        let latest = match ticket.action {
            Action::Users => self.users_generation,
            Action::Connections => self.connections_generation,
        };
        ticket.generation == latest
    }

    pub fn complete_users(
        &mut self,
        ticket: RequestTicket,
        result: Result<UsersResponse, FetchError>,
    ) -> Completion {
        if ticket.action != Action::Users || !self.is_current(ticket) {
            debug!("Discarding stale users response");
            return Completion::Stale;
        }

        match result.map(UsersResponse::into_users) {
            Ok(Some(users)) => {
                self.message = format!("Fetched {} users.", users.len());
                self.users = users;
            }
            Ok(None) => {
                warn!("Users response had an unexpected shape");
                self.message = UNEXPECTED_USERS.to_string();
            }
            Err(e) => self.fail(e),
        }
        Completion::Applied
    }

    pub fn complete_connections(
        &mut self,
        ticket: RequestTicket,
        result: Result<ConnectionsResponse, FetchError>,
    ) -> Completion {
        if ticket.action != Action::Connections || !self.is_current(ticket) {
            debug!("Discarding stale connections response");
            return Completion::Stale;
        }

        match result.map(ConnectionsResponse::into_connections) {
            Ok(Some(connections)) => {
                self.message = format!("Fetched {} connections.", connections.len());
                self.connections = connections;
            }
            Ok(None) => {
                warn!("Connections response had an unexpected shape");
                self.message = UNEXPECTED_CONNECTIONS.to_string();
            }
            Err(e) => self.fail(e),
        }
        Completion::Applied
    }

    fn fail(&mut self, error: FetchError) {
        warn!("Fetch failed: {}", error);
        self.message = format!("Error: {error}");
    }
}
