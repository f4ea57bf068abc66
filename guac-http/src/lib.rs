// guac-http/src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use api::client::ApiClient;
pub use api::responses::{
    BackendStatus, ConnectionRecord, ConnectionsResponse, UserRecord, UsersResponse,
};
pub use config::Config;
pub use error::FetchError;
pub use state::{Action, Completion, RequestTicket, ViewState};
