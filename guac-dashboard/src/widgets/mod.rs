pub mod connection_list;
pub mod server_status;
pub mod status_message;
pub mod user_list;
