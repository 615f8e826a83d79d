use valence_core::protocol::PacketState;

use super::*;

pub mod login_compression_s2c;
pub mod login_disconnect_s2c;
pub mod login_hello_c2s;
pub mod login_hello_s2c;
pub mod login_key_c2s;
pub mod login_query_request_s2c;
pub mod login_query_response_c2s;
pub mod login_success_s2c;
