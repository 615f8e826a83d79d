use super::*;

pub mod query_ping_c2s;
pub use query_ping_c2s::QueryPingC2s;
pub mod query_pong_s2c;
pub use query_pong_s2c::QueryPongS2c;
pub mod query_request_c2s;
pub use query_request_c2s::QueryRequestC2s;
pub mod query_response_s2c;
pub use query_response_s2c::QueryResponseS2c;
