//! Inbound adapters that translate external requests into user service calls
//! while keeping framework details at the edge.

pub mod http;
