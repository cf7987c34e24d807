#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod header;
pub mod manager;
pub mod message;
pub mod pipeline;

pub use header::ENRICHMENT_REQUEST_HEADER;
pub use manager::HttpManager;
pub use message::{HttpMessage, MessageAdapter};
pub use pipeline::pin_requests;
