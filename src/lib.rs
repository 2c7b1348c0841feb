// rtm-gap: gap analysis for a Requirements Traceability Matrix
//
// This is the library root. Each module corresponds to one stage of the
// flow: catalog data in, matching and suggestion in the middle, the service
// facade and terminal output at the edge.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod output;
pub mod service;
pub mod suggest;

pub use error::{GapError, GapResult};
