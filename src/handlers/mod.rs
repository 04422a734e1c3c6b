//! HTTP handlers for the guest registry, the comment book and service probes.

pub mod comments;
pub mod common;
pub mod guests;
