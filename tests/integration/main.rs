//! Integration tests
//!
//! Drive the full router (routes, middleware, layers and an in-memory
//! database) through `tower::ServiceExt::oneshot`.

#[path = "../common/mod.rs"]
mod common;

mod api;
