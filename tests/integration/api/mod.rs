//! API integration tests

mod auth_test;
mod users_test;
