//! HTTP route handlers

pub mod auth;
pub mod categories;
pub mod players;
pub mod progress;
pub mod questions;
pub mod validate;
