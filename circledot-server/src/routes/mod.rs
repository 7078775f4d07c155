//! HTTP route handlers

pub mod game;
pub mod status;
