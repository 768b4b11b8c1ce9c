//! Authentication route handlers

pub mod login;
