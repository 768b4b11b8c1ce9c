//! Customer route handlers, one file per operation

pub mod delete;
pub mod get;
pub mod list;
pub mod profile_image;
pub mod register;
pub mod update;
