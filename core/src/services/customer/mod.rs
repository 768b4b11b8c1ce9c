//! Customer domain service: lifecycle, uniqueness, and profile images.

mod service;

#[cfg(test)]
mod tests;

pub use service::CustomerService;
