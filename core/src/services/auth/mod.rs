//! Authentication flow: credential verification and token issuance.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
