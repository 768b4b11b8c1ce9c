pub mod customer;

pub use customer::{CustomerRepository, MockCustomerRepository};
