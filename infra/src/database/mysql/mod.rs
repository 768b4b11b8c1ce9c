pub mod customer_repository_impl;

pub use customer_repository_impl::MySqlCustomerRepository;
