//! Demo data seeding
//!
//! Inserts a randomly generated customer at startup when `SEED_DEMO_DATA` is
//! set. Handy for local development against an empty database.

use rand::seq::SliceRandom;
use rand::Rng;

use cust_core::domain::entities::customer::Gender;
use cust_core::errors::DomainError;
use cust_core::repositories::CustomerRepository;
use cust_core::services::customer::CustomerService;
use cust_core::services::hasher::PasswordHasherTrait;
use cust_core::services::storage::BlobStoreTrait;

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jamila", "Marco", "Priya", "Liam", "Sofia", "Noah", "Amara",
];

const LAST_NAMES: &[&str] = &[
    "Nguyen", "Okafor", "Silva", "Kowalski", "Haddad", "Ito", "Berg", "Moreau",
];

/// Registers one random demo customer, tolerating an email collision
pub async fn seed_demo_customer<R, H, B>(service: &CustomerService<R, H, B>)
where
    R: CustomerRepository,
    H: PasswordHasherTrait,
    B: BlobStoreTrait,
{
    let (name, email, age, gender) = {
        let mut rng = rand::thread_rng();
        let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Nguyen");
        (
            format!("{} {}", first, last),
            format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            rng.gen_range(16..99),
            if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            },
        )
    };

    match service
        .register(name.clone(), email.clone(), "password", age, gender)
        .await
    {
        Ok(id) => tracing::info!("seeded demo customer {} ({}) with id {}", name, email, id),
        Err(DomainError::DuplicateEmail) => {
            tracing::info!("demo customer {} already present, skipping", email)
        }
        Err(e) => tracing::warn!("failed to seed demo customer: {}", e),
    }
}
