pub mod coffee;
pub mod credential;

pub use coffee::PostgresCoffeeRepository;
pub use credential::PostgresCredentialRepository;
