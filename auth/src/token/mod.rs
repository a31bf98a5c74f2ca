pub mod claims;
pub mod clock;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use claims::TokenKind;
pub use clock::Clock;
pub use clock::SystemClock;
pub use errors::TokenError;
pub use service::TokenPair;
pub use service::TokenService;
