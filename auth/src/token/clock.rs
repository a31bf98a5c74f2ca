use chrono::DateTime;
use chrono::Utc;

/// Time source for token issuance and expiry checks.
///
/// Token validity is a pure function of input, secret, and current time, so
/// tests inject a fixed clock to make expiry behavior deterministic.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
