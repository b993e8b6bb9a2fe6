//! Feed decorator — adds encryption and activity logging around any feed.

use smartcity_domain::report::Report;

use crate::ports::SecurityFeed;

/// Prefix placed in front of a decorated feed result.
pub const DECORATED_PREFIX: &str = "Encrypted and Logged: ";

const ENCRYPT_STEP: &str = "Decorator: Encrypting security feed...";
const LOG_STEP: &str = "Decorator: Logging feed activity...";

/// Wraps a [`SecurityFeed`] with a fixed encrypt step before and a log step
/// after the inner call.
///
/// A decorator is itself a [`SecurityFeed`], so decorators nest freely.
pub struct FeedDecorator<D> {
    inner: D,
}

impl<D: SecurityFeed> FeedDecorator<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Access the wrapped feed.
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: SecurityFeed> SecurityFeed for FeedDecorator<D> {
    fn start_feed(&self) -> String {
        self.start_feed_narrated(&mut Report::new())
    }

    fn start_feed_narrated(&self, narration: &mut Report) -> String {
        tracing::debug!("encrypting security feed");
        narration.line(ENCRYPT_STEP);
        let result = self.inner.start_feed_narrated(narration);
        tracing::debug!(bytes = result.len(), "logging feed activity");
        narration.line(LOG_STEP);
        format!("{DECORATED_PREFIX}{result}")
    }
}
