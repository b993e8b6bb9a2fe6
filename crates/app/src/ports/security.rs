//! Security port — the uniform feed every camera must expose.

use smartcity_domain::report::Report;

/// A device producing a security feed.
pub trait SecurityFeed: Send + Sync {
    /// Start the feed and return its description.
    fn start_feed(&self) -> String;

    /// Start the feed, appending a line to `narration` for every step taken
    /// on the way (translation, encryption, logging) in call order.
    ///
    /// Feeds without intermediate steps need not override this.
    fn start_feed_narrated(&self, _narration: &mut Report) -> String {
        self.start_feed()
    }
}

impl<T: SecurityFeed + ?Sized> SecurityFeed for Box<T> {
    fn start_feed(&self) -> String {
        (**self).start_feed()
    }

    fn start_feed_narrated(&self, narration: &mut Report) -> String {
        (**self).start_feed_narrated(narration)
    }
}

impl<T: SecurityFeed + ?Sized> SecurityFeed for std::sync::Arc<T> {
    fn start_feed(&self) -> String {
        (**self).start_feed()
    }

    fn start_feed_narrated(&self, narration: &mut Report) -> String {
        (**self).start_feed_narrated(narration)
    }
}
