//! Security module — exposes a camera feed through an adapter/decorator chain.

use smartcity_domain::report::Report;

use crate::ports::SecurityFeed;

/// Security subsystem owning one (usually decorated) feed.
pub struct SecurityModule {
    feed: Box<dyn SecurityFeed>,
}

impl SecurityModule {
    pub fn new(feed: impl SecurityFeed + 'static) -> Self {
        tracing::info!("security module initialized with adapted and decorated camera feed");
        Self {
            feed: Box::new(feed),
        }
    }

    /// Line announcing how the module was set up.
    pub fn initialized(&self) -> Report {
        Report::from("Security Module: Initialized with an adapted and decorated camera feed.")
    }

    pub fn deploy_security_system(&self) -> Report {
        tracing::info!("security system deployed");
        Report::from("Security Module: City-wide security system deployed.")
    }

    /// Start the feed; the report holds every intermediate step followed by
    /// the feed result.
    pub fn check_feed(&self) -> Report {
        let mut report = Report::new();
        let result = self.feed.start_feed_narrated(&mut report);
        report.line(result);
        report
    }

    pub fn get_status(&self) -> Report {
        Report::from("Security Module Status: Security feed is active and monitored.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed_decorator::FeedDecorator;

    struct Camera;

    impl SecurityFeed for Camera {
        fn start_feed(&self) -> String {
            "camera 3 online".to_string()
        }
    }

    #[test]
    fn should_return_feed_output_when_checked() {
        let module = SecurityModule::new(FeedDecorator::new(Camera));
        let report = module.check_feed();
        assert_eq!(
            report.lines().last().map(String::as_str),
            Some("Encrypted and Logged: camera 3 online")
        );
    }

    #[test]
    fn should_list_decorator_steps_before_feed_result() {
        let module = SecurityModule::new(FeedDecorator::new(Camera));
        assert_eq!(
            module.check_feed().lines(),
            [
                "Decorator: Encrypting security feed...",
                "Decorator: Logging feed activity...",
                "Encrypted and Logged: camera 3 online",
            ]
        );
    }

    #[test]
    fn should_accept_undecorated_feed() {
        let module = SecurityModule::new(Camera);
        assert_eq!(module.check_feed().to_string(), "camera 3 online");
    }

    #[test]
    fn should_report_deployment_and_status() {
        let module = SecurityModule::new(Camera);
        assert!(module.deploy_security_system().contains("deployed"));
        assert!(module.get_status().contains("active and monitored"));
        assert!(module.initialized().contains("adapted and decorated"));
    }
}
