//! Legacy security camera and the adapter exposing it as a [`SecurityFeed`].

use smartcity_app::ports::SecurityFeed;
use smartcity_domain::report::Report;

/// Camera speaking a vendor protocol with its own method name.
#[derive(Debug, Default)]
pub struct LegacySecurityCamera;

impl LegacySecurityCamera {
    /// Start streaming over the proprietary protocol.
    #[must_use]
    pub fn start_proprietary_feed(&self) -> String {
        "Legacy camera feed started: Transmitting video data via proprietary protocol.".to_string()
    }
}

/// Presents a [`LegacySecurityCamera`] through the uniform feed port.
///
/// Only the call is translated; the payload passes through untouched.
#[derive(Debug, Default)]
pub struct SecurityCameraAdapter {
    camera: LegacySecurityCamera,
}

impl SecurityCameraAdapter {
    #[must_use]
    pub fn new(camera: LegacySecurityCamera) -> Self {
        Self { camera }
    }
}

impl SecurityFeed for SecurityCameraAdapter {
    fn start_feed(&self) -> String {
        self.start_feed_narrated(&mut Report::new())
    }

    fn start_feed_narrated(&self, narration: &mut Report) -> String {
        tracing::debug!("translating request to legacy camera protocol");
        narration.line("Adapter: Translating request to legacy camera protocol...");
        self.camera.start_proprietary_feed()
    }
}
