use crate::domain::Settings;
use crate::ports::{PlatformInfo, ServiceControl, SiteStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: PlatformInfo, S: SiteStore, C: ServiceControl> {
    settings: Settings,
    platform: P,
    sites: S,
    service: C,
}

impl<P: PlatformInfo, S: SiteStore, C: ServiceControl> AppContext<P, S, C> {
    /// Create a new application context.
    pub fn new(settings: Settings, platform: P, sites: S, service: C) -> Self {
        Self { settings, platform, sites, service }
    }

    /// Settings file values.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a reference to the platform facts provider.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Get a reference to the site store.
    pub fn sites(&self) -> &S {
        &self.sites
    }

    /// Get a reference to the service controller.
    pub fn service(&self) -> &C {
        &self.service
    }
}
