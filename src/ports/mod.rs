mod platform_info;
mod service_control;
mod site_store;

pub use platform_info::PlatformInfo;
pub use service_control::ServiceControl;
pub use site_store::SiteStore;
