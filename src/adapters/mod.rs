pub mod apache_service_control;
pub mod command;
pub mod filesystem_site_store;
pub mod settings_file;
pub mod system_platform;

pub use apache_service_control::ApacheServiceControl;
pub use filesystem_site_store::FilesystemSiteStore;
pub use system_platform::SystemPlatform;
