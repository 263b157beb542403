pub mod apache_dialect;
pub mod distribution;
pub mod error;
pub mod os_family;
pub mod settings;
pub mod vhost_config;
pub mod vhost_template;

pub use apache_dialect::ApacheDialect;
pub use distribution::Distribution;
pub use error::AppError;
pub use os_family::OsFamily;
pub use settings::Settings;
pub use vhost_config::VHostConfig;
