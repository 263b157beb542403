use std::path::PathBuf;

use clap::Args;

use crate::app::resolve::VHostRequest;

/// Virtual host values shared by `render` and `install`.
#[derive(Args, Debug)]
pub(super) struct VHostArgs {
    /// ServerName to be used in the configuration
    #[arg(short = 's', long)]
    server_name: String,
    /// Alternate names (default: www.<server-name>; pass the flag alone for none)
    #[arg(short = 'a', long, num_args = 0..)]
    server_aliases: Option<Vec<String>>,
    /// Location for the site's files (default: /var/www/vhosts/<server-name>/httpdocs)
    #[arg(short = 'd', long, value_name = "PATH")]
    document_root: Option<PathBuf>,
    /// IP address the virtual host listens on
    #[arg(short = 'b', long, value_name = "ADDRESS")]
    bind_address: Option<String>,
    /// Log directory (default: /var/log/httpd or /var/log/apache2)
    #[arg(short = 'l', long, value_name = "PATH")]
    log_directory: Option<PathBuf>,
    /// HTTP port for the virtual host
    #[arg(short = 'p', long, value_name = "PORT")]
    http_port: Option<u16>,
    /// HTTPS port for the SSL virtual host
    #[arg(long, value_name = "PORT")]
    https_port: Option<u16>,
    /// Add an SSL virtual host (requires certificate and key files)
    #[arg(long)]
    enable_ssl: bool,
    /// SSL certificate file
    #[arg(long, value_name = "PATH")]
    ssl_certificate_file: Option<PathBuf>,
    /// SSL certificate key file
    #[arg(long, value_name = "PATH")]
    ssl_certificate_key_file: Option<PathBuf>,
    /// SSL certificate CA file
    #[arg(long, value_name = "PATH")]
    ssl_certificate_ca_file: Option<PathBuf>,
    /// OS family (redhat, debian); skips distribution detection
    #[arg(long, value_name = "FAMILY")]
    os_family: Option<String>,
    /// Apache release (e.g. 2.2, 2.4); skips version detection
    #[arg(long, value_name = "VERSION")]
    apache_version: Option<String>,
}

impl VHostArgs {
    pub(super) fn into_request(self) -> VHostRequest {
        VHostRequest {
            server_name: Some(self.server_name),
            server_aliases: self.server_aliases,
            document_root: self.document_root,
            bind_address: self.bind_address,
            http_port: self.http_port,
            https_port: self.https_port,
            log_directory: self.log_directory,
            enable_ssl: self.enable_ssl,
            ssl_certificate_file: self.ssl_certificate_file,
            ssl_certificate_key_file: self.ssl_certificate_key_file,
            ssl_certificate_ca_file: self.ssl_certificate_ca_file,
            os_family: self.os_family,
            apache_version: self.apache_version,
        }
    }
}
