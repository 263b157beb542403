//! Virtual host template engine.
//!
//! Renders a [`VHostConfig`] into Apache configuration text: one HTTP block,
//! followed by an HTTPS block when SSL is enabled. Both blocks come from the
//! same embedded template; the HTTPS variant differs only in its port, its
//! `ssl-` log prefix and the SSL fragment.

use std::path::Path;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use super::{AppError, VHostConfig};

static VIRTUAL_HOST_TEMPLATE: &str = include_str!("../assets/virtual_host.conf.j2");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Which listener a block is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockMode {
    Http,
    Https,
}

impl BlockMode {
    fn log_prefix(&self) -> &'static str {
        match self {
            BlockMode::Http => "",
            BlockMode::Https => "ssl-",
        }
    }
}

#[derive(Serialize)]
struct BlockContext<'a> {
    bind_address: &'a str,
    port: u16,
    server_name: &'a str,
    server_alias: String,
    document_root: String,
    authorization: &'static [&'static str],
    log_prefix: String,
    ssl: Option<SslContext>,
}

#[derive(Serialize)]
struct SslContext {
    certificate_file: String,
    certificate_key_file: String,
    ca_file: Option<String>,
}

/// Render the complete virtual host configuration for `config`.
///
/// Pure: performs no I/O and returns byte-identical output for identical
/// input. Fails fast when the record violates its invariants.
pub fn render(config: &VHostConfig) -> Result<String, AppError> {
    config.validate()?;

    let mut output = render_block(config, BlockMode::Http)?;
    if config.enable_ssl {
        output.push('\n');
        output.push_str(&render_block(config, BlockMode::Https)?);
    }
    Ok(output)
}

fn render_block(config: &VHostConfig, mode: BlockMode) -> Result<String, AppError> {
    let (port, ssl) = match mode {
        BlockMode::Http => (config.http_port, None),
        BlockMode::Https => (config.https_port, Some(ssl_context(config)?)),
    };

    let context = BlockContext {
        bind_address: &config.bind_address,
        port,
        server_name: &config.server_name,
        server_alias: config.server_alias_line(),
        document_root: display(&config.document_root),
        authorization: config.apache_dialect.authorization_directive(),
        log_prefix: format!(
            "{}/{}{}",
            display(&config.log_directory).trim_end_matches('/'),
            mode.log_prefix(),
            config.server_name
        ),
        ssl,
    };

    environment()
        .render_str(VIRTUAL_HOST_TEMPLATE, &context)
        .map_err(|err| AppError::TemplateRender(err.to_string()))
}

fn ssl_context(config: &VHostConfig) -> Result<SslContext, AppError> {
    let certificate_file = config
        .ssl_certificate_file
        .as_deref()
        .ok_or_else(|| AppError::ssl_error("SSL is enabled but no certificate file was given"))?;
    let certificate_key_file = config.ssl_certificate_key_file.as_deref().ok_or_else(|| {
        AppError::ssl_error("SSL is enabled but no certificate key file was given")
    })?;

    Ok(SslContext {
        certificate_file: display(certificate_file),
        certificate_key_file: display(certificate_key_file),
        ca_file: config.ssl_certificate_ca_file.as_deref().map(display),
    })
}

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
