use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn render_prints_default_http_block() {
    let ctx = TestContext::new();

    let output = ctx.render(&["-s", "example.com"]);

    assert_eq!(
        output,
        "\
<VirtualHost *:80>
    ServerName example.com
    ServerAlias www.example.com
    DocumentRoot /var/www/vhosts/example.com/httpdocs

    <Directory /var/www/vhosts/example.com/httpdocs>
        Options -Indexes +FollowSymLinks -MultiViews
        AllowOverride All
        Require all granted
    </Directory>

    CustomLog /var/log/apache2/example.com-access.log combined
    ErrorLog /var/log/apache2/example.com-error.log
    LogLevel warn
</VirtualHost>
"
    );
}

#[test]
fn render_legacy_dialect() {
    let ctx = TestContext::new();

    let output = ctx.render(&["-s", "example.com", "--apache-version", "2.2"]);

    assert!(output.contains("        Order Allow,Deny\n        Allow from all\n"));
    assert!(!output.contains("Require all granted"));
}

#[test]
fn render_ssl_on_custom_port() {
    let ctx = TestContext::new();

    let output = ctx.render(&[
        "-s",
        "example.com",
        "--enable-ssl",
        "--ssl-certificate-file",
        "/etc/ssl/cert.pem",
        "--ssl-certificate-key-file",
        "/etc/ssl/key.pem",
        "--https-port",
        "8443",
    ]);

    assert_eq!(output.matches("<VirtualHost ").count(), 2);
    assert!(output.contains("</VirtualHost>\n\n<VirtualHost *:8443>\n"));
    assert!(output.contains("SSLCertificateFile /etc/ssl/cert.pem"));
    assert!(output.contains("ErrorLog /var/log/apache2/ssl-example.com-error.log"));
    assert!(!output.contains("SSLCACertificateFile"));
}

#[test]
fn render_explicit_aliases() {
    let ctx = TestContext::new();

    let output = ctx.render(&["-s", "example.com", "-a", "a.example.com", "b.example.com"]);

    assert!(output.contains("    ServerAlias a.example.com b.example.com\n"));
    assert!(!output.contains("www.example.com"));
}

#[test]
fn render_redhat_family_override() {
    let ctx = TestContext::new();

    let output = ctx.render(&["-s", "example.com", "--os-family", "redhat"]);

    assert!(output.contains("CustomLog /var/log/httpd/example.com-access.log combined"));
}

#[test]
fn render_uses_settings_defaults() {
    let ctx = TestContext::with_settings(
        r#"[defaults]
bind_address = "192.0.2.7"
http_port = 8080
vhosts_root = "/srv/www"

[platform]
os_family = "debian"
apache_version = "2.4"
"#,
    );

    let output = ctx.render(&["-s", "example.com"]);

    assert!(output.starts_with("<VirtualHost 192.0.2.7:8080>\n"));
    assert!(output.contains("DocumentRoot /srv/www/example.com/httpdocs"));
}

#[test]
fn explicit_config_flag_wins_over_environment() {
    let ctx = TestContext::new();
    let other = ctx.root().join("other.toml");
    fs::write(&other, "[platform]\nos_family = \"redhat\"\napache_version = \"2.2\"\n").unwrap();

    ctx.cli()
        .args(["render", "-s", "example.com", "--config"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("/var/log/httpd/example.com-access.log"))
        .stdout(predicate::str::contains("Order Allow,Deny"));
}

#[test]
fn render_rejects_ssl_without_key() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "-s", "example.com", "--enable-ssl", "--ssl-certificate-file", "/c.pem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid SSL configuration"));
}

#[test]
fn render_rejects_unknown_apache_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "-s", "example.com", "--apache-version", "1.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported Apache version '1.3'"));
}

#[test]
fn render_rejects_missing_settings_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "-s", "example.com", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Settings file not found"));
}

#[test]
fn render_requires_server_name() {
    let ctx = TestContext::new();

    ctx.cli().arg("render").assert().failure().stderr(predicate::str::contains("--server-name"));
}

#[test]
fn render_rejects_directives_smuggled_in_names() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "-s", "a.com\n    Include /tmp/evil.conf"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid server_name"));

    ctx.cli()
        .args(["render", "-s", "example.com", "-a", "www.example.com"])
        .arg("x.com\nInclude /tmp/evil.conf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server_alias"));
}
