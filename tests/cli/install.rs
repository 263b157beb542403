use crate::harness::TestContext;
use predicates::prelude::*;

fn install_args(ctx: &TestContext, server_name: &str) -> Vec<String> {
    vec![
        "install".into(),
        "-s".into(),
        server_name.into(),
        "--vhost-dir".into(),
        ctx.vhost_dir().display().to_string(),
        "-d".into(),
        ctx.document_root(server_name).display().to_string(),
    ]
}

#[test]
fn install_writes_site_and_document_root() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(install_args(&ctx, "example.com"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed example.com"))
        .stdout(predicate::str::contains("Created document root"));

    let site = ctx.read_site("example.com");
    assert!(site.starts_with("<VirtualHost *:80>\n    ServerName example.com\n"));
    assert!(site.contains(&format!("DocumentRoot {}", ctx.document_root("example.com").display())));
    assert!(ctx.document_root("example.com").is_dir());
}

#[test]
fn install_refuses_to_overwrite_without_force() {
    let ctx = TestContext::new();
    ctx.cli().args(install_args(&ctx, "example.com")).assert().success();

    ctx.cli()
        .args(install_args(&ctx, "example.com"))
        .args(["--http-port", "8080"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert!(ctx.read_site("example.com").starts_with("<VirtualHost *:80>"));

    ctx.cli()
        .args(install_args(&ctx, "example.com"))
        .args(["--http-port", "8080", "--force"])
        .assert()
        .success();
    assert!(ctx.read_site("example.com").starts_with("<VirtualHost *:8080>"));
}

#[test]
fn install_uses_settings_vhost_dir() {
    let ctx = TestContext::new();
    let target = ctx.root().join("from-settings");
    let settings = format!(
        "[platform]\nos_family = \"debian\"\napache_version = \"2.4\"\n\n[install]\nvhost_dir = \"{}\"\n",
        target.display()
    );
    std::fs::write(ctx.settings_path(), settings).unwrap();

    ctx.cli()
        .args(["install", "-s", "example.org", "-d"])
        .arg(ctx.document_root("example.org"))
        .assert()
        .success();

    assert!(target.join("example.org.conf").is_file());
}

#[test]
fn invalid_ssl_request_installs_nothing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(install_args(&ctx, "example.com"))
        .arg("--enable-ssl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid SSL configuration"));

    assert!(!ctx.vhost_dir().exists());
}

#[test]
fn install_rejects_server_name_outside_vhost_dir() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(install_args(&ctx, "../escape"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server_name"));

    assert!(!ctx.root().join("escape.conf").exists());
    assert!(!ctx.vhost_dir().exists());
}
