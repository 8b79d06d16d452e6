use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 8081 ")).unwrap(), 8081);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT: eighty"), "{err}");
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn default_site_dir_exists_in_repo() {
    let dir = default_site_dir();
    assert!(dir.is_dir(), "{}", dir.display());
    assert!(dir.join("index.html").is_file());
}

#[test]
fn bind_addr_uses_port() {
    let cfg = SiteConfig { port: 4321, site_dir: default_site_dir() };
    assert_eq!(cfg.bind_addr(), "0.0.0.0:4321");
}

/// # Safety
/// `from_env_defaults_and_overrides` is the only test in this crate that
/// reads or writes `PORT`/`SITE_DIR`, so no other test observes the changes.
unsafe fn clear_site_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_DIR");
    }
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_site_env() };
    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, default_site_dir());

    unsafe {
        std::env::set_var("PORT", "9000");
        std::env::set_var("SITE_DIR", default_site_dir());
    }
    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, 9000);

    unsafe {
        std::env::set_var("PORT", "3000");
        std::env::set_var("SITE_DIR", "/definitely/not/a/site/dir");
    }
    let err = SiteConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingSiteDir { .. }));

    unsafe { clear_site_env() };
}
