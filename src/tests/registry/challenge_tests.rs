use super::*;

#[test]
fn parses_docker_hub_style_challenge() {
    let c = Challenge::parse(
        r#"Bearer realm="https://auth.docker.io/token",service="registry.docker.io",scope="repository:library/nginx:pull""#,
    )
    .unwrap();
    assert_eq!(c.realm, "https://auth.docker.io/token");
    assert_eq!(c.service.as_deref(), Some("registry.docker.io"));
    assert_eq!(c.scope.as_deref(), Some("repository:library/nginx:pull"));
}

#[test]
fn quoted_values_may_contain_commas() {
    let c = Challenge::parse(
        r#"Bearer realm="https://auth.example.com/token", scope="repository:team/app:pull,push", service="example""#,
    )
    .unwrap();
    assert_eq!(c.scope.as_deref(), Some("repository:team/app:pull,push"));
    assert_eq!(c.service.as_deref(), Some("example"));
}

#[test]
fn scheme_and_keys_are_case_insensitive() {
    let c = Challenge::parse(r#"bearer Realm="https://a/token""#).unwrap();
    assert_eq!(c.realm, "https://a/token");
    assert_eq!(c.service, None);
    assert_eq!(c.scope, None);
}

#[test]
fn unquoted_values_and_escapes_are_accepted() {
    let c = Challenge::parse(r#"Bearer realm=https://a/token,service="say \"hi\"""#).unwrap();
    assert_eq!(c.realm, "https://a/token");
    assert_eq!(c.service.as_deref(), Some(r#"say "hi""#));
}

#[test]
fn malformed_headers_are_recoverable_errors() {
    for header in [
        r#"Basic realm="registry""#,
        "Bearer",
        r#"Bearer service="x""#,
        r#"Bearer realm="https://a/token"#,
        r#"Bearer realm"#,
        r#"Bearer ="x""#,
    ] {
        let err = Challenge::parse(header).unwrap_err();
        assert!(
            matches!(err, RegistryError::Auth(_)),
            "{} -> {:?}",
            header,
            err
        );
    }
}
