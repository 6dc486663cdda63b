use super::*;

#[test]
fn relative_link_is_extracted() {
    let next = parse_link(r#"</v2/_catalog?last=team%2Fapp&n=100>; rel="next""#).unwrap();
    assert_eq!(next.as_deref(), Some("/v2/_catalog?last=team%2Fapp&n=100"));
}

#[test]
fn absolute_link_is_reduced_to_path() {
    let next =
        parse_link(r#"<https://registry.example.com/v2/team/app/tags/list?last=v9&n=50>; rel="next""#)
            .unwrap();
    assert_eq!(next.as_deref(), Some("/v2/team/app/tags/list?last=v9&n=50"));
}

#[test]
fn empty_link_ends_pagination() {
    assert_eq!(parse_link("").unwrap(), None);
    assert_eq!(parse_link("   ").unwrap(), None);
}

#[test]
fn missing_markers_are_rejected() {
    assert!(matches!(
        parse_link(r#"</catalog?n=1>; rel="next""#),
        Err(RegistryError::MalformedLink(_))
    ));
    assert!(matches!(
        parse_link("/v2/_catalog?n=1"),
        Err(RegistryError::MalformedLink(_))
    ));
}
