use fluent_uri_builder::UriBuilder;

#[test]
fn remove_query_params_clears_existing_query() {
    let uri = UriBuilder::from_base("http://example.com?param=value&otherparam=othervalue")
        .remove_query_params()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://example.com/");
}

#[test]
fn remove_query_params_discards_pending_params() {
    let uri = UriBuilder::from_base("http://example.com/")
        .query_param("a", "b")
        .unwrap()
        .remove_query_params()
        .to_uri()
        .unwrap();
    assert_eq!(uri.query(), None);
    assert!(!uri.as_str().ends_with('?'));
}

#[test]
fn fragment_survives_query_removal() {
    let uri = UriBuilder::from_base("http://example.com/p?q=1#frag")
        .remove_query_params()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://example.com/p#frag");
}
