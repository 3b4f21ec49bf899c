use fluent_uri_builder::{ArgumentErrorKind, UriBuilder};
use std::collections::BTreeMap;

#[test]
fn empty_params_add_no_query() {
    let uri = UriBuilder::from_base("http://example.com/")
        .query_params(Vec::<(&str, &str)>::new())
        .unwrap()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://example.com/");
}

#[test]
fn empty_params_clear_existing_query() {
    let uri = UriBuilder::from_base("http://example.com?param=value")
        .query_params(BTreeMap::<String, i32>::new())
        .unwrap()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://example.com/");
}

#[test]
fn single_param_is_used() {
    let uri = UriBuilder::from_base("http://example.com")
        .query_params([("param", "value")])
        .unwrap()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://example.com/?param=value");
}

#[test]
fn multiple_params_keep_their_order() {
    let uri = UriBuilder::from_base("http://example.com")
        .query_params([("param", "value"), ("otherparam", "othervalue")])
        .unwrap()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://example.com/?param=value&otherparam=othervalue");
}

#[test]
fn existing_query_is_replaced() {
    let mut params = BTreeMap::new();
    params.insert("param".to_owned(), "value".to_owned());
    let uri = UriBuilder::from_base("http://example.com/?oldparam=oldvalue")
        .query_params(&params)
        .unwrap()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://example.com/?param=value");
}

#[test]
fn replace_is_not_append() {
    let appended = UriBuilder::from_base("http://example.com")
        .query_param("a", 1)
        .unwrap()
        .query_param("testkey", "v")
        .unwrap()
        .to_uri_string()
        .unwrap();
    let replaced = UriBuilder::from_base("http://example.com")
        .query_param("a", 1)
        .unwrap()
        .query_params([("testkey", "v")])
        .unwrap()
        .to_uri_string()
        .unwrap();
    assert_eq!(appended, "http://example.com/?a=1&testkey=v");
    assert_eq!(replaced, "http://example.com/?testkey=v");
}

#[test]
fn invalid_pair_rejects_the_whole_call() {
    let e = UriBuilder::new()
        .query_params([("ok", "1"), (" ", "2")])
        .unwrap_err();
    assert_eq!(e.kind(), ArgumentErrorKind::InvalidArgument);
    assert_eq!(e.param(), "key");

    let e = UriBuilder::new()
        .query_params([("ok", "1"), ("bad", "")])
        .unwrap_err();
    assert_eq!(e.param(), "value");
}

#[test]
fn mixed_value_types() {
    let uri = UriBuilder::new()
        .query_params([("n", 1.5), ("m", -2.0)])
        .unwrap()
        .to_uri_string()
        .unwrap();
    assert_eq!(uri, "http://localhost/?n=1.5&m=-2");
}

#[cfg(feature = "serde")]
mod from_serialize {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Empty {}

    #[derive(Serialize)]
    struct Single<'a> {
        param: &'a str,
    }

    #[derive(Serialize)]
    struct Multi<'a> {
        param: &'a str,
        otherparam: &'a str,
    }

    #[test]
    fn empty_object_adds_no_query() {
        let uri = UriBuilder::from_base("http://example.com/")
            .query_params_from(&Empty {})
            .unwrap()
            .to_uri_string()
            .unwrap();
        assert_eq!(uri, "http://example.com/");
    }

    #[test]
    fn empty_object_clears_existing_query() {
        let uri = UriBuilder::from_base("http://example.com?param=value")
            .query_params_from(&Empty {})
            .unwrap()
            .to_uri_string()
            .unwrap();
        assert_eq!(uri, "http://example.com/");
    }

    #[test]
    fn single_field_is_used() {
        let uri = UriBuilder::from_base("http://example.com")
            .query_params_from(&Single { param: "value" })
            .unwrap()
            .to_uri_string()
            .unwrap();
        assert_eq!(uri, "http://example.com/?param=value");
    }

    #[test]
    fn fields_keep_declaration_order() {
        let uri = UriBuilder::from_base("http://example.com")
            .query_params_from(&Multi {
                param: "value",
                otherparam: "othervalue",
            })
            .unwrap()
            .to_uri_string()
            .unwrap();
        assert_eq!(uri, "http://example.com/?param=value&otherparam=othervalue");
    }

    #[test]
    fn existing_query_is_replaced() {
        let uri = UriBuilder::from_base("http://example.com?oldparam=oldvalue")
            .query_params_from(&Single { param: "value" })
            .unwrap()
            .to_uri_string()
            .unwrap();
        assert_eq!(uri, "http://example.com/?param=value");
    }

    #[test]
    fn scalar_fields() {
        let uri = UriBuilder::new()
            .query_params_from(&serde_json::json!({ "b": false, "i": -3, "f": 2.5 }))
            .unwrap()
            .to_uri_string()
            .unwrap();
        assert_eq!(uri, "http://localhost/?b=false&i=-3&f=2.5");
    }

    #[test]
    fn unsupported_values_are_rejected() {
        for bag in [
            serde_json::json!("text"),
            serde_json::json!({ "a": null }),
            serde_json::json!({ "a": [1, 2] }),
            serde_json::json!({ "a": { "b": 1 } }),
        ] {
            let e = UriBuilder::new().query_params_from(&bag).unwrap_err();
            assert_eq!(e.kind(), ArgumentErrorKind::InvalidArgument);
            assert_eq!(e.param(), "params");
        }

        let e = UriBuilder::new()
            .query_params_from(&Single { param: " " })
            .unwrap_err();
        assert_eq!(e.param(), "value");
    }

    #[test]
    fn uri_round_trips_through_serde() {
        let uri = fluent_uri_builder::Uri::parse("https://example.com/a?b=c").unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, "\"https://example.com/a?b=c\"");
        let back: fluent_uri_builder::Uri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uri);

        let tag: fluent_uri_builder::SchemeTag = serde_json::from_str("\"gopher\"").unwrap();
        assert_eq!(tag, fluent_uri_builder::SchemeTag::Gopher);
    }
}
