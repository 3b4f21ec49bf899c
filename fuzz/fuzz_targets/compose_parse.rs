#![no_main]
use fluent_uri_builder::{SchemeTag, Uri, UriBuilder};
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};

#[derive(Arbitrary, Clone, Copy, Debug)]
enum Scheme {
    File,
    Ftp,
    Gopher,
    Http,
    Https,
    Mailto,
    News,
}

impl From<Scheme> for SchemeTag {
    fn from(s: Scheme) -> Self {
        match s {
            Scheme::File => SchemeTag::File,
            Scheme::Ftp => SchemeTag::Ftp,
            Scheme::Gopher => SchemeTag::Gopher,
            Scheme::Http => SchemeTag::Http,
            Scheme::Https => SchemeTag::Https,
            Scheme::Mailto => SchemeTag::Mailto,
            Scheme::News => SchemeTag::News,
        }
    }
}

#[derive(Arbitrary, Debug)]
enum Update<'a> {
    Fragment(&'a str),
    RemoveFragment,
    Host(&'a str),
    Credentials(&'a str, &'a str),
    RemoveCredentials,
    Path(&'a str),
    RemovePath,
    Port(i32),
    DefaultPort,
    RemovePort,
    Scheme(Scheme),
    QueryParam(&'a str, &'a str),
    QueryParams(Vec<(&'a str, &'a str)>),
    RemoveQueryParams,
}

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    base: &'a str,
    updates: Vec<Update<'a>>,
}

fuzz_target!(|input: Input<'_>| {
    let mut b = UriBuilder::from_base(input.base);

    for update in input.updates {
        let next = match update {
            Update::Fragment(s) => Ok(b.clone().fragment(s)),
            Update::RemoveFragment => Ok(b.clone().remove_fragment()),
            Update::Host(s) => b.clone().host(s),
            Update::Credentials(u, p) => b.clone().credentials(u, p),
            Update::RemoveCredentials => Ok(b.clone().remove_credentials()),
            Update::Path(s) => Ok(b.clone().path(s)),
            Update::RemovePath => Ok(b.clone().remove_path()),
            Update::Port(n) => b.clone().port(n),
            Update::DefaultPort => Ok(b.clone().default_port()),
            Update::RemovePort => Ok(b.clone().remove_port()),
            Update::Scheme(s) => Ok(b.clone().scheme(s.into())),
            Update::QueryParam(k, v) => b.clone().query_param(k, v),
            Update::QueryParams(pairs) => b.clone().query_params(pairs),
            Update::RemoveQueryParams => Ok(b.clone().remove_query_params()),
        };
        // A rejected argument leaves the previous builder in place.
        if let Ok(next) = next {
            b = next;
        }
    }

    let Ok(u1) = b.to_uri() else {
        return;
    };

    let u2 = Uri::parse(u1.as_str()).unwrap();
    assert_eq!(u1.as_str(), u2.as_str());
    assert_eq!(u1.scheme(), u2.scheme());
    assert_eq!(u1.userinfo(), u2.userinfo());
    assert_eq!(u1.host(), u2.host());
    assert_eq!(u1.port(), u2.port());
    assert_eq!(u1.path(), u2.path());
    assert_eq!(u1.query(), u2.query());
    assert_eq!(u1.fragment(), u2.fragment());
});
