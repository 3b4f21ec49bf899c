#![no_main]
use fluent_uri_builder::Uri;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(u1) = Uri::parse(data) else {
        return;
    };
    let u2 = Uri::parse(u1.as_str()).unwrap();
    assert_eq!(u1, u2);
});
