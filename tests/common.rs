//! Test utilities for textfilter integration tests

#![allow(dead_code)]

/// Document used by the reference walkthrough
pub const SAMPLE_FILTER: &str = r#"
{
    "name": "My Filter",
    "filters":
    [
        {
            "text": "test",
            "method": "contains",
            "case_sensitive": false
        },
        {
            "text": "([0-9a-fA-f]{2} ){4}\\d*",
            "method": "regex"
        }
    ]
}
"#;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}
