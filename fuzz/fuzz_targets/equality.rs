#![no_main]

use json_compare::{equal, JsonValue};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(document) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let copy = document.clone();
    let left = JsonValue::from(document);
    let right = JsonValue::from(copy);
    // Parsed JSON cannot contain non-finite floats, so equality must be
    // reflexive and symmetric for every accepted input.
    assert!(equal(&left, &left));
    assert!(equal(&left, &right));
    assert!(equal(&right, &left));
});
