#![no_main]

use libfuzzer_sys::fuzz_target;
use masked_name::codec::{join, split};
use masked_name::{Delimiter, Name};

fuzz_target!(|input: (char, String)| {
    let (delimiter, data) = input;
    let Ok(delimiter) = Delimiter::new(delimiter) else {
        return;
    };
    assert_eq!(join(split(&data, delimiter), delimiter), data);
    let name = Name::parse(&data, delimiter);
    assert!(name.no_components() >= 1);
    let again = Name::parse(&name.as_data_string(), delimiter);
    assert_eq!(again, name);
    assert_eq!(again.hash_code(), name.hash_code());
});
