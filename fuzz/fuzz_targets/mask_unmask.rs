#![no_main]

use libfuzzer_sys::fuzz_target;
use masked_name::codec::{is_properly_masked, mask, unmask};
use masked_name::{Delimiter, Name};

fuzz_target!(|input: (char, Vec<String>)| {
    let (delimiter, components) = input;
    let Ok(delimiter) = Delimiter::new(delimiter) else {
        return;
    };
    for component in &components {
        let masked = mask(component, delimiter);
        assert!(is_properly_masked(&masked, delimiter));
        assert_eq!(&unmask(&masked, delimiter), component);
    }
    let name = Name::from_unmasked(&components, delimiter);
    assert_eq!(name.components().collect::<Vec<_>>(), components);
});
