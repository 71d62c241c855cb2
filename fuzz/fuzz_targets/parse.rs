#![no_main]

use libfuzzer_sys::fuzz_target;
use flagscope::{descriptor::FlagDescriptor, engine::{FormatOptions, ParseOptions}};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(descriptor) = FlagDescriptor::builder::<i16>("Fuzzed")
        .member("None", 0)
        .member("Low", 0x00FF)
        .member("One", 1)
        .member("Two", 2)
        .member("Sign", i16::MIN)
        .build()
    else {
        return;
    };

    for options in [ParseOptions::default(), ParseOptions::case_insensitive().delimiter("|")] {
        if let Ok(value) = descriptor.parse(text, &options) {
            if let Some(rendered) = descriptor.format_as_flags(value, &FormatOptions::default()) {
                assert_eq!(descriptor.parse(&rendered, &ParseOptions::default()).ok(), Some(value));
            }
        }
    }
});
