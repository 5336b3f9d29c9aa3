#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Normalization must agree with UTF-8 validation and never panic
    let result = fxm::utils::normalize(data);
    assert_eq!(result.is_ok(), fxm::utils::is_well_formed(data));
});
