#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::observers::NoOpObserver;
use strassen_core::options::{PaddingPolicy, StrassenConfig};
use strassen_core::progress::CancellationToken;
use strassen_core::{naive_multiply, Matrix, StrassenEngine, StrassenError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Header: size (1..=24), threshold (1..=8), depth (0..=2), padding flag
    let n = usize::from(data[0] % 24) + 1;
    let threshold = usize::from(data[1] % 8) + 1;
    let depth = usize::from(data[2] % 3);
    let padding = if data[3] & 1 == 1 {
        PaddingPolicy::ZeroPad
    } else {
        PaddingPolicy::Reject
    };

    // Small signed elements, cycling through the remaining bytes
    let body = &data[4..];
    let element = |k: usize| -> i64 {
        if body.is_empty() {
            0
        } else {
            i64::from(body[k % body.len()] as i8)
        }
    };
    let a = Matrix::from_fn(n, n, |i, j| element(i * n + j));
    let b = Matrix::from_fn(n, n, |i, j| element(n * n + i * n + j));

    let config = StrassenConfig::new(threshold, depth).with_padding(padding);
    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let expected = naive_multiply(&a, &b).unwrap();

    match StrassenEngine::new(&config, &cancel, &observer).multiply(&a, &b) {
        Ok(product) => assert_eq!(product, expected),
        // Only an odd split may fail, and only without padding
        Err(err) => {
            assert_eq!(padding, PaddingPolicy::Reject);
            assert!(matches!(err.root_cause(), StrassenError::InvalidSize { .. }));
        }
    }
});
