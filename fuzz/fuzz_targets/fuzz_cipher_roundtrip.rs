#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use jefferson_core::{cipher_message, decipher_message, Cylinder, Key};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    let seed = u64::from_le_bytes(data[..8].try_into().unwrap());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Message letters come from the remaining bytes; the cylinder and key
    // are sized to cover them.
    let message: String = data[8..]
        .iter()
        .take(64)
        .map(|&b| (b'A' + b % 26) as char)
        .collect();
    let n = message.len().max(1);

    let cylinder = Cylinder::generate(n, &mut rng).unwrap();
    let key = Key::generate(n, &mut rng).unwrap();

    let ciphered = cipher_message(&message, &key, &cylinder).unwrap();
    assert_eq!(ciphered.len(), message.len());
    assert_eq!(decipher_message(&ciphered, &key, &cylinder).unwrap(), message);
});
