// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Basic usage of the rescue25519 suite: field arithmetic, Rescue-Prime hashing, and
//! Rescue-CTR encryption.

use rescue25519::{generate_nonce, random, BaseElement, RescueCipher, RescueError, RescuePrime};

fn print_elements(label: &str, elements: &[BaseElement]) {
    print!("{label}: [");
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{element}");
    }
    println!("]");
}

fn main() -> Result<(), RescueError> {
    // field element operations
    let a = BaseElement::from(42u8);
    let b = BaseElement::from(100u8);
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b = {}", a + b);
    println!("a * b = {}", a * b);
    println!("a^2 = {}", a.square());
    println!("a * a^(-1) = {} (should be 1)", a * a.inv()?);
    println!("random element: {}", random::random_element()?);
    println!();

    // Rescue-Prime hashing
    let hasher = RescuePrime::new_default()?;
    let message = [BaseElement::from(1u8), BaseElement::from(2u8), BaseElement::from(3u8)];
    print_elements("message", &message);

    let digest = hasher.digest(&message)?;
    print_elements("digest", &digest);
    println!("digest length: {} field elements", digest.len());
    println!();

    // Rescue-CTR encryption; the shared secret would normally come from a key exchange
    let shared_secret = random::random_bytes(32)?;
    let cipher = RescueCipher::new(&shared_secret)?;

    let nonce = generate_nonce()?;
    println!("nonce: {}", hex_string(&nonce));

    let plaintext = vec![
        BaseElement::from(42u8),
        BaseElement::from(1337u16),
        BaseElement::from(0xdeadbeefu32),
        BaseElement::from(12345u16),
        BaseElement::from(67890u32),
    ];
    print_elements("plaintext", &plaintext);

    let ciphertext = cipher.encrypt_raw(&plaintext, &nonce)?;
    print_elements("ciphertext", &ciphertext);

    let decrypted = cipher.decrypt_raw(&ciphertext, &nonce)?;
    print_elements("decrypted", &decrypted);
    assert_eq!(plaintext, decrypted);
    println!("round trip: ok");

    Ok(())
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
