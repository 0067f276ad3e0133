//! tests/roundtrip_tests.rs
//! Buffer and stream round trips, framing, and wrong-key behaviour

mod common;
use common::{test_bytes, OTHER_SIGNATURE, TEST_DATA, TEST_SIGNATURE};

use notecrypt::aliases::Note16;
use notecrypt::encryptor::encrypt_with_config;
use notecrypt::{
    decrypt, decrypt_buffer, encrypt, encrypt_buffer, generate_note, note_from_buffer,
    note_from_hex, NoteCryptConfig,
};
use proptest::prelude::*;
use std::io::Cursor;
use secure_gate::RevealSecret;

#[test]
fn hello_world_with_zero_note() {
    let note = note_from_hex(&"00".repeat(16)).unwrap();
    let signature = "11".repeat(32);

    let payload = encrypt_buffer(TEST_DATA, &note, &signature).unwrap();
    assert_eq!(payload.len(), 16 + TEST_DATA.len());
    assert_eq!(&payload[..16], &[0u8; 16]);

    assert_eq!(decrypt_buffer(&payload, &signature).unwrap(), TEST_DATA);
}

#[test]
fn empty_plaintext_is_sixteen_bytes() {
    let note = generate_note().unwrap();
    let payload = encrypt_buffer(&[], &note, TEST_SIGNATURE).unwrap();
    assert_eq!(payload.len(), 16);
    assert_eq!(&payload[..], &note.expose_secret()[..]);
    assert!(decrypt_buffer(&payload, TEST_SIGNATURE).unwrap().is_empty());
}

#[test]
fn first_sixteen_bytes_are_the_note() {
    for len in [1usize, 15, 16, 17, 4096] {
        let note = generate_note().unwrap();
        let payload = encrypt_buffer(&test_bytes(len), &note, TEST_SIGNATURE).unwrap();
        assert_eq!(payload.len(), 16 + len);
        assert_eq!(
            note_from_buffer(&payload).unwrap().expose_secret(),
            note.expose_secret()
        );
    }
}

#[test]
fn fresh_notes_give_different_payloads() {
    let a = encrypt_buffer(TEST_DATA, &generate_note().unwrap(), TEST_SIGNATURE).unwrap();
    let b = encrypt_buffer(TEST_DATA, &generate_note().unwrap(), TEST_SIGNATURE).unwrap();
    assert_ne!(a, b);
    assert_ne!(a[16..], b[16..]);
}

#[test]
fn wrong_key_decrypts_to_garbage_without_error() {
    let plaintext = test_bytes(256);
    let note = generate_note().unwrap();
    let payload = encrypt_buffer(&plaintext, &note, TEST_SIGNATURE).unwrap();

    let garbage = decrypt_buffer(&payload, OTHER_SIGNATURE).unwrap();
    assert_eq!(garbage.len(), plaintext.len());
    assert_ne!(garbage, plaintext);
}

#[test]
fn trailing_signature_bytes_do_not_matter() {
    let note = generate_note().unwrap();
    let payload = encrypt_buffer(TEST_DATA, &note, TEST_SIGNATURE).unwrap();

    let extended = format!("{TEST_SIGNATURE}ff");
    assert_eq!(decrypt_buffer(&payload, &extended).unwrap(), TEST_DATA);

    // "0x" + exactly 64 hex characters
    let bare_key = &TEST_SIGNATURE[..66];
    assert_eq!(decrypt_buffer(&payload, bare_key).unwrap(), TEST_DATA);
}

#[test]
fn streaming_matches_buffer() {
    let plaintext = test_bytes(200_000);
    let note = generate_note().unwrap();
    let config = NoteCryptConfig::builder().with_chunk_size(1000).build();

    let mut streamed = Vec::new();
    let n = encrypt_with_config(
        Cursor::new(&plaintext),
        &mut streamed,
        &note,
        TEST_SIGNATURE,
        &config,
    )
    .unwrap();
    assert_eq!(n, plaintext.len() as u64);
    assert_eq!(
        streamed,
        encrypt_buffer(&plaintext, &note, TEST_SIGNATURE).unwrap()
    );

    let mut decrypted = Vec::new();
    decrypt(Cursor::new(&streamed), &mut decrypted, TEST_SIGNATURE).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn stream_roundtrip_default_chunk() {
    let plaintext = test_bytes(300_000);
    let note = generate_note().unwrap();

    let mut payload = Vec::new();
    encrypt(&plaintext[..], &mut payload, &note, TEST_SIGNATURE).unwrap();
    assert_eq!(payload.len(), 16 + plaintext.len());

    let mut out = Vec::new();
    let n = decrypt(&payload[..], &mut out, TEST_SIGNATURE).unwrap();
    assert_eq!(n, plaintext.len() as u64);
    assert_eq!(out, plaintext);
}

proptest! {
    #[test]
    fn any_plaintext_roundtrips(
        plaintext in proptest::collection::vec(any::<u8>(), 0..2048),
        note in any::<[u8; 16]>(),
        key in any::<[u8; 32]>(),
    ) {
        let note = Note16::new(note);
        let signature = format!("0x{}1b", hex::encode(key));

        let payload = encrypt_buffer(&plaintext, &note, &signature).unwrap();
        prop_assert_eq!(payload.len(), 16 + plaintext.len());
        prop_assert_eq!(decrypt_buffer(&payload, &signature).unwrap(), plaintext);
    }
}
