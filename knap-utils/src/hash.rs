pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

pub fn u64s_from_str(input: &str) -> [u64; 4] {
    let u8s = u8s_from_str(input);

    let mut output = [0u64; 4];
    for (i, chunk) in u8s.chunks_exact(8).enumerate() {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        output[i] = u64::from_le_bytes(bytes);
    }
    output
}

/// Seed used for instance generation. A 64 character hex string is taken
/// verbatim, anything else is hashed.
pub fn seed_from_str(input: &str) -> [u8; 32] {
    let mut seed = [0u8; 32];
    match hex::decode_to_slice(input, &mut seed) {
        Ok(()) => seed,
        Err(_) => u8s_from_str(input),
    }
}

pub fn seed_to_hex(seed: &[u8; 32]) -> String {
    hex::encode(seed)
}
