use crate::embedding::types::l2_normalize;

/// Deterministic bag-of-words embedding via feature hashing.
///
/// Each word adds one to its hashed bucket, so texts sharing words land on shared
/// buckets and overlap still raises cosine similarity without a model. Counts never
/// cancel, so any text with at least one word has a non-zero norm. Identical input
/// always yields an identical vector.
pub(crate) fn hashed_embedding(text: &str, dim: usize) -> Vec<f32> {
    let mut values = vec![0.0f32; dim];

    for token in text.split_whitespace() {
        let hash = blake3::hash(token.as_bytes());

        let mut bucket_bytes = [0u8; 8];
        bucket_bytes.copy_from_slice(&hash.as_bytes()[..8]);
        let bucket = (u64::from_le_bytes(bucket_bytes) % dim as u64) as usize;

        values[bucket] += 1.0;
    }

    l2_normalize(&mut values);
    values
}
