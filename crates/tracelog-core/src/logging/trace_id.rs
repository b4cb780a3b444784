//! Trace id generation

use chrono::{DateTime, Utc};
use rand::Rng;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 8;

/// Generate a trace id like `20261019081530-k3x9q0ab`
///
/// The UTC second keeps ids sortable and easy to scan; the random suffix
/// separates ids created within the same second.
pub fn generate_trace_id() -> String {
    trace_id_at(Utc::now())
}

pub(crate) fn trace_id_at(now: DateTime<Utc>) -> String {
    format!("{}-{}", now.format("%Y%m%d%H%M%S"), random_suffix(SUFFIX_LEN))
}

fn random_suffix(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
