use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

pub const REFERENCE_PREFIX: &str = "BKG-";

// Last millisecond stamp handed out, shared by every caller in the process.
static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// Produce a booking reference such as `BKG-M5X2K9QA`.
///
/// The reference encodes a millisecond stamp in base 36. Two calls landing in
/// the same millisecond (or after the wall clock stepped back) get the last
/// stamp plus one, so no two references from this process ever collide.
pub fn next_reference() -> String {
    let now = Utc::now().timestamp_millis().max(0) as u64;
    let stamp = claim_stamp(now);
    format!("{REFERENCE_PREFIX}{}", encode_base36(stamp))
}

fn claim_stamp(now: u64) -> u64 {
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_STAMP.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(observed) => last = observed,
        }
    }
}

fn encode_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
