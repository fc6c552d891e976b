//! Packing of a result pair into the contract-ABI transport form.
//!
//! The consumer compares the emulator's output against an on-chain
//! implementation, so the pair is encoded the way a contract call would
//! return it: a static `(int256,int256)` tuple, i.e. two 32-byte big-endian
//! two's-complement words, rendered as `0x` + lowercase hex.

use hex;
use num_bigint::{BigInt, Sign};
use num_traits::One;

use pair::FloatPair;
use Exception;

/// Width of one ABI word in bytes.
pub const WORD_BYTES: usize = 32;

/// Encodes `(mantissa, exponent)` as an ABI `(int256,int256)` tuple.
///
/// A static tuple has no head/tail indirection; the encoding is simply the
/// two words back to back. Values outside the signed 256-bit range are an
/// error, never a silent wrap.
pub fn encode_pair(pair: &FloatPair) -> Result<String, Exception> {
    let mantissa = int256_word(&pair.mantissa)?;
    let exponent = int256_word(&BigInt::from(pair.exponent))?;

    let mut out = String::with_capacity(2 + 4 * WORD_BYTES);
    out.push_str("0x");
    out.push_str(&hex::encode(mantissa));
    out.push_str(&hex::encode(exponent));
    Ok(out)
}

/// One 32-byte big-endian two's-complement word.
fn int256_word(value: &BigInt) -> Result<[u8; WORD_BYTES], Exception> {
    let limit = BigInt::one() << 255;
    if *value >= limit || *value < -&limit {
        return Err(Exception::Overflow);
    }

    let bytes = value.to_signed_bytes_be();
    let fill = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
    let mut word = [fill; WORD_BYTES];
    word[WORD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    Ok(word)
}
