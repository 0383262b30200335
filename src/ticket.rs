//! Ticket codes and the URLs embedded in symbols.
//!
//! A ticket code looks like `OST-LQ2X1K5C-9F3ABC`: a fixed prefix, the
//! issuing time in milliseconds as uppercase base 36, and six random
//! base 36 characters. The printed ticket carries a symbol of the
//! validation URL for its code.
use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;
use thiserror::Error;

use crate::error::RenderError;

/// Prefix of every ticket code.
pub const TICKET_PREFIX: &str = "OST";

/// Canvas size used for symbols on ticket cards.
pub const TICKET_SYMBOL_SIZE: f64 = 150.0;

const RANDOM_LEN: usize = 6;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const HEX: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketCodeError {
    #[error("malformed ticket code {0:?}")]
    Malformed(String),
}

fn ticket_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^OST-[A-Z0-9]+-[A-Z0-9]+$").expect("valid regex"))
}

/// Check if `code` has the shape of a ticket code.
///
/// Only the format is checked, not whether such a ticket was ever issued.
pub fn is_valid_ticket_code(code: &str) -> bool {
    ticket_pattern().is_match(code)
}

/// A well-formed ticket code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketCode(String);

impl TicketCode {
    /// Issue a new code for the current time.
    pub fn generate() -> Self {
        Self::generate_at(Utc::now(), &mut rand::thread_rng())
    }

    /// Issue a code for the given time using `rng` for the random part.
    pub fn generate_at<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let random: String = (0..RANDOM_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}-{}-{}", TICKET_PREFIX, to_base36(millis), random))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL a scanner opens to validate this ticket.
    pub fn validation_url(&self, origin: &str) -> String {
        ticket_validation_url(origin, &self.0)
    }

    /// Render the validation URL as an SVG data URL of `size × size`.
    pub fn symbol(&self, origin: &str, size: f64) -> Result<String, RenderError> {
        crate::render_symbol(&self.validation_url(origin), size)
    }
}

impl FromStr for TicketCode {
    type Err = TicketCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_ticket_code(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(TicketCodeError::Malformed(s.to_owned()))
        }
    }
}

impl fmt::Display for TicketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TicketCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// URL validating `code`, relative to the storefront `origin`.
pub fn ticket_validation_url(origin: &str, code: &str) -> String {
    format!("{}/validate?ticket={}", origin.trim_end_matches('/'), code)
}

/// URL for paying a merchandise item on board.
///
/// The product name is percent-encoded, the price is written in its
/// shortest decimal form. Non-finite prices are spelled `Infinity`,
/// `-Infinity` and `NaN` like in the storefront's JavaScript.
pub fn merch_payment_url(origin: &str, product_id: &str, product_name: &str, price: f64) -> String {
    format!(
        "{}/pay?product={}&name={}&price={}",
        origin.trim_end_matches('/'),
        product_id,
        encode_uri_component(product_name),
        PriceDisplay(price)
    )
}

struct PriceDisplay(f64);

impl fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        if p.is_nan() {
            f.write_str("NaN")
        } else if p.is_infinite() {
            f.write_str(if p > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            write!(f, "{}", p)
        }
    }
}

// Percent-encode everything except the characters JavaScript's
// encodeURIComponent leaves untouched.
fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0xf) as usize] as char);
            }
        }
    }
    out
}

fn to_base36(mut n: u64) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&d| d as char).collect()
}
