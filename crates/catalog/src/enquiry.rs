//! WhatsApp enquiry links.

use serde::Serialize;

use crate::product::Product;

const WHATSAPP_BASE: &str = "https://wa.me/";
const GENERAL_MESSAGE: &str = "Hi! I am interested in your furniture collection. Can you help me?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnquiryLink {
    pub url: String,
    pub message: String,
}

impl EnquiryLink {
    pub fn new(phone_number: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let url = format!(
            "{WHATSAPP_BASE}{phone_number}?text={}",
            encode_uri_component(&message)
        );
        Self { url, message }
    }

    /// Floating "chat with us" button.
    pub fn general(phone_number: &str) -> Self {
        Self::new(phone_number, GENERAL_MESSAGE)
    }

    /// Product page "enquire on WhatsApp" button.
    pub fn for_product(phone_number: &str, product: &Product) -> Self {
        Self::new(
            phone_number,
            format!(
                "Hi! I'm interested in the {} ({}). Can you provide more details?",
                product.name, product.price
            ),
        )
    }
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the set
/// browsers leave alone in `encodeURIComponent`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
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
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
