//! Chat export extractors.
//!
//! - [`WhatsAppParser`] - line scanner for WhatsApp TXT exports

pub mod whatsapp;

pub use whatsapp::{ScanStats, WhatsAppParser};
