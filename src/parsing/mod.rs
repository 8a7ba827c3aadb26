//! Shared parsing utilities.
//!
//! - [`whatsapp`] - line grammar and time parsing for WhatsApp TXT exports

pub mod whatsapp;
