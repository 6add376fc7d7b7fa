//! Polywog Hardware Abstraction Layer
//!
//! This crate defines the storage abstraction that chip- or board-specific
//! EEPROM drivers implement. Node firmware only ever talks to the trait, so
//! the same configuration code runs against on-chip EEPROM, an external
//! I2C/SPI part, or an in-memory image on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Node firmware / polywog-config         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  polywog-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board EEPROM  │       │ MemoryEeprom  │
//! │    driver     │       │ (host images) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`eeprom::EepromRead`] - Byte-range reads from non-volatile storage

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod memory;

// Re-export key items at crate root for convenience
pub use eeprom::{EepromError, EepromRead};
pub use memory::MemoryEeprom;
