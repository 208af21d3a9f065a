//! Command frame codec for motorized-shade hubs.
//!
//! shadewire speaks the keyed binary frame format used between a vendor
//! cloud relay and shade hub devices: discovery, status queries, and motor
//! commands all travel as one frame shape.
//!
//! # Crate Structure
//!
//! - [`wire`]: cursor-style byte reader/writer with switchable endianness
//! - [`frame`]: the frame model, key registry, decoder, and encoder

/// Re-export low-level byte cursor types.
pub mod wire {
    pub use shadewire_wire::*;
}

/// Re-export frame model and codec types.
pub mod frame {
    pub use shadewire_frame::*;
}
