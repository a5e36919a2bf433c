//! Finger counting and the colour table.
//!
//! A [`Hand`] is the 21-point landmark set reported by the detector for one
//! frame. Counting raised fingers is pure geometry on those points; the
//! [`Palette`] then turns the count into a [`Color`] through an injective table.
pub mod color;
pub use color::*;

pub mod finger;
pub use finger::*;

pub mod hand;
pub use hand::*;

pub mod handedness;
pub use handedness::*;

pub mod landmark;
pub use landmark::*;

pub mod palette;
pub use palette::*;
