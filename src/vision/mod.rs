//! Frame acquisition and hand detection.
//!
//! The webcam and the landmark model live outside this crate. A [`Camera`]
//! hands the game one [`Sample`] per call, already reduced to at most one
//! [`Hand`](crate::gesture::Hand).
pub mod detector;
pub use detector::*;

pub mod reply;
pub use reply::*;

pub mod replay;
pub use replay::*;

pub mod sample;
pub use sample::*;

/// Source of per-frame hand observations. Blocks until a frame is processed.
pub trait Camera {
    fn sample(&mut self) -> Sample;
}

impl<C> Camera for Box<C>
where
    C: Camera + ?Sized,
{
    fn sample(&mut self) -> Sample {
        (**self).sample()
    }
}
