//! The game session: timed rounds, score keeping and the controller
//! session bracket, driven one blocking sample at a time.
pub mod clock;
pub use clock::*;

pub mod score;
pub use score::*;

pub mod session;
pub use session::*;

pub mod settings;
pub use settings::*;
