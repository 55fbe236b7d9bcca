pub mod constants;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod orbital;
pub mod sim;

pub use error::{Error, Result};

// Convenience re-exports for the common propagation entry points
pub use dynamics::{circular_orbit_state, two_body_dynamics, DynamicsParams, StateVec};
pub use sim::{
    propagate, propagate_with_events, Direction, EventRecord, EventSpec, Method, Propagation,
    Trajectory,
};
