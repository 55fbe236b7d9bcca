pub mod diagnostics;
pub mod event;
pub mod integrator;
pub mod propagator;

pub use event::{Direction, EventRecord, EventSpec};
pub use integrator::rk4_step;
pub use propagator::{
    propagate, propagate_with_events, Method, Propagation, Trajectory, DEFAULT_MAX_STEPS,
};
