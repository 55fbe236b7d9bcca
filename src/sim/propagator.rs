use std::str::FromStr;

use crate::dynamics::{DynamicsParams, StateVec};
use crate::error::{Error, Result};
use crate::sim::event::{EventRecord, EventSpec};
use crate::sim::integrator::rk4_step;

// ---------------------------------------------------------------------------
// Fixed-step trajectory propagation
// ---------------------------------------------------------------------------

/// Integration method selector. Only RK4 is implemented; the selector exists
/// so callers can name the method and get a clean rejection for anything
/// unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Rk4,
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rk4" => Ok(Method::Rk4),
            other => Err(Error::InvalidArgument(format!(
                "unknown integration method: {other}"
            ))),
        }
    }
}

/// An ordered sequence of (time, state) samples. `times` and `states` are
/// index-aligned; the first sample is the initial condition and `steps` is
/// the number of integration steps taken (`len() == steps + 1` unless the
/// step cap truncated the run).
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub states: Vec<StateVec>,
    pub steps: usize,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Final (time, state) sample.
    pub fn last(&self) -> Option<(f64, &StateVec)> {
        self.times.last().map(|t| (*t, self.states.last().unwrap()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &StateVec)> {
        self.times.iter().copied().zip(self.states.iter())
    }
}

fn check_span_and_step(span: (f64, f64), dt: f64) -> Result<()> {
    if span.1 < span.0 {
        return Err(Error::InvalidArgument(format!(
            "time span end {} is before start {}",
            span.1, span.0
        )));
    }
    if dt <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "step size must be positive, got {dt}"
        )));
    }
    Ok(())
}

/// Next step size and time: nominal `dt`, truncated on the final step so the
/// last sample lands on `t1` exactly.
fn next_step(t: f64, t1: f64, dt: f64) -> (f64, f64) {
    let remaining = t1 - t;
    if remaining <= dt {
        (remaining, t1)
    } else {
        (dt, t + dt)
    }
}

/// Propagate `y0` over `span = (t0, t1)` with fixed step `dt`.
///
/// Every step uses the nominal `dt` except the last, which is shortened to
/// land on `t1` exactly. The returned trajectory starts with the initial
/// condition; a zero-length span yields that single sample and zero steps.
pub fn propagate<F>(
    f: F,
    y0: &StateVec,
    span: (f64, f64),
    dt: f64,
    params: &DynamicsParams,
    method: Method,
) -> Result<Trajectory>
where
    F: Fn(f64, &StateVec, &DynamicsParams) -> StateVec,
{
    check_span_and_step(span, dt)?;
    let Method::Rk4 = method;

    let (t0, t1) = span;
    let capacity = (((t1 - t0) / dt).ceil() as usize).saturating_add(1).min(1_000_000);
    let mut traj = Trajectory {
        times: Vec::with_capacity(capacity),
        states: Vec::with_capacity(capacity),
        steps: 0,
    };

    let mut t = t0;
    let mut y = *y0;
    traj.times.push(t);
    traj.states.push(y);

    while t < t1 {
        let (h, t_new) = next_step(t, t1, dt);
        y = rk4_step(&f, &y, t, h, params);
        t = t_new;
        traj.steps += 1;
        traj.times.push(t);
        traj.states.push(y);
    }

    Ok(traj)
}

// ---------------------------------------------------------------------------
// Event-aware propagation
// ---------------------------------------------------------------------------

/// Default step cap for [`propagate_with_events`].
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Trajectory plus the events detected while producing it.
#[derive(Debug)]
pub struct Propagation {
    pub trajectory: Trajectory,
    pub events: Vec<EventRecord>,
}

/// Propagate like [`propagate`], additionally watching `events` for zero
/// crossings between consecutive samples.
///
/// The loop is bounded by `max_steps`: a span that would need more steps is
/// truncated there, reported through `Trajectory::steps` rather than as an
/// error. Each detected crossing is recorded with the post-step time and
/// state; when several event functions cross on the same step, records are
/// appended in the order the specs were supplied.
pub fn propagate_with_events<F>(
    f: F,
    y0: &StateVec,
    span: (f64, f64),
    dt: f64,
    params: &DynamicsParams,
    events: &[EventSpec],
    max_steps: usize,
) -> Result<Propagation>
where
    F: Fn(f64, &StateVec, &DynamicsParams) -> StateVec,
{
    check_span_and_step(span, dt)?;

    let (t0, t1) = span;
    let capacity = (((t1 - t0) / dt).ceil() as usize)
        .saturating_add(1)
        .min(max_steps.saturating_add(1))
        .min(1_000_000);
    let mut traj = Trajectory {
        times: Vec::with_capacity(capacity),
        states: Vec::with_capacity(capacity),
        steps: 0,
    };
    let mut log = Vec::new();

    let mut t = t0;
    let mut y = *y0;
    traj.times.push(t);
    traj.states.push(y);

    while t < t1 && traj.steps < max_steps {
        let (h, t_new) = next_step(t, t1, dt);
        let y_new = rk4_step(&f, &y, t, h, params);

        for spec in events {
            let old_value = (spec.func)(&y);
            let new_value = (spec.func)(&y_new);
            if spec.crossed(old_value, new_value) {
                log.push(EventRecord {
                    time: t_new,
                    state: y_new,
                    name: spec.name.clone(),
                });
            }
        }

        t = t_new;
        y = y_new;
        traj.steps += 1;
        traj.times.push(t);
        traj.states.push(y);
    }

    Ok(Propagation {
        trajectory: traj,
        events: log,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
