//! Progress reporting for a run

pub mod reporter;
