//! Automation ROI analysis engine.
//!
//! Estimates the financial case for automating a manual business
//! process: baseline cost of the status quo, three scenario projections
//! (pessimistic, realistic, optimistic) with ROI, payback, freed
//! capacity and NPV, plus-or-minus 10% sensitivity of the realistic
//! ROI, and narrative output for reports.
//!
//! Every computation is a pure function of one [`input::ProcessInput`]
//! record. Results are plain values recomputed on each call; there is
//! no shared state anywhere in the crate.

pub mod analysis;
pub mod baseline;
pub mod constants;
pub mod error;
pub mod export;
pub mod format;
pub mod input;
pub mod narrative;
pub mod scenario;
pub mod sensitivity;
pub mod share;
pub mod types;
