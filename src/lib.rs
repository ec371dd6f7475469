//! Exhaustive truth tables for combinational gate networks.
//!
//! A [`Network`] is a list of gates, each reading primary inputs or other gates' outputs. [`evaluate_all`] computes every gate for one assignment of the primary inputs and [`enumerate`] repeats that over all `2^n` assignments.

pub mod enumerate;
pub mod error;
pub mod eval;
pub mod gate;
pub mod import;
pub mod netlist;
pub mod network;
pub mod table;
pub(crate) mod utils;

pub use enumerate::{enumerate, enumerate_parallel, Assignment, Assignments, Row, Rows};
pub use error::{EvalError, NetworkError};
pub use eval::{evaluate_all, GateValues};
pub use gate::GateKind;
pub use network::{GateId, GateSpec, InputRef, Network};

/// Loads a netlist, picking the JSON reader for `.json` files and the text reader for everything else.
pub fn load(filename: &str) -> Result<Network, Box<dyn std::error::Error>> {
    if std::path::Path::new(filename).extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        import::import(filename)
    } else {
        netlist::load(filename)
    }
}
