//! Kani proof harnesses
//!
//! This module contains the Kani verification proofs for the priority queue.
//! The files are organized by category:
//!
//! - `operation_proofs.rs`: Length and ordering contracts of each operation
//! - `edge_case_proofs.rs`: Empty queue, single element, and duplicate handling

#[cfg(kani)]
#[path = "operation_proofs.rs"]
mod operation_proofs;
