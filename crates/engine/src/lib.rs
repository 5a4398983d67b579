// folio-engine: in-memory document lifecycle managers.
//
// Each manager is an explicitly constructed, explicitly owned value; none
// calls into another, and nothing here persists or performs I/O. Not-found
// is reported through `Option`/`bool` returns, never through errors.

pub mod annotation;
pub mod audit;
pub mod awareness;
pub mod history;
pub mod ids;
pub mod permission;
pub mod relation;
pub mod tags;
pub mod workflow;
