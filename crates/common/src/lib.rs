// folio-common: shared types and text analysis for the Folio workspace

pub mod assist;
pub mod diff;
pub mod outline;
pub mod protect;
pub mod stats;
pub mod types;
