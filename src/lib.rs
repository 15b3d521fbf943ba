// tor-dataset: Transcribers of Reddit screenshot dataset builder
//
// This is the library root. Inputs are loaded by `ingest`, reconciled by
// `pipeline`, labeled by `classify` and written out by `dataset`.

pub mod classify;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod status;
