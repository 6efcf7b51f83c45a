//! Processor module for the index swap loader.
//!
//! Turns lines of newline-delimited JSON into identified documents.

mod document_processor;

pub use document_processor::DocumentProcessor;
