//! Command-line parsing and the solve-and-report drivers used by the binary.

pub(crate) mod cli;
