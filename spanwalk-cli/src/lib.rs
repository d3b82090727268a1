//! Support library for the `spanwalk` binary.
//!
//! The binary does no work of its own. It parses its (empty) command line,
//! installs logging and reports that the project is exercised through its
//! test and benchmark suites.

pub mod cli;
pub mod logging;
