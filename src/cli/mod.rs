//! # CLI Module
//!
//! Command-line interface for the `autoroute-gen` binary.
//!
//! ## Commands
//!
//! ### `synthesize`
//!
//! Synthesize endpoint templates from a descriptor file:
//!
//! ```bash
//! autoroute-gen synthesize --descriptors funcs.yaml --root /srv/app
//! ```
//!
//! Prints each function's templates (normalized, most-minimal first) to
//! stdout. `--fallback-prefix` substitutes for sources outside the root;
//! `--raw` skips URL normalization.
//!
//! ### `inspect`
//!
//! Show the required / optional / hidden parameter partition per function
//! without synthesizing:
//!
//! ```bash
//! autoroute-gen inspect --descriptors funcs.yaml
//! ```
//!
//! Type tags are validated along the way: a descriptor that would fail
//! synthesis with an unrecognized tag fails `inspect` with the same error.

mod commands;


pub use commands::{
    execute, inspect_file, run_cli, synthesize_file, Cli, Commands, PartitionSummary,
};
