//! Command-line front end for the `plainppm` binary.

pub(crate) mod cmd_args;
pub(crate) mod options;
pub(crate) mod workflow;
