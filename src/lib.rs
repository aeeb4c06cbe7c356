//! `galore` is a command line tool that wraps the Trim Galore adapter and
//! quality trimming tool, exposing paired-end read trimming as a managed
//! workflow step. This package is composed of both a library crate, as well
//! as a binary crate.
//!
//! The heart of the library is the translation of a typed parameter set into
//! a Trim Galore invocation (see [`trim::builder`]) and the small driver that
//! executes that invocation and republishes the resulting output directory as
//! a portable artifact (see [`trim::driver`]). Everything else is the
//! surrounding workflow plumbing: the parameter surface itself, its display
//! metadata, and the command line entry points.
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]

pub mod describe;
pub mod meta;
pub mod trim;
