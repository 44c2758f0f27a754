//! refcheck-core — comparison engine for numbered reference/candidate files.
//!
//! Everything with logic lives here: the tagged-segment diff model
//! ([`segment`]), the pairwise comparator ([`compare`]), the batch runner that
//! walks `data<N>.out` pairs ([`batch`]), and the two rendering strategies
//! ([`render`]). The crate performs no terminal styling of its own — markup is
//! injected through the [`render::Emphasis`] seam so the engine can be tested
//! without escape codes in assertions.

pub mod batch;
pub mod compare;
pub mod error;
pub mod render;
pub mod segment;
