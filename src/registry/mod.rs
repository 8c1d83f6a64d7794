//! Mode registry for host editors.
//!
//! A host that drives tokenizers per line needs a way to pick one when a
//! buffer declares its language. This module provides that seam as an
//! explicit registry object: tokenizers are registered under their mode
//! id by whoever owns the registry, and nothing registers itself as an
//! import side effect.

pub mod registry;

#[cfg(test)]
mod tests;
