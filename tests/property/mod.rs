//! Property-based tests for resolution, filtering and file naming

mod filter_laws;
mod resolver_laws;
mod sanitizer_laws;
