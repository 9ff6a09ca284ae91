//! Integration tests for `asvscope-common`, exercised through its public API only.

mod classification;
mod debounce;
mod summary;
