//! Shared helpers for quickcheck-based tests.
