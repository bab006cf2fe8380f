//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Error, ordering, JSON, and persistent collections.

mod values;
