//! # tagkv Testkit
//!
//! Testing utilities for tagkv.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known values with their expected stored text and type tag
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up and corrupting test stores
//!
//! ## Golden Vectors
//!
//! Golden vectors pin down the persisted layout so other readers of the same
//! store agree on it:
//!
//! ```rust
//! use tagkv_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, data) in verify_all_vectors() {
//!     assert!(ok, "{name}: stored {data:?}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tagkv_testkit::generators::ValueParams;
//! use tagkv_testkit::fixtures::TestFixture;
//!
//! proptest! {
//!     #[test]
//!     fn values_round_trip(params: ValueParams) {
//!         let fixture = TestFixture::new();
//!         fixture.storage.set_value(&params.key, params.ty, params.value.clone()).unwrap();
//!         let back = fixture.storage.get_value(&params.key, params.ty).unwrap();
//!         prop_assert_eq!(back, Some(params.value));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use tagkv_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! fixture.storage.set_string("name", "Ada").unwrap();
//! fixture.drop_type_record("name");
//! assert!(fixture.storage.get_string("name").is_err());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{SqliteFixture, TestFixture};
pub use generators::{storable_value, ValueParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
