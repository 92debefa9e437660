//! MozoQR Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the call-waiter
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, plus factories that insert entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories (`UserFactory`, `TableFactory`, `WaiterCallFactory`, ...)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_table_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_call_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
//!     let table = factory::create_table(db, business.id).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
