use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Business, User};
///
/// let test = TestBuilder::new()
///     .with_table(Business)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables for users, businesses and memberships.
    ///
    /// Adds in dependency order:
    /// - Business
    /// - User
    /// - ApiToken
    /// - BusinessMember
    /// - UserActiveRole
    /// - DeviceToken
    /// - Notification
    pub fn with_business_tables(self) -> Self {
        self.with_table(Business)
            .with_table(User)
            .with_table(ApiToken)
            .with_table(BusinessMember)
            .with_table(UserActiveRole)
            .with_table(DeviceToken)
            .with_table(Notification)
    }

    /// Adds every table needed for the waiter call flow.
    ///
    /// Equivalent to `with_business_tables()` followed by RestaurantTable, TableSilence,
    /// WaiterCall and IpBlock.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_call_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_call_tables(self) -> Self {
        self.with_business_tables()
            .with_table(RestaurantTable)
            .with_table(TableSilence)
            .with_table(WaiterCall)
            .with_table(IpBlock)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
