//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained together and queued, then executed in order by the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture records. Fixtures are referenced by name so memberships can be declared
/// before record IDs are known.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_satellite_tables: bool,

    // Database fixtures to insert
    satellites: Vec<String>,
    groups: Vec<String>,
    memberships: Vec<(String, String)>, // (satellite_name, group_name)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_satellite_tables: false,
            satellites: Vec::new(),
            groups: Vec::new(),
            memberships: Vec::new(),
        }
    }

    /// Add the satellite, group and association tables to the test database.
    pub fn with_satellite_tables(mut self) -> Self {
        self.include_satellite_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables, parents first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use satdeck_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), satdeck_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Satellite)
    ///     .with_table(Group)
    ///     .with_table(SatelliteGroup)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock satellite carrying the ISS element set into the database.
    pub fn with_mock_satellite(mut self, name: impl Into<String>) -> Self {
        self.satellites.push(name.into());
        self
    }

    /// Insert a mock active group into the database.
    pub fn with_mock_group(mut self, group_name: impl Into<String>) -> Self {
        self.groups.push(group_name.into());
        self
    }

    /// Associate a queued satellite with a queued group, both referenced by name.
    pub fn with_membership(
        mut self,
        satellite_name: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        self.memberships
            .push((satellite_name.into(), group_name.into()));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes queued operations in the following order:
    /// 1. Creates database tables (satellite tables if specified, then custom tables)
    /// 2. Inserts satellites, then groups, then memberships
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::MissingFixture)` - A membership references an unknown fixture name
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_satellite_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Satellite),
                schema.create_table_from_entity(entity::prelude::Group),
                schema.create_table_from_entity(entity::prelude::SatelliteGroup),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        let mut satellites = Vec::new();
        for name in self.satellites {
            satellites.push(setup.satellite().insert_mock_satellite(&name).await?);
        }

        let mut groups = Vec::new();
        for group_name in self.groups {
            groups.push(setup.group().insert_mock_group(&group_name).await?);
        }

        for (satellite_name, group_name) in self.memberships {
            let satellite = satellites
                .iter()
                .find(|s| s.name == satellite_name)
                .ok_or_else(|| TestError::MissingFixture(satellite_name.clone()))?;
            let group = groups
                .iter()
                .find(|g| g.group_name == group_name)
                .ok_or_else(|| TestError::MissingFixture(group_name.clone()))?;

            setup
                .group()
                .insert_membership(satellite.id, group.id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
