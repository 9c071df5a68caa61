//! Declarative test builder.
//!
//! Configuration methods queue tables and fixtures, all of which are applied
//! during the final [`TestBuilder::build`] call.

use entity::sea_orm_active_enums::UserType;
use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_marketplace_tables: bool,

    users: Vec<(String, UserType)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_marketplace_tables: false,
            users: Vec::new(),
        }
    }

    /// Add every marketplace table to the test database.
    ///
    /// Creates users, student profiles, startups, internships and applications in
    /// dependency order, along with the unique index preventing duplicate applications.
    pub fn with_marketplace_tables(mut self) -> Self {
        self.include_marketplace_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use internhub_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), internhub_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(User).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided email and type during `build()`.
    pub fn with_user(mut self, email: impl Into<String>, user_type: UserType) -> Self {
        self.users.push((email.into(), user_type));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_marketplace_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::StudentProfile),
                schema.create_table_from_entity(entity::prelude::Startup),
                schema.create_table_from_entity(entity::prelude::Internship),
                schema.create_table_from_entity(entity::prelude::Application),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        if self.include_marketplace_tables {
            context
                .with_index(
                    Index::create()
                        .name("idx-applications-student_id-internship_id")
                        .table(entity::application::Entity)
                        .col(entity::application::Column::StudentId)
                        .col(entity::application::Column::InternshipId)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        for (email, user_type) in self.users {
            context.user().insert_user(&email, user_type).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
