
use satdeck_test_utils::prelude::*;

use super::*;
use crate::server::error::validation::ValidationError;

/// Sorted IDs of the satellites currently associated with a group.
async fn member_ids(test: &TestContext, group_id: i32) -> Result<Vec<i32>, TestError> {
    Ok(SatelliteGroupRepository::new(&test.db)
        .member_ids(group_id)
        .await?)
}
