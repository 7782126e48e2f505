//! Scheduled-tasks API.

use jobdeck_types::{CalendarOccurrence, ScheduleDefinition, Timestamp};

use crate::client::JobdeckClient;
use crate::error::Result;
use crate::types::{NewSchedule, OccurrencesResponse, ScheduleUpdate};

/// Scheduled-tasks API client.
pub struct SchedulesApi {
    client: JobdeckClient,
}

impl SchedulesApi {
    pub(crate) fn new(client: JobdeckClient) -> Self {
        Self { client }
    }

    /// List all schedule definitions.
    pub async fn list(&self) -> Result<Vec<ScheduleDefinition>> {
        self.client.get("scheduled-tasks").await
    }

    /// Get a schedule definition by id.
    pub async fn get(&self, id: &str) -> Result<ScheduleDefinition> {
        self.client.get(&format!("scheduled-tasks/{}", id)).await
    }

    /// Create a schedule definition.
    pub async fn create(&self, schedule: &NewSchedule) -> Result<ScheduleDefinition> {
        self.client.post("scheduled-tasks", schedule).await
    }

    /// Update a schedule definition.
    pub async fn update(&self, id: &str, update: &ScheduleUpdate) -> Result<ScheduleDefinition> {
        self.client
            .put(&format!("scheduled-tasks/{}", id), update)
            .await
    }

    /// Delete a schedule definition.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("scheduled-tasks/{}", id)).await
    }

    /// Projected occurrences for a date window, as computed by the backend.
    pub async fn occurrences(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<CalendarOccurrence>> {
        let response: OccurrencesResponse = self
            .client
            .get_with_query(
                "scheduled-tasks/occurrences",
                &[
                    ("start", start.to_rfc3339()),
                    ("end", end.to_rfc3339()),
                ],
            )
            .await?;
        Ok(response.occurrences)
    }
}
