//! Schedule CRUD with local validation.

use tracing::{debug, info};

use jobdeck_client::JobdeckClient;
use jobdeck_client::types::{NewSchedule, ScheduleUpdate};
use jobdeck_types::{CalendarOccurrence, ScheduleDefinition, Timestamp};

use crate::error::Result;
use crate::occurrence::{parse_cron, parse_timezone, project_occurrences};

/// Manages recurring schedule definitions.
///
/// Definitions are stored by the backend; the manager validates cron
/// expressions and timezones locally before any write so a malformed
/// definition never reaches the store, and computes calendar occurrences
/// client-side from the fetched definitions.
pub struct ScheduleManager {
    client: JobdeckClient,
}

impl ScheduleManager {
    pub fn new(client: JobdeckClient) -> Self {
        Self { client }
    }

    /// All schedule definitions, enabled or not.
    pub async fn list(&self) -> Result<Vec<ScheduleDefinition>> {
        Ok(self.client.schedules().list().await?)
    }

    /// A single definition by id.
    pub async fn get(&self, id: &str) -> Result<ScheduleDefinition> {
        Ok(self.client.schedules().get(id).await?)
    }

    /// Create a definition after validating its cron expression and
    /// timezone.
    pub async fn create(&self, schedule: &NewSchedule) -> Result<ScheduleDefinition> {
        parse_cron(&schedule.cron_expression)?;
        parse_timezone(&schedule.timezone)?;

        let created = self.client.schedules().create(schedule).await?;
        info!(
            id = %created.id,
            pipeline = %created.pipeline_name,
            cron = %created.cron_expression,
            "schedule created"
        );
        Ok(created)
    }

    /// Apply a partial update, validating cron/timezone when present.
    pub async fn update(&self, id: &str, update: &ScheduleUpdate) -> Result<ScheduleDefinition> {
        if let Some(cron) = &update.cron_expression {
            parse_cron(cron)?;
        }
        if let Some(tz) = &update.timezone {
            parse_timezone(tz)?;
        }

        let updated = self.client.schedules().update(id, update).await?;
        info!(id = %updated.id, "schedule updated");
        Ok(updated)
    }

    /// Toggle a definition on or off without touching its other fields.
    pub async fn set_enabled(&self, id: &str, enabled: bool) -> Result<ScheduleDefinition> {
        self.update(
            id,
            &ScheduleUpdate {
                enabled: Some(enabled),
                ..ScheduleUpdate::default()
            },
        )
        .await
    }

    /// Delete a definition.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.schedules().delete(id).await?;
        info!(id, "schedule deleted");
        Ok(())
    }

    /// Concrete occurrences of all enabled definitions within
    /// `[start, end)`, computed locally from the fetched definitions.
    pub async fn occurrences(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<CalendarOccurrence>> {
        let definitions = self.client.schedules().list().await?;
        debug!(
            definitions = definitions.len(),
            %start,
            %end,
            "projecting occurrences"
        );
        project_occurrences(&definitions, start, end)
    }
}
