use tracing::info;

use crate::error::{Error, Result};
use crate::model::holiday::{Holiday, HolidayCategory};
use crate::store::HolidayStore;
use crate::utils::date::parse_date;

/// Administrator-facing holiday calendar maintenance. One holiday per date.
pub struct HolidayService<H> {
    holidays: H,
}

impl<H: HolidayStore> HolidayService<H> {
    pub fn new(holidays: H) -> Self {
        Self { holidays }
    }

    /// Declares a holiday. `Conflict` when the date already has one.
    pub async fn add(
        &self,
        date: &str,
        description: &str,
        category: HolidayCategory,
    ) -> Result<Holiday> {
        let date = parse_date(date)?;
        if description.trim().is_empty() {
            return Err(Error::InvalidArgument("holiday description is required".into()));
        }

        if self.holidays.find_by_date(date).await?.is_some() {
            return Err(Error::Conflict(format!("holiday already exists for {date}")));
        }

        let holiday = Holiday { date, description: description.trim().to_owned(), category };
        self.holidays.insert(holiday.clone()).await?;
        info!(%date, category = %category, "holiday added");
        Ok(holiday)
    }

    /// Updates the holiday on `date`; `NotFound` when none exists.
    pub async fn update(
        &self,
        date: &str,
        description: Option<String>,
        category: Option<HolidayCategory>,
    ) -> Result<Holiday> {
        let date = parse_date(date)?;
        if description.is_none() && category.is_none() {
            return Err(Error::InvalidArgument("no fields provided for update".into()));
        }

        let updated = self
            .holidays
            .update(date, description, category)
            .await?
            .ok_or_else(|| Error::NotFound(format!("holiday on {date}")))?;
        info!(%date, "holiday updated");
        Ok(updated)
    }

    /// Removes the holiday on `date`; `NotFound` when none exists.
    pub async fn remove(&self, date: &str) -> Result<()> {
        let date = parse_date(date)?;
        if !self.holidays.delete(date).await? {
            return Err(Error::NotFound(format!("holiday on {date}")));
        }
        info!(%date, "holiday removed");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Holiday>> {
        Ok(self.holidays.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn service(store: &MemoryStore) -> HolidayService<MemoryStore> {
        HolidayService::new(store.clone())
    }

    #[tokio::test]
    async fn add_then_duplicate_conflicts() {
        let store = MemoryStore::new();
        let svc = service(&store);

        let holiday = svc.add("2024-02-21", "Language Day", HolidayCategory::Government).await.unwrap();
        assert_eq!(holiday.description, "Language Day");

        let err = svc.add("2024-02-21", "again", HolidayCategory::Admin).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_description_is_rejected() {
        let store = MemoryStore::new();
        let err = service(&store).add("2024-02-21", "  ", HolidayCategory::Admin).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn update_requires_existing_holiday() {
        let store = MemoryStore::new();
        let svc = service(&store);

        let err = svc
            .update("2024-02-21", Some("renamed".into()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        svc.add("2024-02-21", "Language Day", HolidayCategory::Government).await.unwrap();
        let updated = svc
            .update("2024-02-21", None, Some(HolidayCategory::Admin))
            .await
            .unwrap();
        assert_eq!(updated.category, HolidayCategory::Admin);
        assert_eq!(updated.description, "Language Day");
    }

    #[tokio::test]
    async fn remove_missing_holiday_is_not_found() {
        let store = MemoryStore::new();
        let svc = service(&store);

        svc.add("2024-02-21", "Language Day", HolidayCategory::Government).await.unwrap();
        svc.remove("2024-02-21").await.unwrap();

        let err = svc.remove("2024-02-21").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
