use diesel::prelude::*;
use diesel::result::Error as DieselError;
use crate::{
    models::booking_models::{ConsultationBooking, NewConsultationBooking},
    schema::consultation_bookings,
    db::DbPool,
};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Query(#[from] DieselError),
}

/// Append-only storage for consultation requests.
pub trait BookingStore: Send + Sync {
    fn insert(&self, booking: NewConsultationBooking) -> Result<ConsultationBooking, RepositoryError>;
}

pub struct DieselBookingStore {
    pool: DbPool
}

impl DieselBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BookingStore for DieselBookingStore {
    // Insert a booking and hand back the stored row
    fn insert(&self, booking: NewConsultationBooking) -> Result<ConsultationBooking, RepositoryError> {
        let mut conn = self.pool.get()?;
        let stored = conn.immediate_transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(consultation_bookings::table)
                .values(&booking)
                .execute(conn)?;
            consultation_bookings::table
                .order(consultation_bookings::id.desc())
                .select(ConsultationBooking::as_select())
                .first(conn)
        })?;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn booking(name: &str) -> NewConsultationBooking {
        NewConsultationBooking {
            full_name: name.to_string(),
            email: "jane@x.com".to_string(),
            business_name: None,
            industry: "Healthcare".to_string(),
            help_with: "AI Integration".to_string(),
            current_challenges: "Too much manual charting".to_string(),
            preferred_time: Some("Morning (9am - 12pm)".to_string()),
            hear_about: None,
            source_page: "start-page".to_string(),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn insert_returns_stored_row() {
        let (_dir, pool) = test_pool();
        let store = DieselBookingStore::new(pool);

        let stored = store.insert(booking("Jane Doe")).unwrap();

        assert!(stored.id > 0);
        assert_eq!(stored.full_name, "Jane Doe");
        assert_eq!(stored.industry, "Healthcare");
        assert_eq!(stored.help_with, "AI Integration");
        assert_eq!(stored.business_name, None);
        assert_eq!(stored.preferred_time.as_deref(), Some("Morning (9am - 12pm)"));
        assert_eq!(stored.created_at, 1_700_000_000);
    }

    #[test]
    fn every_submission_is_a_new_row() {
        let (_dir, pool) = test_pool();
        let store = DieselBookingStore::new(pool.clone());

        let first = store.insert(booking("Jane Doe")).unwrap();
        let second = store.insert(booking("Jane Doe")).unwrap();
        assert_ne!(first.id, second.id);

        let mut conn = pool.get().unwrap();
        let total: i64 = consultation_bookings::table
            .count()
            .get_result(&mut conn)
            .unwrap();
        assert_eq!(total, 2);
    }
}
