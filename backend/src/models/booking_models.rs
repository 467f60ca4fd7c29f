use diesel::prelude::*;
use serde::Serialize;
use crate::schema::consultation_bookings;


#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = consultation_bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ConsultationBooking {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub business_name: Option<String>,
    pub industry: String,
    pub help_with: String, // selected topics joined with ", "
    pub current_challenges: String,
    pub preferred_time: Option<String>,
    pub hear_about: Option<String>,
    pub source_page: String, // page or modal the lead came from
    pub created_at: i32, // int timestamp utc epoch, set on insert
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = consultation_bookings)]
pub struct NewConsultationBooking {
    pub full_name: String,
    pub email: String,
    pub business_name: Option<String>,
    pub industry: String,
    pub help_with: String,
    pub current_challenges: String,
    pub preferred_time: Option<String>,
    pub hear_about: Option<String>,
    pub source_page: String,
    pub created_at: i32,
}
