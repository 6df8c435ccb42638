use serde::Serialize;
use chrono::NaiveDate;
use crate::domain::services::time_codec::TimeLabel;

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub barber_id: Option<String>,
    pub slots: Vec<TimeLabel>,
}

#[derive(Serialize)]
pub struct DatesResponse {
    pub today: NaiveDate,
    pub dates: Vec<NaiveDate>,
}
