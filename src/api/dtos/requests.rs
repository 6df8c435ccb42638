use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    pub barber_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateAppointmentRequest {
    pub customer_id: String,
    pub barber_id: String,
    pub service_id: String,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    /// Opaque reference returned by the card processor after payment confirmation.
    pub payment_reference: Option<String>,
}

#[derive(Deserialize)]
pub struct ListAppointmentsQuery {
    pub date: Option<String>,
    pub barber_id: Option<String>,
    pub customer_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateAppointmentStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    /// `null` clears the duration so bookings fall back to one slot.
    #[serde(default, deserialize_with = "explicit_null")]
    pub duration_minutes: Option<Option<i32>>,
}

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
}
