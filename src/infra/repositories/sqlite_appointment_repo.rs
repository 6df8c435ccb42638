use crate::domain::{models::appointment::{Appointment, AppointmentFilter, BookedSlot}, ports::AppointmentRepository};
use crate::domain::models::profile::ROLE_BARBER;
use crate::domain::services::time_codec::to_minutes;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteAppointmentRepo {
    pool: SqlitePool,
}

impl SqliteAppointmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for SqliteAppointmentRepo {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (id, customer_id, barber_id, service_id, date, time, status, notes, payment_reference, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&appointment.id).bind(&appointment.customer_id).bind(&appointment.barber_id).bind(&appointment.service_id)
            .bind(appointment.date).bind(&appointment.time).bind(&appointment.status).bind(&appointment.notes)
            .bind(&appointment.payment_reference).bind(appointment.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>, AppError> {
        let mut appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments
             WHERE (? IS NULL OR date = ?) AND (? IS NULL OR barber_id = ?) AND (? IS NULL OR customer_id = ?)
             ORDER BY date ASC, created_at ASC"
        )
            .bind(filter.date).bind(filter.date)
            .bind(&filter.barber_id).bind(&filter.barber_id)
            .bind(&filter.customer_id).bind(&filter.customer_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;

        // Stored labels do not sort lexically ("10:00 AM" < "2:00 PM").
        appointments.sort_by_key(|a| (a.date, to_minutes(&a.time)));
        Ok(appointments)
    }
    async fn list_booked_slots(&self, date: NaiveDate, barber_id: Option<&str>) -> Result<Vec<BookedSlot>, AppError> {
        sqlx::query_as::<_, BookedSlot>(
            "SELECT a.time AS time, a.barber_id AS barber_id, s.duration_minutes AS service_duration_minutes
             FROM appointments a
             JOIN profiles p ON p.id = a.barber_id AND p.active = 1 AND p.role = ?
             LEFT JOIN services s ON s.id = a.service_id
             WHERE a.date = ? AND a.status != 'cancelled' AND (? IS NULL OR a.barber_id = ?)"
        )
            .bind(ROLE_BARBER).bind(date).bind(barber_id).bind(barber_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_status(&self, id: &str, status: &str) -> Result<Appointment, AppError> {
        sqlx::query_as::<_, Appointment>("UPDATE appointments SET status = ? WHERE id = ? RETURNING *")
            .bind(status).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Appointment not found".into()))
    }
}
