use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    match barber_booking::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Shutting down: {}", e);
            eprintln!("barber-booking: {}", e);
            ExitCode::FAILURE
        }
    }
}
