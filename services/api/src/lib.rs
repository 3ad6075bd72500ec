mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use ivtc_campus::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
