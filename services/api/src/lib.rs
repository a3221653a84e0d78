mod cli;
mod infra;
mod quote;
mod routes;
mod server;

use property_markup::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
