#![recursion_limit = "256"]

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use handler_entrypoint::HandlerEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use s3_event_handler::{config::Config, handler::handler, service};

#[tokio::main]
async fn main() -> Result<(), Error> {
    HandlerEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    let s3_client = service::s3::S3::new(config.s3_client().await);

    tracing::trace!(config=?config, "initialized s3 client");

    let shared_s3_client = Arc::new(s3_client);

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let s3_client = shared_s3_client.clone();

        async move { handler(&s3_client, event).await }
    });

    run(func).await
}
