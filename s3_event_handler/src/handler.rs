use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};

use crate::{
    model::{ChangeRecord, EventKind},
    service,
};

/// Processes the s3 event.
/// Records are handled one at a time in the order they were delivered. A failed metadata lookup is
/// logged and skipped, it never fails the invocation.
#[tracing::instrument(skip(s3_client, event), fields(request_id = %event.context.request_id))]
pub async fn handler(
    s3_client: &service::s3::S3,
    event: LambdaEvent<S3Event>,
) -> Result<(), Error> {
    let records = event.payload.records;

    tracing::info!(
        "an s3 event has been received, it contains {} records",
        records.len()
    );

    for record in records {
        process_record(s3_client, ChangeRecord::from(record)).await;
    }

    Ok(())
}

#[tracing::instrument(skip_all, fields(bucket = %record.bucket, key = %record.key))]
async fn process_record(s3_client: &service::s3::S3, record: ChangeRecord) {
    tracing::info!(
        event_name=%record.event_name,
        "action: {}, bucket: {}, key: {}",
        record.event_name,
        record.bucket,
        record.key
    );

    match record.kind {
        EventKind::Deletion => {
            tracing::info!("you deleted {}/{}", record.bucket, record.key);
        }
        EventKind::Mutation => {
            match s3_client
                .get_object_metadata(&record.bucket, &record.key)
                .await
            {
                Ok(metadata) => {
                    tracing::info!(
                        content_length=?metadata.content_length,
                        e_tag=?metadata.e_tag,
                        "the file type is {}",
                        metadata.content_type()
                    );
                }
                Err(e) => {
                    tracing::error!("{e:#}");
                    tracing::error!(
                        error=?e,
                        "an error occurred while retrieving {}/{}: {e:#}",
                        record.bucket,
                        record.key
                    );
                }
            }
        }
    }
}
