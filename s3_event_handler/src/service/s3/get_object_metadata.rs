use anyhow::Context;
use aws_sdk_s3 as s3;

use crate::model::ObjectMetadata;

/// Performs a head object request for the given key
#[tracing::instrument(skip(client))]
pub(in crate::service::s3) async fn get_object_metadata(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<ObjectMetadata> {
    let resp = client.head_object().bucket(bucket).key(key).send().await;

    let output = match resp {
        Ok(output) => output,
        Err(e) => {
            if e.as_service_error().map(|e| e.is_not_found()) == Some(true) {
                return Err(anyhow::anyhow!("object {bucket}/{key} does not exist"));
            }

            return Err(e).context(format!(
                "could not retrieve metadata for {key} from bucket {bucket}"
            ));
        }
    };

    Ok(ObjectMetadata {
        content_type: output.content_type().map(str::to_string),
        content_length: output.content_length(),
        e_tag: output.e_tag().map(str::to_string),
    })
}
