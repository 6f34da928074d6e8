mod get_object_metadata;

use anyhow::Result;
use aws_sdk_s3 as s3;
#[allow(unused_imports)]
use mockall::automock;

use crate::model::ObjectMetadata;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Retrieves the metadata headers of the object stored at the provided key.
    #[tracing::instrument(skip(self))]
    pub async fn get_object_metadata(&self, bucket: &str, key: &str) -> Result<ObjectMetadata> {
        get_object_metadata::get_object_metadata(&self.inner, bucket, key).await
    }
}
