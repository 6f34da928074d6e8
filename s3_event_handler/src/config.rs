use anyhow::Context;
use aws_sdk_s3::config::Region;

/// Region used when `AWS_REGION` is not provided
pub const DEFAULT_REGION: &str = "us-east-1";

/// The configuration parameters for the s3 client.
///
/// These are pulled from environment variables, credentials are resolved separately through the
/// default aws provider chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The region the s3 client talks to.
    pub region: String,

    /// Overrides the s3 endpoint, e.g. to point at localstack or minio.
    pub endpoint_url: Option<String>,

    /// Use path style addressing (`endpoint/bucket/key`) rather than virtual hosted buckets.
    pub force_path_style: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup
    pub fn from_source<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup("AWS_REGION")
            .filter(|region| !region.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let endpoint_url = lookup("S3_ENDPOINT_URL").filter(|url| !url.is_empty());
        let force_path_style = lookup("S3_FORCE_PATH_STYLE")
            .map(|value| value.parse::<bool>())
            .transpose()
            .context("S3_FORCE_PATH_STYLE must be either true or false")?
            .unwrap_or(false);

        Ok(Config {
            region,
            endpoint_url,
            force_path_style,
        })
    }

    /// Builds the s3 client described by this config
    pub async fn s3_client(&self) -> aws_sdk_s3::Client {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(self.force_path_style);
        if let Some(endpoint_url) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        aws_sdk_s3::Client::from_conf(builder.build())
    }
}
