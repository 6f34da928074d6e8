use aws_lambda_events::event::s3::S3EventRecord;

/// How a change record is dispatched, derived once from the raw s3 event name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The object was removed, e.g. `ObjectRemoved:Delete` or `ObjectRemoved:DeleteMarkerCreated`
    Deletion,
    /// Any other change (create, copy, restore, replication...)
    Mutation,
}

impl EventKind {
    /// Case sensitive, matched anywhere in the event name
    const DELETION_MARKER: &'static str = "Delete";
}

impl From<&str> for EventKind {
    fn from(event_name: &str) -> Self {
        if event_name.contains(Self::DELETION_MARKER) {
            EventKind::Deletion
        } else {
            EventKind::Mutation
        }
    }
}

/// A single object change taken from an s3 notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub event_name: String,
    pub kind: EventKind,
    pub bucket: String,
    pub key: String,
}

impl ChangeRecord {
    pub fn new(event_name: &str, bucket: &str, key: &str) -> Self {
        Self {
            event_name: event_name.to_string(),
            kind: EventKind::from(event_name),
            bucket: bucket.to_string(),
            key: key.to_string(),
        }
    }
}

impl From<S3EventRecord> for ChangeRecord {
    fn from(record: S3EventRecord) -> Self {
        let event_name = record.event_name.unwrap_or_default();
        let bucket = record.s3.bucket.name.unwrap_or_default();
        let key = record
            .s3
            .object
            .key
            .map(|key| decode_key(&key))
            .unwrap_or_default();

        Self::new(&event_name, &bucket, &key)
    }
}

/// Object keys arrive form encoded in s3 notifications: spaces as `+`, everything else percent encoded.
/// Keys whose escapes do not decode to valid utf-8 keep their escapes, spaces are still restored.
pub fn decode_key(key: &str) -> String {
    let spaced = key.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(|decoded| decoded.into_owned());
    match decoded {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(error=?e, key=%key, "unable to decode key");
            spaced
        }
    }
}

/// The descriptive headers s3 returns for an object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    pub content_type: Option<String>,
    pub content_length: Option<i64>,
    pub e_tag: Option<String>,
}

impl ObjectMetadata {
    /// The content type, empty when s3 did not report one
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or_default()
    }
}
