use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Fetch an object and decode its JSON body.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes();

    Ok(serde_json::from_slice(&body)?)
}

/// Encode a value as JSON and write it. Returns the new ETag.
pub async fn put_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    let resp = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/json")
        .body(ByteStream::from(body))
        .send()
        .await
        .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

    Ok(resp.e_tag().unwrap_or_default().to_string())
}

/// The first `max_keys` keys under a prefix, in S3's ascending key order.
///
/// Issues a single LIST request; S3 caps a page at 1,000 keys.
pub async fn list_first_keys(
    client: &Client,
    bucket: &str,
    prefix: &str,
    max_keys: usize,
) -> Result<Vec<String>, StorageError> {
    if max_keys == 0 {
        return Ok(Vec::new());
    }

    let resp = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .max_keys(i32::try_from(max_keys).unwrap_or(i32::MAX))
        .send()
        .await
        .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

    Ok(resp
        .contents()
        .iter()
        .filter_map(|obj| obj.key())
        .take(max_keys)
        .map(str::to_string)
        .collect())
}
