//! Purpose: Provide the HTTP client for the remote student collection resource.
//! Exports: `EndpointClient`.
//! Role: Translate list/create/delete into GET/POST/DELETE against one fixed URL.
//! Invariants: Requests carry no auth, no retry, no timeout beyond platform defaults.
//! Invariants: Remote field names (`academicRegistration`) stay at this boundary;
//! Invariants: callers only ever see `StudentRecord`.
use crate::core::error::{Error, ErrorKind};
use crate::core::record::{RecordDraft, StudentRecord};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

type ApiResult<T> = Result<T, Error>;

/// Client for one remote collection resource.
#[derive(Clone, Debug)]
pub struct EndpointClient {
    http: reqwest::Client,
    collection_url: Url,
}

#[derive(Deserialize)]
struct RemoteRecord {
    id: String,
    name: String,
    age: u32,
    #[serde(rename = "academicRegistration")]
    registration: String,
}

#[derive(Serialize)]
struct CreateRecordRequest<'a> {
    name: &'a str,
    age: u32,
    #[serde(rename = "academicRegistration")]
    registration: &'a str,
}

impl EndpointClient {
    pub fn new(collection_url: impl Into<String>) -> ApiResult<Self> {
        let collection_url = normalize_collection_url(collection_url.into())?;
        Ok(Self {
            http: reqwest::Client::new(),
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// GET the collection and decode it as a JSON array of records.
    pub async fn list(&self) -> ApiResult<Vec<StudentRecord>> {
        tracing::debug!(url = %self.collection_url, "listing records");
        let response = self
            .http
            .get(self.collection_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(rejected(status).with_message("list request was rejected"));
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        let remote: Vec<RemoteRecord> = serde_json::from_slice(&body).map_err(|err| {
            Error::new(ErrorKind::Parse)
                .with_message("collection body is not a record array")
                .with_source(err)
        })?;
        Ok(remote.into_iter().map(record_from_remote).collect())
    }

    /// POST a validated draft. Success is decided by status alone: a 2xx
    /// response whose body does not decode as a record still succeeds with
    /// `Ok(None)`, since the caller re-fetches the roster afterwards.
    pub async fn create(&self, draft: &RecordDraft) -> ApiResult<Option<StudentRecord>> {
        tracing::debug!(url = %self.collection_url, name = draft.name(), "creating record");
        let payload = CreateRecordRequest {
            name: draft.name(),
            age: draft.age(),
            registration: draft.registration(),
        };
        let response = self
            .http
            .post(self.collection_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(rejected(status).with_message("create request was rejected"));
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        let created = serde_json::from_slice::<RemoteRecord>(&body)
            .ok()
            .map(record_from_remote);
        Ok(created)
    }

    /// DELETE the per-record resource; success is any 2xx status.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let url = record_url(&self.collection_url, id)?;
        tracing::debug!(%url, "deleting record");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|err| map_transport_error(err).with_record_id(id))?;
        let status = response.status();
        if !status.is_success() {
            return Err(rejected(status)
                .with_message("delete request was rejected")
                .with_record_id(id));
        }
        Ok(())
    }
}

fn record_from_remote(remote: RemoteRecord) -> StudentRecord {
    StudentRecord {
        id: remote.id,
        name: remote.name,
        age: remote.age,
        registration: remote.registration,
    }
}

fn map_transport_error(err: reqwest::Error) -> Error {
    Error::new(ErrorKind::Network)
        .with_message("request failed")
        .with_source(err)
}

fn rejected(status: StatusCode) -> Error {
    Error::new(ErrorKind::Rejected).with_status(status.as_u16())
}

fn normalize_collection_url(raw: String) -> ApiResult<Url> {
    let url = Url::parse(&raw).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid collection url")
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(
            Error::new(ErrorKind::Usage).with_message("collection url must use http or https")
        );
    }
    if url.host_str().is_none() {
        return Err(Error::new(ErrorKind::Usage).with_message("collection url must include a host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("collection url must not include a query or fragment"));
    }
    Ok(url)
}

fn record_url(collection_url: &Url, id: &str) -> ApiResult<Url> {
    if id.is_empty() {
        return Err(Error::new(ErrorKind::Usage).with_message("record id must not be empty"));
    }
    let mut url = collection_url.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            Error::new(ErrorKind::Usage).with_message("collection url cannot be a base")
        })?;
        path.pop_if_empty();
        path.push(id);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::{RemoteRecord, normalize_collection_url, record_url};
    use crate::core::error::ErrorKind;

    #[test]
    fn normalize_accepts_collection_path() {
        let url = normalize_collection_url("https://example.test/api/key/students".to_string())
            .expect("url");
        assert_eq!(url.as_str(), "https://example.test/api/key/students");
    }

    #[test]
    fn normalize_rejects_other_schemes() {
        let err = normalize_collection_url("ftp://example.test/students".to_string())
            .expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn normalize_rejects_query_and_fragment() {
        for raw in [
            "https://example.test/students?x=1",
            "https://example.test/students#top",
        ] {
            let err = normalize_collection_url(raw.to_string()).expect_err("err");
            assert_eq!(err.kind(), ErrorKind::Usage);
        }
    }

    #[test]
    fn record_url_appends_id_segment() {
        let base = normalize_collection_url("https://example.test/api/key/students".to_string())
            .expect("url");
        let url = record_url(&base, "abc123").expect("url");
        assert_eq!(url.as_str(), "https://example.test/api/key/students/abc123");
    }

    #[test]
    fn record_url_handles_trailing_slash() {
        let base = normalize_collection_url("https://example.test/students/".to_string())
            .expect("url");
        let url = record_url(&base, "abc123").expect("url");
        assert_eq!(url.as_str(), "https://example.test/students/abc123");
    }

    #[test]
    fn record_url_rejects_empty_id() {
        let base =
            normalize_collection_url("https://example.test/students".to_string()).expect("url");
        let err = record_url(&base, "").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn remote_record_decodes_wire_field_names() {
        let remote: RemoteRecord = serde_json::from_str(
            r#"{"id":"1","name":"Ana","age":20,"academicRegistration":"A1"}"#,
        )
        .expect("record");
        assert_eq!(remote.registration, "A1");
    }
}
