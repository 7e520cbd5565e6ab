//! Tests for repository value objects and the authorization witness

use async_trait::async_trait;
use xdeps_domain::ports::providers::RepositoryAccessProvider;
use xdeps_domain::{AccessDenial, AuthorizedRepository, Error, RepositoryId, RepositoryRef, Result};

struct SingleRepo(RepositoryRef);

#[async_trait]
impl RepositoryAccessProvider for SingleRepo {
    async fn authorize(&self, id: RepositoryId) -> Result<RepositoryRef> {
        if id == self.0.id {
            Ok(self.0.clone())
        } else {
            Err(Error::unauthorized(id.to_string(), AccessDenial::NotFound))
        }
    }

    async fn get_by_uri(&self, uri: &str) -> Result<RepositoryRef> {
        if uri == self.0.uri {
            Ok(self.0.clone())
        } else {
            Err(Error::unauthorized(uri, AccessDenial::NotFound))
        }
    }
}

/// Returns a record for a different repository than requested
struct Confused;

#[async_trait]
impl RepositoryAccessProvider for Confused {
    async fn authorize(&self, _id: RepositoryId) -> Result<RepositoryRef> {
        Ok(RepositoryRef::new(1, "github.com/other/repo"))
    }

    async fn get_by_uri(&self, _uri: &str) -> Result<RepositoryRef> {
        Ok(RepositoryRef::new(1, "github.com/other/repo"))
    }
}

#[tokio::test]
async fn test_root_and_document_format() {
    let access = SingleRepo(RepositoryRef::new(7, "github.com/gorilla/mux"));
    let repo = AuthorizedRepository::authorize(&access, RepositoryId(7))
        .await
        .expect("authorized");

    let root = repo.root("abc");
    assert_eq!(root.as_str(), "git://github.com/gorilla/mux?abc");

    let document = root.document("main.go");
    assert_eq!(document.as_str(), "git://github.com/gorilla/mux?abc#main.go");
    assert_eq!(document.root(), root.as_str());
}

#[tokio::test]
async fn test_authorize_surfaces_denial() {
    let access = SingleRepo(RepositoryRef::new(7, "github.com/gorilla/mux"));
    let err = AuthorizedRepository::authorize(&access, RepositoryId(99))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Unauthorized {
            reason: AccessDenial::NotFound,
            ..
        }
    ));
}

#[tokio::test]
async fn test_authorize_by_uri_keeps_privacy_flag() {
    let access = SingleRepo(RepositoryRef::new(3, "github.com/acme/secret").with_private(true));
    let repo = AuthorizedRepository::authorize_uri(&access, "github.com/acme/secret")
        .await
        .expect("authorized");
    assert!(repo.is_private());
    assert_eq!(repo.id(), RepositoryId(3));
}

#[tokio::test]
async fn test_mismatched_record_is_rejected() {
    let err = AuthorizedRepository::authorize(&Confused, RepositoryId(2))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));

    let err = AuthorizedRepository::authorize_uri(&Confused, "github.com/mine/repo")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Internal { .. }));
}

#[test]
fn test_repository_id_serializes_transparently() {
    let json = serde_json::to_string(&RepositoryRef::new(42, "github.com/a/b")).unwrap();
    assert_eq!(json, r#"{"id":42,"uri":"github.com/a/b","private":false}"#);
}
