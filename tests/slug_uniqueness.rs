use std::sync::Arc;

mod support;

use slug_field::domain::content::{ContentId, ContentReadRepository, ContentTypeId};
use slug_field::domain::slug::{SlugCheck, SlugUniquenessService, UniquenessScope};
use slug_field::domain::validation::{SLUG_STILL_EXISTS, ViolationKind};
use support::{InMemoryContentRepo, RecordBuilder};

fn seeded_repo() -> Arc<InMemoryContentRepo> {
    let repo = Arc::new(InMemoryContentRepo::new());
    repo.seed(
        RecordBuilder::new(1, 1)
            .field("title", "Post 1")
            .field("slug", "post-1")
            .build(),
    );
    repo.seed(
        RecordBuilder::new(2, 1)
            .field("title", "Post 2")
            .field("slug", "post-2")
            .build(),
    );
    repo
}

fn service(repo: &Arc<InMemoryContentRepo>, scope: UniquenessScope) -> SlugUniquenessService {
    let read_repo: Arc<dyn ContentReadRepository> = repo.clone();
    SlugUniquenessService::new(read_repo, scope)
}

fn check<'a>(candidate: &'a str, exclude: Option<i64>, locale: Option<&'a str>) -> SlugCheck<'a> {
    SlugCheck {
        candidate,
        content_type_id: ContentTypeId::new(1).unwrap(),
        exclude_id: exclude.map(|id| ContentId::new(id).unwrap()),
        locale,
        source: "title",
    }
}

/// 他レコードのスラグと衝突する場合は slug_still_exists を返すことを確認する
#[tokio::test]
async fn taken_slug_reports_conflict_on_source_field() {
    let repo = seeded_repo();
    let service = service(&repo, UniquenessScope::ContentType);

    let violation = service
        .check_slug_exists(check("post-1", Some(2), None))
        .await
        .unwrap()
        .expect("conflict expected");

    assert_eq!(violation.kind, ViolationKind::ConflictError);
    assert_eq!(violation.code, SLUG_STILL_EXISTS);
    assert_eq!(violation.path, "title");
    assert_eq!(violation.parameters.get("%source%").map(String::as_str), Some("title"));
    assert_eq!(violation.parameters.get("%value%").map(String::as_str), Some("post-1"));

    let unexcluded = service
        .check_slug_exists(check("post-1", None, None))
        .await
        .unwrap();
    assert!(unexcluded.is_some());
}

/// 更新時に自分自身を除外すれば衝突しないことを確認する
#[tokio::test]
async fn self_exclusion_does_not_conflict() {
    let repo = seeded_repo();
    let service = service(&repo, UniquenessScope::ContentType);

    let violation = service
        .check_slug_exists(check("post-1", Some(1), None))
        .await
        .unwrap();
    assert!(violation.is_none());
}

/// 未使用のスラグや別コンテンツタイプのスラグは衝突しないことを確認する
#[tokio::test]
async fn free_slug_and_other_content_types_pass() {
    let repo = seeded_repo();
    repo.seed(RecordBuilder::new(3, 2).field("slug", "elsewhere").build());
    let service = service(&repo, UniquenessScope::ContentType);

    assert!(service
        .check_slug_exists(check("post-3", None, None))
        .await
        .unwrap()
        .is_none());
    assert!(service
        .check_slug_exists(check("elsewhere", None, None))
        .await
        .unwrap()
        .is_none());
}

/// ロケール単位のスコープでは同じスラグでも別ロケールなら許可されることを確認する
#[tokio::test]
async fn locale_scope_separates_translations() {
    let repo = Arc::new(InMemoryContentRepo::new());
    repo.seed(
        RecordBuilder::new(1, 1)
            .locale("de")
            .field("slug", "hallo")
            .build(),
    );

    let per_type = service(&repo, UniquenessScope::ContentType);
    assert!(per_type
        .check_slug_exists(check("hallo", None, Some("en")))
        .await
        .unwrap()
        .is_some());

    let per_locale = service(&repo, UniquenessScope::ContentTypeAndLocale);
    assert!(per_locale
        .check_slug_exists(check("hallo", None, Some("en")))
        .await
        .unwrap()
        .is_none());
    assert!(per_locale
        .check_slug_exists(check("hallo", None, Some("de")))
        .await
        .unwrap()
        .is_some());
    assert!(per_locale
        .check_slug_exists(check("hallo", None, None))
        .await
        .unwrap()
        .is_none());
}
