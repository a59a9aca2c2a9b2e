// tests/support/mocks/content_repos.rs
use std::sync::Mutex;

use async_trait::async_trait;
use slug_field::domain::content::{
    ContentId, ContentReadRepository, ContentRecord, ContentUpdate, ContentWriteRepository,
    JsonFieldQuery, NewContent,
};
use slug_field::domain::errors::{DomainError, DomainResult};

/// 読み書き両方を実装するインメモリのコンテンツリポジトリ
#[derive(Default)]
pub struct InMemoryContentRepo {
    records: Mutex<Vec<ContentRecord>>,
}

impl InMemoryContentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存レコードを直接投入する（バリデーションを経由しない）
    pub fn seed(&self, record: ContentRecord) {
        self.records.lock().unwrap().push(record);
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<ContentRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| i64::from(record.id) == id)
            .cloned()
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryContentRepo {
    async fn insert(&self, content: NewContent) -> DomainResult<ContentRecord> {
        let mut records = self.records.lock().unwrap();
        let next_id = records
            .iter()
            .map(|record| i64::from(record.id))
            .max()
            .unwrap_or(0)
            + 1;
        let record = ContentRecord {
            id: ContentId::new(next_id)?,
            content_type_id: content.content_type_id,
            locale: content.locale,
            data: content.data,
            created_at: content.created_at,
            updated_at: content.updated_at,
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentRecord> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == update.id)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
        if record.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "content update conflict, please retry".into(),
            ));
        }
        record.set_data(update.data, update.updated_at);
        Ok(record.clone())
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryContentRepo {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id == id)
            .cloned())
    }

    async fn find_by_json_path(&self, query: &JsonFieldQuery) -> DomainResult<Vec<ContentRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|record| query.matches(record))
            .take(query.limit as usize)
            .cloned()
            .collect())
    }
}
