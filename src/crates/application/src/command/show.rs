use crate::error::AppError;
use crate::query::shared::parse_datetime;
use model::artist::ArtistRepository;
use model::show::{Show, ShowDraft, ShowRepository};
use model::venue::VenueRepository;
use std::sync::Arc;

/// 创建演出命令；start_time 为原始字符串，在此解析
#[derive(Debug)]
pub struct CreateShowCmd {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: String,
}

/// 演出应用服务
pub struct ShowService {
    show_repository: Arc<dyn ShowRepository>,
    venue_repository: Arc<dyn VenueRepository>,
    artist_repository: Arc<dyn ArtistRepository>,
}

impl ShowService {
    pub fn new(
        show_repository: Arc<dyn ShowRepository>,
        venue_repository: Arc<dyn VenueRepository>,
        artist_repository: Arc<dyn ArtistRepository>,
    ) -> Self {
        Self {
            show_repository,
            venue_repository,
            artist_repository,
        }
    }

    /// 创建演出。场馆或艺术家不存在时拒绝，不留下任何残行；
    /// 数据库外键约束作为并发删除下的兜底。
    pub async fn create_show(&self, cmd: CreateShowCmd) -> Result<Show, AppError> {
        let start_time =
            parse_datetime(&cmd.start_time).map_err(|e| AppError::InvalidInput(e.to_string()))?;

        if !self.venue_repository.exists(cmd.venue_id).await? {
            return Err(AppError::AggregateNotFound(
                "Venue".to_string(),
                format!("id {}", cmd.venue_id),
            ));
        }
        if !self.artist_repository.exists(cmd.artist_id).await? {
            return Err(AppError::AggregateNotFound(
                "Artist".to_string(),
                format!("id {}", cmd.artist_id),
            ));
        }

        Ok(self
            .show_repository
            .insert(ShowDraft {
                venue_id: cmd.venue_id,
                artist_id: cmd.artist_id,
                start_time,
            })
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use model::artist::{Artist, ArtistDraft};
    use model::venue::{Venue, VenueDraft};
    use model::ModelError;
    use std::sync::Mutex;
    use tokio::runtime::Runtime;

    struct StubVenueRepository {
        known_ids: Vec<i64>,
    }

    #[async_trait]
    impl VenueRepository for StubVenueRepository {
        async fn insert(&self, _draft: VenueDraft) -> Result<Venue, ModelError> {
            unimplemented!()
        }

        async fn update(&self, _id: i64, _draft: VenueDraft) -> Result<Venue, ModelError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i64) -> Result<Option<Venue>, ModelError> {
            unimplemented!()
        }

        async fn exists(&self, id: i64) -> Result<bool, ModelError> {
            Ok(self.known_ids.contains(&id))
        }
    }

    struct StubArtistRepository {
        known_ids: Vec<i64>,
    }

    #[async_trait]
    impl ArtistRepository for StubArtistRepository {
        async fn insert(&self, _draft: ArtistDraft) -> Result<Artist, ModelError> {
            unimplemented!()
        }

        async fn update(&self, _id: i64, _draft: ArtistDraft) -> Result<Artist, ModelError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i64) -> Result<Option<Artist>, ModelError> {
            unimplemented!()
        }

        async fn exists(&self, id: i64) -> Result<bool, ModelError> {
            Ok(self.known_ids.contains(&id))
        }
    }

    struct RecordingShowRepository {
        inserted: Mutex<Vec<ShowDraft>>,
    }

    #[async_trait]
    impl ShowRepository for RecordingShowRepository {
        async fn insert(&self, draft: ShowDraft) -> Result<Show, ModelError> {
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push(draft.clone());
            Ok(Show {
                id: inserted.len() as i64,
                venue_id: draft.venue_id,
                artist_id: draft.artist_id,
                start_time: draft.start_time,
            })
        }
    }

    fn service(
        venue_ids: Vec<i64>,
        artist_ids: Vec<i64>,
    ) -> (ShowService, Arc<RecordingShowRepository>) {
        let show_repo = Arc::new(RecordingShowRepository {
            inserted: Mutex::new(Vec::new()),
        });
        let service = ShowService::new(
            show_repo.clone(),
            Arc::new(StubVenueRepository {
                known_ids: venue_ids,
            }),
            Arc::new(StubArtistRepository {
                known_ids: artist_ids,
            }),
        );
        (service, show_repo)
    }

    #[test]
    fn test_create_show_with_valid_references() {
        let rt = Runtime::new().unwrap();
        let (service, show_repo) = service(vec![1], vec![4]);

        let show = rt
            .block_on(service.create_show(CreateShowCmd {
                venue_id: 1,
                artist_id: 4,
                start_time: "2019-05-21T21:30:00.000Z".to_string(),
            }))
            .unwrap();

        assert_eq!(show.venue_id, 1);
        assert_eq!(show.artist_id, 4);
        assert_eq!(show_repo.inserted.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_create_show_with_missing_venue_writes_nothing() {
        let rt = Runtime::new().unwrap();
        let (service, show_repo) = service(vec![], vec![4]);

        let err = rt
            .block_on(service.create_show(CreateShowCmd {
                venue_id: 99,
                artist_id: 4,
                start_time: "2019-05-21T21:30:00.000Z".to_string(),
            }))
            .unwrap_err();

        assert!(matches!(err, AppError::AggregateNotFound(kind, _) if kind == "Venue"));
        assert!(show_repo.inserted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_create_show_with_missing_artist_writes_nothing() {
        let rt = Runtime::new().unwrap();
        let (service, show_repo) = service(vec![1], vec![]);

        let err = rt
            .block_on(service.create_show(CreateShowCmd {
                venue_id: 1,
                artist_id: 99,
                start_time: "2019-05-21T21:30:00.000Z".to_string(),
            }))
            .unwrap_err();

        assert!(matches!(err, AppError::AggregateNotFound(kind, _) if kind == "Artist"));
        assert!(show_repo.inserted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_create_show_with_bad_start_time_is_rejected() {
        let rt = Runtime::new().unwrap();
        let (service, show_repo) = service(vec![1], vec![4]);

        let err = rt
            .block_on(service.create_show(CreateShowCmd {
                venue_id: 1,
                artist_id: 4,
                start_time: "next friday".to_string(),
            }))
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(show_repo.inserted.lock().unwrap().is_empty());
    }
}
