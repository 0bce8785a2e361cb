use crate::error::AppError;
use model::venue::{Venue, VenueDraft, VenueRepository};
use model::ModelError;
use std::sync::Arc;

/// 创建场馆命令
#[derive(Debug)]
pub struct CreateVenueCmd {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// 编辑场馆命令
#[derive(Debug)]
pub struct UpdateVenueCmd {
    pub venue_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// 场馆应用服务
pub struct VenueService {
    venue_repository: Arc<dyn VenueRepository>,
}

impl VenueService {
    pub fn new(venue_repository: Arc<dyn VenueRepository>) -> Self {
        Self { venue_repository }
    }

    /// 创建场馆；genres 为空时在任何写入之前拒绝
    pub async fn create_venue(&self, cmd: CreateVenueCmd) -> Result<Venue, AppError> {
        let draft = VenueDraft {
            name: cmd.name,
            city: cmd.city,
            state: cmd.state,
            address: cmd.address,
            phone: cmd.phone,
            image_link: cmd.image_link,
            genres: cmd.genres,
            facebook_link: cmd.facebook_link,
            website: cmd.website,
            seeking_talent: cmd.seeking_talent,
            seeking_description: cmd.seeking_description,
        };
        validate_genres(&draft.genres)?;
        Ok(self.venue_repository.insert(draft).await?)
    }

    /// 编辑场馆
    pub async fn update_venue(&self, cmd: UpdateVenueCmd) -> Result<Venue, AppError> {
        let draft = VenueDraft {
            name: cmd.name,
            city: cmd.city,
            state: cmd.state,
            address: cmd.address,
            phone: cmd.phone,
            image_link: cmd.image_link,
            genres: cmd.genres,
            facebook_link: cmd.facebook_link,
            website: cmd.website,
            seeking_talent: cmd.seeking_talent,
            seeking_description: cmd.seeking_description,
        };
        validate_genres(&draft.genres)?;
        match self.venue_repository.update(cmd.venue_id, draft).await {
            Ok(venue) => Ok(venue),
            Err(ModelError::NotFound(msg)) => {
                Err(AppError::AggregateNotFound("Venue".to_string(), msg))
            }
            Err(err) => Err(AppError::ModelError(err)),
        }
    }

    /// 删除场馆，返回被删除的记录；级联删除由数据库外键约束完成
    pub async fn delete_venue(&self, venue_id: i64) -> Result<Venue, AppError> {
        self.venue_repository
            .delete(venue_id)
            .await?
            .ok_or_else(|| {
                AppError::AggregateNotFound("Venue".to_string(), format!("id {}", venue_id))
            })
    }
}

pub(crate) fn validate_genres(genres: &[String]) -> Result<(), AppError> {
    if genres.is_empty() {
        return Err(AppError::InvalidInput(
            "genres must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::runtime::Runtime;

    /// 内存实现，模拟自增主键与按 id 查找
    struct InMemoryVenueRepository {
        venues: Mutex<Vec<Venue>>,
    }

    impl InMemoryVenueRepository {
        fn new() -> Self {
            Self {
                venues: Mutex::new(Vec::new()),
            }
        }

        fn materialize(id: i64, draft: VenueDraft) -> Venue {
            Venue {
                id,
                name: draft.name,
                city: draft.city,
                state: draft.state,
                address: draft.address,
                phone: draft.phone,
                image_link: draft.image_link,
                genres: draft.genres,
                facebook_link: draft.facebook_link,
                website: draft.website,
                seeking_talent: draft.seeking_talent,
                seeking_description: draft.seeking_description,
            }
        }
    }

    #[async_trait]
    impl VenueRepository for InMemoryVenueRepository {
        async fn insert(&self, draft: VenueDraft) -> Result<Venue, ModelError> {
            let mut venues = self.venues.lock().unwrap();
            let venue = Self::materialize(venues.len() as i64 + 1, draft);
            venues.push(venue.clone());
            Ok(venue)
        }

        async fn update(&self, id: i64, draft: VenueDraft) -> Result<Venue, ModelError> {
            let mut venues = self.venues.lock().unwrap();
            match venues.iter_mut().find(|v| v.id == id) {
                Some(slot) => {
                    *slot = Self::materialize(id, draft);
                    Ok(slot.clone())
                }
                None => Err(ModelError::NotFound(format!("id {}", id))),
            }
        }

        async fn delete(&self, id: i64) -> Result<Option<Venue>, ModelError> {
            let mut venues = self.venues.lock().unwrap();
            match venues.iter().position(|v| v.id == id) {
                Some(index) => Ok(Some(venues.remove(index))),
                None => Ok(None),
            }
        }

        async fn exists(&self, id: i64) -> Result<bool, ModelError> {
            Ok(self.venues.lock().unwrap().iter().any(|v| v.id == id))
        }
    }

    fn create_cmd(name: &str, genres: Vec<&str>) -> CreateVenueCmd {
        CreateVenueCmd {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: "".to_string(),
            genres: genres.into_iter().map(|g| g.to_string()).collect(),
            facebook_link: "".to_string(),
            website: "".to_string(),
            seeking_talent: false,
            seeking_description: "".to_string(),
        }
    }

    #[test]
    fn test_create_venue_rejects_empty_genres() {
        let rt = Runtime::new().unwrap();
        let repo = Arc::new(InMemoryVenueRepository::new());
        let service = VenueService::new(repo.clone());

        let err = rt
            .block_on(service.create_venue(create_cmd("The Musical Hop", vec![])))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        // 没有任何写入发生
        assert!(!rt.block_on(repo.exists(1)).unwrap());
    }

    #[test]
    fn test_delete_venue_returns_record_then_not_found() {
        let rt = Runtime::new().unwrap();
        let repo = Arc::new(InMemoryVenueRepository::new());
        let service = VenueService::new(repo);

        let venue = rt
            .block_on(service.create_venue(create_cmd("The Musical Hop", vec!["Jazz"])))
            .unwrap();

        let deleted = rt.block_on(service.delete_venue(venue.id)).unwrap();
        assert_eq!(deleted.id, venue.id);
        assert_eq!(deleted.name, "The Musical Hop");

        let err = rt.block_on(service.delete_venue(venue.id)).unwrap_err();
        assert!(matches!(err, AppError::AggregateNotFound(_, _)));
    }

    #[test]
    fn test_update_missing_venue_is_not_found() {
        let rt = Runtime::new().unwrap();
        let service = VenueService::new(Arc::new(InMemoryVenueRepository::new()));

        let err = rt
            .block_on(service.update_venue(UpdateVenueCmd {
                venue_id: 77,
                name: "x".to_string(),
                city: "".to_string(),
                state: "".to_string(),
                address: "".to_string(),
                phone: "".to_string(),
                image_link: "".to_string(),
                genres: vec!["Jazz".to_string()],
                facebook_link: "".to_string(),
                website: "".to_string(),
                seeking_talent: false,
                seeking_description: "".to_string(),
            }))
            .unwrap_err();
        assert!(matches!(err, AppError::AggregateNotFound(_, _)));
    }
}
