use crate::command::venue::validate_genres;
use crate::error::AppError;
use model::artist::{Artist, ArtistDraft, ArtistRepository};
use model::ModelError;
use std::sync::Arc;

/// 创建艺术家命令
#[derive(Debug)]
pub struct CreateArtistCmd {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// 编辑艺术家命令
#[derive(Debug)]
pub struct UpdateArtistCmd {
    pub artist_id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub genres: Vec<String>,
    pub facebook_link: String,
    pub website: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// 艺术家应用服务
pub struct ArtistService {
    artist_repository: Arc<dyn ArtistRepository>,
}

impl ArtistService {
    pub fn new(artist_repository: Arc<dyn ArtistRepository>) -> Self {
        Self { artist_repository }
    }

    /// 创建艺术家；genres 为空时在任何写入之前拒绝
    pub async fn create_artist(&self, cmd: CreateArtistCmd) -> Result<Artist, AppError> {
        let draft = ArtistDraft {
            name: cmd.name,
            city: cmd.city,
            state: cmd.state,
            phone: cmd.phone,
            image_link: cmd.image_link,
            genres: cmd.genres,
            facebook_link: cmd.facebook_link,
            website: cmd.website,
            seeking_venue: cmd.seeking_venue,
            seeking_description: cmd.seeking_description,
        };
        validate_genres(&draft.genres)?;
        Ok(self.artist_repository.insert(draft).await?)
    }

    /// 编辑艺术家
    pub async fn update_artist(&self, cmd: UpdateArtistCmd) -> Result<Artist, AppError> {
        let draft = ArtistDraft {
            name: cmd.name,
            city: cmd.city,
            state: cmd.state,
            phone: cmd.phone,
            image_link: cmd.image_link,
            genres: cmd.genres,
            facebook_link: cmd.facebook_link,
            website: cmd.website,
            seeking_venue: cmd.seeking_venue,
            seeking_description: cmd.seeking_description,
        };
        validate_genres(&draft.genres)?;
        match self.artist_repository.update(cmd.artist_id, draft).await {
            Ok(artist) => Ok(artist),
            Err(ModelError::NotFound(msg)) => {
                Err(AppError::AggregateNotFound("Artist".to_string(), msg))
            }
            Err(err) => Err(AppError::ModelError(err)),
        }
    }

    /// 删除艺术家，返回被删除的记录
    pub async fn delete_artist(&self, artist_id: i64) -> Result<Artist, AppError> {
        self.artist_repository
            .delete(artist_id)
            .await?
            .ok_or_else(|| {
                AppError::AggregateNotFound("Artist".to_string(), format!("id {}", artist_id))
            })
    }
}
