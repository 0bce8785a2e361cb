use crate::error::ApiError;
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::artist::{ArtistService, CreateArtistCmd, UpdateArtistCmd};
use application::error::AppError;
use application::query::dao::ArtistDao;
use application::query::dto::artist::ArtistRefDto;
use application::query::get_artist::GetArtist;
use application::query::get_artist_list::GetArtistList;
use application::query::search_artists::SearchArtists;
use chrono::Utc;
use infra::repository::postgres::command::artist::ArtistRepositoryImpl;
use infra::repository::postgres::query::artist::ArtistDaoImpl;
use infra::repository::postgres::query::show::ShowDaoImpl;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// 创建与编辑共用的表单
#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/artists")
            .route("", web::get().to(list_artists))
            .route("/search", web::post().to(search_artists))
            .route("/create", web::post().to(create_artist))
            .route("/{artist_id}/edit", web::get().to(edit_artist_form))
            .route("/{artist_id}/edit", web::post().to(edit_artist))
            .route("/{artist_id}", web::get().to(get_artist))
            .route("/{artist_id}", web::delete().to(delete_artist)),
    );
}

/// 艺术家平铺列表，不分组
async fn list_artists(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let artist_dao = Arc::new(ArtistDaoImpl::new(state.db.clone()));
    let query = GetArtistList::new(artist_dao);

    let artists = query.handle().await?;
    Ok(HttpResponse::Ok().json(artists))
}

async fn search_artists(
    state: web::Data<AppState>,
    form: web::Json<SearchForm>,
) -> Result<HttpResponse, ApiError> {
    let artist_dao = Arc::new(ArtistDaoImpl::new(state.db.clone()));
    let query = SearchArtists::new(artist_dao);

    let results = query.handle(&form.search_term).await?;
    Ok(HttpResponse::Ok().json(results))
}

async fn get_artist(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let artist_dao = Arc::new(ArtistDaoImpl::new(state.db.clone()));
    let show_dao = Arc::new(ShowDaoImpl::new(state.db.clone()));
    let query = GetArtist::new(artist_dao, show_dao);

    let detail = query.handle(path.into_inner(), Utc::now().naive_utc()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

async fn create_artist(
    state: web::Data<AppState>,
    form: web::Json<ArtistForm>,
) -> Result<HttpResponse, ApiError> {
    let service = ArtistService::new(Arc::new(ArtistRepositoryImpl::new(state.db.clone())));

    let form = form.into_inner();
    let name = form.name.clone();
    let cmd = CreateArtistCmd {
        name: form.name,
        city: form.city,
        state: form.state,
        phone: form.phone,
        image_link: form.image_link,
        genres: form.genres,
        facebook_link: form.facebook_link,
        website: form.website,
        seeking_venue: form.seeking_venue,
        seeking_description: form.seeking_description,
    };

    match service.create_artist(cmd).await {
        Ok(artist) => Ok(HttpResponse::Created().json(json!({
            "id": artist.id,
            "message": format!("Artist {} was successfully listed!", artist.name),
        }))),
        Err(AppError::InvalidInput(msg)) => Err(ApiError::bad_request(msg)),
        Err(err) => {
            log::error!("create artist failed: {}", err);
            Err(ApiError::internal(format!(
                "An error occurred. Artist {} could not be listed.",
                name
            )))
        }
    }
}

/// 编辑前回读当前数据，供表单预填；不含演出
async fn edit_artist_form(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let artist_dao = ArtistDaoImpl::new(state.db.clone());

    let artist_id = path.into_inner();
    let artist = artist_dao
        .get_by_id(artist_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Artist not found: {}", artist_id)))?;
    Ok(HttpResponse::Ok().json(artist))
}

async fn edit_artist(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Json<ArtistForm>,
) -> Result<HttpResponse, ApiError> {
    let service = ArtistService::new(Arc::new(ArtistRepositoryImpl::new(state.db.clone())));

    let form = form.into_inner();
    let name = form.name.clone();
    let cmd = UpdateArtistCmd {
        artist_id: path.into_inner(),
        name: form.name,
        city: form.city,
        state: form.state,
        phone: form.phone,
        image_link: form.image_link,
        genres: form.genres,
        facebook_link: form.facebook_link,
        website: form.website,
        seeking_venue: form.seeking_venue,
        seeking_description: form.seeking_description,
    };

    match service.update_artist(cmd).await {
        Ok(artist) => Ok(HttpResponse::Ok().json(json!({
            "id": artist.id,
            "message": format!("Artist {} was successfully updated!", artist.name),
        }))),
        Err(AppError::InvalidInput(msg)) => Err(ApiError::bad_request(msg)),
        Err(err @ AppError::AggregateNotFound(_, _)) => Err(err.into()),
        Err(err) => {
            log::error!("update artist failed: {}", err);
            Err(ApiError::internal(format!(
                "An error occurred. Artist {} could not be changed.",
                name
            )))
        }
    }
}

async fn delete_artist(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let service = ArtistService::new(Arc::new(ArtistRepositoryImpl::new(state.db.clone())));

    let artist = service.delete_artist(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ArtistRefDto::from(artist)))
}
