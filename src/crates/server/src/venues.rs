use crate::error::ApiError;
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::venue::{CreateVenueCmd, UpdateVenueCmd, VenueService};
use application::error::AppError;
use application::query::dao::VenueDao;
use application::query::dto::venue::VenueRefDto;
use application::query::get_venue::GetVenue;
use application::query::get_venue_list::GetVenueList;
use application::query::search_venues::SearchVenues;
use chrono::Utc;
use infra::repository::postgres::command::venue::VenueRepositoryImpl;
use infra::repository::postgres::query::show::ShowDaoImpl;
use infra::repository::postgres::query::venue::VenueDaoImpl;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// 创建与编辑共用的表单
#[derive(Debug, Deserialize)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub address: String,
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
    pub seeking_talent: bool,
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
        web::scope("/venues")
            .route("", web::get().to(list_venues))
            .route("/search", web::post().to(search_venues))
            .route("/create", web::post().to(create_venue))
            .route("/{venue_id}/edit", web::get().to(edit_venue_form))
            .route("/{venue_id}/edit", web::post().to(edit_venue))
            .route("/{venue_id}", web::get().to(get_venue))
            .route("/{venue_id}", web::delete().to(delete_venue)),
    );
}

/// 场馆列表，按 (city, state) 分组
async fn list_venues(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let venue_dao = Arc::new(VenueDaoImpl::new(state.db.clone()));
    let query = GetVenueList::new(venue_dao);

    let areas = query.handle(Utc::now().naive_utc()).await?;
    Ok(HttpResponse::Ok().json(areas))
}

async fn search_venues(
    state: web::Data<AppState>,
    form: web::Json<SearchForm>,
) -> Result<HttpResponse, ApiError> {
    let venue_dao = Arc::new(VenueDaoImpl::new(state.db.clone()));
    let query = SearchVenues::new(venue_dao);

    let results = query.handle(&form.search_term).await?;
    Ok(HttpResponse::Ok().json(results))
}

async fn get_venue(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let venue_dao = Arc::new(VenueDaoImpl::new(state.db.clone()));
    let show_dao = Arc::new(ShowDaoImpl::new(state.db.clone()));
    let query = GetVenue::new(venue_dao, show_dao);

    let detail = query.handle(path.into_inner(), Utc::now().naive_utc()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

async fn create_venue(
    state: web::Data<AppState>,
    form: web::Json<VenueForm>,
) -> Result<HttpResponse, ApiError> {
    let service = VenueService::new(Arc::new(VenueRepositoryImpl::new(state.db.clone())));

    let form = form.into_inner();
    let name = form.name.clone();
    let cmd = CreateVenueCmd {
        name: form.name,
        city: form.city,
        state: form.state,
        address: form.address,
        phone: form.phone,
        image_link: form.image_link,
        genres: form.genres,
        facebook_link: form.facebook_link,
        website: form.website,
        seeking_talent: form.seeking_talent,
        seeking_description: form.seeking_description,
    };

    match service.create_venue(cmd).await {
        Ok(venue) => Ok(HttpResponse::Created().json(json!({
            "id": venue.id,
            "message": format!("Venue {} was successfully listed!", venue.name),
        }))),
        Err(AppError::InvalidInput(msg)) => Err(ApiError::bad_request(msg)),
        Err(err) => {
            log::error!("create venue failed: {}", err);
            Err(ApiError::internal(format!(
                "An error occurred. Venue {} could not be listed.",
                name
            )))
        }
    }
}

/// 编辑前回读当前数据，供表单预填；不含演出
async fn edit_venue_form(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let venue_dao = VenueDaoImpl::new(state.db.clone());

    let venue_id = path.into_inner();
    let venue = venue_dao
        .get_by_id(venue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Venue not found: {}", venue_id)))?;
    Ok(HttpResponse::Ok().json(venue))
}

async fn edit_venue(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Json<VenueForm>,
) -> Result<HttpResponse, ApiError> {
    let service = VenueService::new(Arc::new(VenueRepositoryImpl::new(state.db.clone())));

    let form = form.into_inner();
    let name = form.name.clone();
    let cmd = UpdateVenueCmd {
        venue_id: path.into_inner(),
        name: form.name,
        city: form.city,
        state: form.state,
        address: form.address,
        phone: form.phone,
        image_link: form.image_link,
        genres: form.genres,
        facebook_link: form.facebook_link,
        website: form.website,
        seeking_talent: form.seeking_talent,
        seeking_description: form.seeking_description,
    };

    match service.update_venue(cmd).await {
        Ok(venue) => Ok(HttpResponse::Ok().json(json!({
            "id": venue.id,
            "message": format!("Venue {} was successfully updated!", venue.name),
        }))),
        Err(AppError::InvalidInput(msg)) => Err(ApiError::bad_request(msg)),
        Err(err @ AppError::AggregateNotFound(_, _)) => Err(err.into()),
        Err(err) => {
            log::error!("update venue failed: {}", err);
            Err(ApiError::internal(format!(
                "An error occurred. Venue {} could not be changed.",
                name
            )))
        }
    }
}

/// 删除场馆并返回被删除的记录；关联演出级联删除
async fn delete_venue(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let service = VenueService::new(Arc::new(VenueRepositoryImpl::new(state.db.clone())));

    let venue = service.delete_venue(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(VenueRefDto::from(venue)))
}
