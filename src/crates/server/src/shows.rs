use crate::error::ApiError;
use crate::AppState;
use actix_web::{web, HttpResponse};
use application::command::show::{CreateShowCmd, ShowService};
use application::error::AppError;
use application::query::get_show_list::GetShowList;
use infra::repository::postgres::command::artist::ArtistRepositoryImpl;
use infra::repository::postgres::command::show::ShowRepositoryImpl;
use infra::repository::postgres::command::venue::VenueRepositoryImpl;
use infra::repository::postgres::query::show::ShowDaoImpl;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ShowForm {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: String,
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shows")
            .route("", web::get().to(list_shows))
            .route("/create", web::post().to(create_show)),
    );
}

async fn list_shows(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let show_dao = Arc::new(ShowDaoImpl::new(state.db.clone()));
    let query = GetShowList::new(show_dao);

    let shows = query.handle().await?;
    Ok(HttpResponse::Ok().json(shows))
}

async fn create_show(
    state: web::Data<AppState>,
    form: web::Json<ShowForm>,
) -> Result<HttpResponse, ApiError> {
    let service = ShowService::new(
        Arc::new(ShowRepositoryImpl::new(state.db.clone())),
        Arc::new(VenueRepositoryImpl::new(state.db.clone())),
        Arc::new(ArtistRepositoryImpl::new(state.db.clone())),
    );

    let form = form.into_inner();
    let cmd = CreateShowCmd {
        venue_id: form.venue_id,
        artist_id: form.artist_id,
        start_time: form.start_time,
    };

    match service.create_show(cmd).await {
        Ok(show) => Ok(HttpResponse::Created().json(json!({
            "id": show.id,
            "message": "Show was successfully listed!",
        }))),
        Err(AppError::InvalidInput(msg)) => Err(ApiError::bad_request(msg)),
        Err(err @ AppError::AggregateNotFound(_, _)) => Err(err.into()),
        Err(err) => {
            log::error!("create show failed: {}", err);
            Err(ApiError::internal(
                "An error occurred. Show could not be listed.",
            ))
        }
    }
}
