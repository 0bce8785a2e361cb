use model::show::{Show, ShowDraft};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "show")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Venue,
    Artist,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Venue => Entity::belongs_to(super::venue::Entity)
                .from(Column::VenueId)
                .to(super::venue::Column::Id)
                .into(),
            Self::Artist => Entity::belongs_to(super::artist::Entity)
                .from(Column::ArtistId)
                .to(super::artist::Column::Id)
                .into(),
        }
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl Related<super::artist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ShowDraft> for ActiveModel {
    fn from(draft: &ShowDraft) -> Self {
        Self {
            id: NotSet,
            venue_id: Set(draft.venue_id),
            artist_id: Set(draft.artist_id),
            start_time: Set(draft.start_time),
        }
    }
}

impl From<Model> for Show {
    fn from(model: Model) -> Self {
        Show {
            id: model.id,
            venue_id: model.venue_id,
            artist_id: model.artist_id,
            start_time: model.start_time,
        }
    }
}
