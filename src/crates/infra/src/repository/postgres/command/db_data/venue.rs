use model::venue::{Venue, VenueDraft};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "venue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
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

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Show,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Show => Entity::has_many(super::show::Entity)
                .from(Column::Id)
                .to(super::show::Column::VenueId)
                .into(),
        }
    }
}

impl Related<super::show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Show.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&VenueDraft> for ActiveModel {
    fn from(draft: &VenueDraft) -> Self {
        Self {
            id: NotSet,
            name: Set(draft.name.clone()),
            city: Set(draft.city.clone()),
            state: Set(draft.state.clone()),
            address: Set(draft.address.clone()),
            phone: Set(draft.phone.clone()),
            image_link: Set(draft.image_link.clone()),
            genres: Set(draft.genres.clone()),
            facebook_link: Set(draft.facebook_link.clone()),
            website: Set(draft.website.clone()),
            seeking_talent: Set(draft.seeking_talent),
            seeking_description: Set(draft.seeking_description.clone()),
        }
    }
}

impl From<Model> for Venue {
    fn from(model: Model) -> Self {
        Venue {
            id: model.id,
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            genres: model.genres,
            facebook_link: model.facebook_link,
            website: model.website,
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description,
        }
    }
}
