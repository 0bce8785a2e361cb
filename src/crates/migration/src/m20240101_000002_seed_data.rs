use chrono::NaiveDate;
use infra::repository::postgres::command::db_data::{artist, show, venue};
use log::info;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        self.seed_data(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Remove seed data
        let db = manager.get_connection();

        // Delete shows first (due to foreign key constraints)
        show::Entity::delete_many()
            .filter(show::Column::VenueId.is_in(vec![1_i64, 2, 3]))
            .exec(db)
            .await?;

        artist::Entity::delete_many()
            .filter(artist::Column::Id.is_in(vec![4_i64, 5, 6]))
            .exec(db)
            .await?;

        venue::Entity::delete_many()
            .filter(venue::Column::Id.is_in(vec![1_i64, 2, 3]))
            .exec(db)
            .await?;

        Ok(())
    }
}

impl Migration {
    async fn seed_data(&self, manager: &SchemaManager<'_>) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Skip when seed venues already exist
        let existing_venue = venue::Entity::find_by_id(1).one(db).await?;
        if existing_venue.is_some() {
            info!("Seed data already present, skipping insertion");
            return Ok(());
        }

        let venues = vec![
            venue::ActiveModel {
                id: Set(1),
                name: Set("The Musical Hop".to_owned()),
                city: Set("San Francisco".to_owned()),
                state: Set("CA".to_owned()),
                address: Set("1015 Folsom Street".to_owned()),
                phone: Set("123-123-1234".to_owned()),
                image_link: Set("https://images.unsplash.com/photo-1543900694-133f37abaaa5?ixlib=rb-1.2.1&auto=format&fit=crop&w=400&q=60".to_owned()),
                genres: Set(vec![
                    "Jazz".to_owned(),
                    "Reggae".to_owned(),
                    "Swing".to_owned(),
                    "Classical".to_owned(),
                    "Folk".to_owned(),
                ]),
                facebook_link: Set("https://www.facebook.com/TheMusicalHop".to_owned()),
                website: Set("https://www.themusicalhop.com".to_owned()),
                seeking_talent: Set(true),
                seeking_description: Set(
                    "We are on the lookout for a local artist to play every two weeks. Please call us."
                        .to_owned(),
                ),
            },
            venue::ActiveModel {
                id: Set(2),
                name: Set("The Dueling Pianos Bar".to_owned()),
                city: Set("New York".to_owned()),
                state: Set("NY".to_owned()),
                address: Set("335 Delancey Street".to_owned()),
                phone: Set("914-003-1132".to_owned()),
                image_link: Set("https://images.unsplash.com/photo-1497032205916-ac775f0649ae?ixlib=rb-1.2.1&auto=format&fit=crop&w=750&q=80".to_owned()),
                genres: Set(vec![
                    "Classical".to_owned(),
                    "R&B".to_owned(),
                    "Hip-Hop".to_owned(),
                ]),
                facebook_link: Set("https://www.facebook.com/theduelingpianos".to_owned()),
                website: Set("https://www.theduelingpianos.com".to_owned()),
                seeking_talent: Set(false),
                seeking_description: Set(String::new()),
            },
            venue::ActiveModel {
                id: Set(3),
                name: Set("Park Square Live Music & Coffee".to_owned()),
                city: Set("San Francisco".to_owned()),
                state: Set("CA".to_owned()),
                address: Set("34 Whiskey Moore Ave".to_owned()),
                phone: Set("415-000-1234".to_owned()),
                image_link: Set("https://images.unsplash.com/photo-1485686531765-ba63b07845a7?ixlib=rb-1.2.1&auto=format&fit=crop&w=747&q=80".to_owned()),
                genres: Set(vec![
                    "Rock n Roll".to_owned(),
                    "Jazz".to_owned(),
                    "Classical".to_owned(),
                    "Folk".to_owned(),
                ]),
                facebook_link: Set("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_owned()),
                website: Set("https://www.parksquarelivemusicandcoffee.com".to_owned()),
                seeking_talent: Set(false),
                seeking_description: Set(String::new()),
            },
        ];
        for model in venues {
            model.insert(db).await?;
        }

        let artists = vec![
            artist::ActiveModel {
                id: Set(4),
                name: Set("Guns N Petals".to_owned()),
                city: Set("San Francisco".to_owned()),
                state: Set("CA".to_owned()),
                phone: Set("326-123-5000".to_owned()),
                image_link: Set("https://images.unsplash.com/photo-1549213783-8284d0336c4f?ixlib=rb-1.2.1&auto=format&fit=crop&w=300&q=80".to_owned()),
                genres: Set(vec!["Rock n Roll".to_owned()]),
                facebook_link: Set("https://www.facebook.com/GunsNPetals".to_owned()),
                website: Set("https://www.gunsnpetalsband.com".to_owned()),
                seeking_venue: Set(true),
                seeking_description: Set(
                    "Looking for shows to perform at in the San Francisco Bay Area!".to_owned(),
                ),
            },
            artist::ActiveModel {
                id: Set(5),
                name: Set("Matt Quevedo".to_owned()),
                city: Set("New York".to_owned()),
                state: Set("NY".to_owned()),
                phone: Set("300-400-5000".to_owned()),
                image_link: Set("https://images.unsplash.com/photo-1495223153807-b916f75de8c5?ixlib=rb-1.2.1&auto=format&fit=crop&w=334&q=80".to_owned()),
                genres: Set(vec!["Jazz".to_owned()]),
                facebook_link: Set("https://www.facebook.com/mattquevedo923251523".to_owned()),
                website: Set(String::new()),
                seeking_venue: Set(false),
                seeking_description: Set(String::new()),
            },
            artist::ActiveModel {
                id: Set(6),
                name: Set("The Wild Sax Band".to_owned()),
                city: Set("San Francisco".to_owned()),
                state: Set("CA".to_owned()),
                phone: Set("432-325-5432".to_owned()),
                image_link: Set("https://images.unsplash.com/photo-1558369981-f9ca78462e61?ixlib=rb-1.2.1&auto=format&fit=crop&w=794&q=80".to_owned()),
                genres: Set(vec!["Jazz".to_owned(), "Classical".to_owned()]),
                facebook_link: Set(String::new()),
                website: Set(String::new()),
                seeking_venue: Set(false),
                seeking_description: Set(String::new()),
            },
        ];
        for model in artists {
            model.insert(db).await?;
        }

        let shows = vec![
            (1_i64, 1_i64, 4_i64, NaiveDate::from_ymd_opt(2019, 5, 21).unwrap().and_hms_opt(21, 30, 0).unwrap()),
            (2, 3, 5, NaiveDate::from_ymd_opt(2019, 6, 15).unwrap().and_hms_opt(23, 0, 0).unwrap()),
            (3, 3, 6, NaiveDate::from_ymd_opt(2035, 4, 1).unwrap().and_hms_opt(20, 0, 0).unwrap()),
            (4, 3, 6, NaiveDate::from_ymd_opt(2035, 4, 8).unwrap().and_hms_opt(20, 0, 0).unwrap()),
            (5, 3, 6, NaiveDate::from_ymd_opt(2035, 4, 15).unwrap().and_hms_opt(20, 0, 0).unwrap()),
        ];
        for (id, venue_id, artist_id, start_time) in shows {
            show::ActiveModel {
                id: Set(id),
                venue_id: Set(venue_id),
                artist_id: Set(artist_id),
                start_time: Set(start_time),
            }
            .insert(db)
            .await?;
        }

        // Bump sequences past the explicit seed ids
        db.execute_unprepared(
            "SELECT setval(pg_get_serial_sequence('venue', 'id'), (SELECT MAX(id) FROM venue))",
        )
        .await?;
        db.execute_unprepared(
            "SELECT setval(pg_get_serial_sequence('artist', 'id'), (SELECT MAX(id) FROM artist))",
        )
        .await?;
        db.execute_unprepared(
            "SELECT setval(pg_get_serial_sequence('show', 'id'), (SELECT MAX(id) FROM \"show\"))",
        )
        .await?;

        info!("Inserted seed venues, artists and shows");

        Ok(())
    }
}
