use crate::query::dao::VenueDao;
use crate::query::dto::venue::{AreaDto, VenueShortDto};
use crate::query::QueryError;
use chrono::NaiveDateTime;
use model::venue::VenueSummary;
use std::sync::Arc;

pub struct GetVenueList {
    venue_dao: Arc<dyn VenueDao + Send + Sync>,
}

impl GetVenueList {
    pub fn new(venue_dao: Arc<dyn VenueDao + Send + Sync>) -> Self {
        Self { venue_dao }
    }

    pub async fn handle(&self, now: NaiveDateTime) -> Result<Vec<AreaDto>, QueryError> {
        let venues = self.venue_dao.get_all(now).await?;
        Ok(group_into_areas(venues))
    }
}

/// 按 (city, state) 把场馆分桶为地区。
/// 线性扫描已有地区，命中第一个匹配；未命中则在尾部新建地区。
/// 输出顺序 = 每个 (city, state) 在输入中首次出现的顺序。
fn group_into_areas(venues: Vec<VenueSummary>) -> Vec<AreaDto> {
    let mut areas: Vec<AreaDto> = Vec::new();
    for venue in venues {
        let VenueSummary {
            id,
            name,
            city,
            state,
            upcoming_show_count,
        } = venue;
        let short = VenueShortDto {
            id,
            name,
            num_upcoming_shows: upcoming_show_count,
        };
        match areas
            .iter_mut()
            .find(|area| area.city == city && area.state == state)
        {
            Some(area) => area.venues.push(short),
            None => areas.push(AreaDto {
                city,
                state,
                venues: vec![short],
            }),
        }
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str, city: &str, state: &str, upcoming: i64) -> VenueSummary {
        VenueSummary {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            upcoming_show_count: upcoming,
        }
    }

    #[test]
    fn test_same_city_state_lands_in_one_area() {
        let areas = group_into_areas(vec![
            summary(1, "The Musical Hop", "San Francisco", "CA", 0),
            summary(2, "The Dueling Pianos Bar", "New York", "NY", 0),
            summary(3, "Park Square Live Music & Coffee", "San Francisco", "CA", 1),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[1].city, "New York");
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[test]
    fn test_area_order_follows_first_appearance() {
        let areas = group_into_areas(vec![
            summary(1, "a", "New York", "NY", 0),
            summary(2, "b", "San Francisco", "CA", 0),
            summary(3, "c", "New York", "NY", 0),
        ]);

        assert_eq!(areas[0].city, "New York");
        assert_eq!(areas[1].city, "San Francisco");
        // 同地区内保持输入顺序
        assert_eq!(areas[0].venues[0].id, 1);
        assert_eq!(areas[0].venues[1].id, 3);
    }

    #[test]
    fn test_same_city_different_state_stays_apart() {
        let areas = group_into_areas(vec![
            summary(1, "a", "Springfield", "IL", 0),
            summary(2, "b", "Springfield", "MA", 0),
        ]);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_upcoming_count_carried_into_short_projection() {
        let areas = group_into_areas(vec![summary(3, "Park Square", "San Francisco", "CA", 5)]);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 5);
    }
}
