use contracts::domain::a003_earthquake::aggregate::EarthquakeEvent;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "earthquake")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub time: String,
    pub place: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_km: Option<f64>,
    pub magnitude: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EarthquakeEvent {
    fn from(m: Model) -> Self {
        EarthquakeEvent {
            id: m.id,
            time: m.time,
            place: m.place,
            latitude: m.latitude,
            longitude: m.longitude,
            depth_km: m.depth_km,
            magnitude: m.magnitude,
        }
    }
}

/// Newest first.
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<EarthquakeEvent>> {
    let items = Entity::find()
        .order_by_desc(Column::Time)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
