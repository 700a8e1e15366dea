use contracts::domain::a002_air_quality::aggregate::AirQualityReading;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "air_quality")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub country: String,
    pub city: Option<String>,
    pub year: i32,
    pub aqi: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub no2: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AirQualityReading {
    fn from(m: Model) -> Self {
        AirQualityReading {
            id: m.id,
            country: m.country,
            city: m.city,
            year: m.year,
            aqi: m.aqi,
            pm25: m.pm25,
            pm10: m.pm10,
            no2: m.no2,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<AirQualityReading>> {
    let items = Entity::find()
        .order_by_asc(Column::Year)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
