use contracts::domain::a004_global_warming::aggregate::GlobalWarmingRecord;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "global_warming")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub year: i32,
    pub temperature_anomaly: f64,
    pub co2_ppm: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for GlobalWarmingRecord {
    fn from(m: Model) -> Self {
        GlobalWarmingRecord {
            id: m.id,
            year: m.year,
            temperature_anomaly: m.temperature_anomaly,
            co2_ppm: m.co2_ppm,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<GlobalWarmingRecord>> {
    let items = Entity::find()
        .order_by_asc(Column::Year)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
