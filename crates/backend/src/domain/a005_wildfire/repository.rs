use contracts::domain::a005_wildfire::aggregate::WildfireRecord;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryOrder};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wildfire")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub year: i32,
    pub country: String,
    pub region: Option<String>,
    pub burned_area_ha: Option<f64>,
    pub fire_count: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WildfireRecord {
    fn from(m: Model) -> Self {
        WildfireRecord {
            id: m.id,
            year: m.year,
            country: m.country,
            region: m.region,
            burned_area_ha: m.burned_area_ha,
            fire_count: m.fire_count,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<WildfireRecord>> {
    let items = Entity::find()
        .order_by_asc(Column::Year)
        .order_by_asc(Column::Country)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
