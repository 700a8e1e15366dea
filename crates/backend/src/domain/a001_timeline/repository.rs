use contracts::domain::a001_timeline::aggregate::DisasterRecord;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "timeline")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "Dis No")]
    pub dis_no: Option<String>,
    #[sea_orm(column_name = "Disaster Group")]
    pub disaster_group: Option<String>,
    #[sea_orm(column_name = "Disaster Subgroup")]
    pub disaster_subgroup: Option<String>,
    #[sea_orm(column_name = "Disaster Type")]
    pub disaster_type: Option<String>,
    #[sea_orm(column_name = "Disaster Subtype")]
    pub disaster_subtype: Option<String>,
    #[sea_orm(column_name = "Event Name")]
    pub event_name: Option<String>,
    #[sea_orm(column_name = "Country")]
    pub country: Option<String>,
    #[sea_orm(column_name = "ISO")]
    pub iso: Option<String>,
    #[sea_orm(column_name = "Region")]
    pub region: Option<String>,
    #[sea_orm(column_name = "Continent")]
    pub continent: Option<String>,
    #[sea_orm(column_name = "Location")]
    pub location: Option<String>,
    #[sea_orm(column_name = "Start Year")]
    pub start_year: Option<i32>,
    #[sea_orm(column_name = "Start Month")]
    pub start_month: Option<i32>,
    #[sea_orm(column_name = "Start Day")]
    pub start_day: Option<i32>,
    #[sea_orm(column_name = "End Year")]
    pub end_year: Option<i32>,
    #[sea_orm(column_name = "End Month")]
    pub end_month: Option<i32>,
    #[sea_orm(column_name = "End Day")]
    pub end_day: Option<i32>,
    #[sea_orm(column_name = "Total Deaths")]
    pub total_deaths: Option<i64>,
    #[sea_orm(column_name = "No Injured")]
    pub no_injured: Option<i64>,
    #[sea_orm(column_name = "Total Affected")]
    pub total_affected: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for DisasterRecord {
    fn from(m: Model) -> Self {
        DisasterRecord {
            id: m.id,
            dis_no: m.dis_no,
            disaster_group: m.disaster_group,
            disaster_subgroup: m.disaster_subgroup,
            disaster_type: m.disaster_type,
            disaster_subtype: m.disaster_subtype,
            event_name: m.event_name,
            country: m.country,
            iso: m.iso,
            region: m.region,
            continent: m.continent,
            location: m.location,
            start_year: m.start_year,
            start_month: m.start_month,
            start_day: m.start_day,
            end_year: m.end_year,
            end_month: m.end_month,
            end_day: m.end_day,
            total_deaths: m.total_deaths,
            no_injured: m.no_injured,
            total_affected: m.total_affected,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<DisasterRecord>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// All records whose `Start Year` equals `year`, in insertion order.
pub async fn find_by_start_year(
    db: &DatabaseConnection,
    year: i32,
) -> anyhow::Result<Vec<DisasterRecord>> {
    let items = Entity::find()
        .filter(Column::StartYear.eq(year))
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn find_by_type_and_year(
    db: &DatabaseConnection,
    disaster_type: &str,
    year: i32,
) -> anyhow::Result<Vec<DisasterRecord>> {
    let items = Entity::find()
        .filter(Column::DisasterType.eq(disaster_type))
        .filter(Column::StartYear.eq(year))
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
