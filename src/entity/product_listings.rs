use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub design_id: Uuid,
    #[sea_orm(unique)]
    pub sku: String,
    pub base_price: i64,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub available_sizes: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub available_colors: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub printing_requirements: Option<Json>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::designs::Entity",
        from = "Column::DesignId",
        to = "super::designs::Column::Id"
    )]
    Designs,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::designs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designs.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
