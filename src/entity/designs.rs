use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "designs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub designer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub specifications: Option<Json>,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub licensing_terms: Option<Json>,
    pub file_path: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::designers::Entity",
        from = "Column::DesignerId",
        to = "super::designers::Column::Id"
    )]
    Designers,
    #[sea_orm(has_many = "super::product_listings::Entity")]
    ProductListings,
}

impl Related<super::designers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Designers.def()
    }
}

impl Related<super::product_listings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductListings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
