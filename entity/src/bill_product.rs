use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bill_id: i32,
    /// Order of the product line within its bill.
    pub position: i32,
    pub product_name: String,
    pub quantity: f64,
    pub rate: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bill::Entity",
        from = "Column::BillId",
        to = "super::bill::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bill,
}

impl Related<super::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
