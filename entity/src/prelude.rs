pub use super::bill::Entity as Bill;
pub use super::bill_product::Entity as BillProduct;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
