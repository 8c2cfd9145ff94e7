use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persisted customer row. The id is generated by the database and is the
/// only field with enforced uniqueness.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Resolve a caller-supplied sort key to an entity column. Keys match the
/// wire field names; anything else is unknown to the store.
pub fn sort_column(key: &str) -> Option<Column> {
    match key {
        "id" => Some(Column::Id),
        "name" => Some(Column::Name),
        "age" => Some(Column::Age),
        "mobile_number" => Some(Column::MobileNumber),
        "email_address" => Some(Column::EmailAddress),
        "address" => Some(Column::Address),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::sort_column;

    #[test]
    fn sort_column_resolves_known_fields() {
        for key in ["id", "name", "age", "mobile_number", "email_address", "address"] {
            assert!(sort_column(key).is_some(), "{key} should resolve");
        }
    }

    #[test]
    fn sort_column_rejects_unknown_fields() {
        assert!(sort_column("customerName").is_none());
        assert!(sort_column("").is_none());
    }
}
