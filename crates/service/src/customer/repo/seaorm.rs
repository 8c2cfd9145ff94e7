use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use models::customer;

use crate::customer::domain::CustomerRecord;
use crate::customer::repository::CustomerRepository;
use crate::errors::RepositoryError;
use crate::pagination::PageRequest;

/// Production record store backed by SeaORM / Postgres.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_record(model: customer::Model) -> CustomerRecord {
    CustomerRecord {
        id: Some(model.id),
        name: model.name,
        age: model.age,
        mobile_number: model.mobile_number,
        email_address: model.email_address,
        address: model.address,
    }
}

fn to_active(record: &CustomerRecord) -> customer::ActiveModel {
    customer::ActiveModel {
        id: record.id.map(Set).unwrap_or(NotSet),
        name: Set(record.name.clone()),
        age: Set(record.age),
        mobile_number: Set(record.mobile_number.clone()),
        email_address: Set(record.email_address.clone()),
        address: Set(record.address.clone()),
    }
}

fn resolve_sort(sort_key: &str) -> Result<customer::Column, RepositoryError> {
    customer::sort_column(sort_key)
        .ok_or_else(|| RepositoryError::UnknownSortField(sort_key.to_string()))
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn save(&self, record: CustomerRecord) -> Result<CustomerRecord, RepositoryError> {
        let am = to_active(&record);
        let model = match record.id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(to_record(model))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CustomerRecord>, RepositoryError> {
        let found = customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(found.map(to_record))
    }

    async fn find_all(&self) -> Result<Vec<CustomerRecord>, RepositoryError> {
        let rows = customer::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(())
    }

    async fn find_all_paged(&self, page: PageRequest) -> Result<Vec<CustomerRecord>, RepositoryError> {
        if page.page_size == 0 {
            return Err(RepositoryError::InvalidPageSize);
        }
        let rows = customer::Entity::find()
            .paginate(&self.db, page.page_size)
            .fetch_page(page.page_no)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn find_all_paged_sorted(
        &self,
        page: PageRequest,
        sort_key: &str,
    ) -> Result<Vec<CustomerRecord>, RepositoryError> {
        if page.page_size == 0 {
            return Err(RepositoryError::InvalidPageSize);
        }
        let col = resolve_sort(sort_key)?;
        let rows = customer::Entity::find()
            .order_by_asc(col)
            .paginate(&self.db, page.page_size)
            .fetch_page(page.page_no)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(to_record).collect())
    }

    async fn find_all_sorted(&self, sort_key: &str) -> Result<Vec<CustomerRecord>, RepositoryError> {
        let col = resolve_sort(sort_key)?;
        let rows = customer::Entity::find()
            .order_by_asc(col)
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(to_record).collect())
    }
}
