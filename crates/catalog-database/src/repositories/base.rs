//! Generic repository shared by every catalog entity.
//!
//! SQL is assembled with [`QueryBuilder`]: table and column names come from
//! the [`Record`] implementation or are checked to be plain identifiers,
//! and every value is bound as a parameter.

use std::marker::PhantomData;

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use catalog_core::context::RequestContext;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_core::traits::Entity;
use catalog_core::types::filter::is_identifier;
use catalog_core::types::{Condition, FilterField, FilterOp, FilterValue, PageRequest, SortField};

use super::record::Record;
use crate::error::storage_error;

/// CRUD and query operations for one entity type.
///
/// Default relations configured with [`Repository::with_preloads`] are
/// eager-loaded by every read; the default order applies whenever a
/// caller passes no ordering.
#[derive(Debug, Clone)]
pub struct Repository<E> {
    pool: SqlitePool,
    preloads: Vec<String>,
    default_order: Vec<SortField>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Record> Repository<E> {
    /// Create a repository ordered by `id ASC` with no default relations.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            preloads: Vec::new(),
            default_order: vec![SortField::asc("id")],
            _entity: PhantomData,
        }
    }

    /// Relations loaded by every read.
    pub fn with_preloads<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preloads = relations.into_iter().map(Into::into).collect();
        self
    }

    /// Ordering used when a list call passes none.
    pub fn with_default_order(mut self, order: Vec<SortField>) -> Self {
        self.default_order = order;
        self
    }

    /// Return a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Relations loaded by every read.
    pub fn preloads(&self) -> &[String] {
        &self.preloads
    }

    /// Insert a new record; storage assigns the id and the repository
    /// stamps both timestamps with the current time.
    pub async fn create(&self, ctx: &RequestContext, entity: &E) -> AppResult<E> {
        let now = Utc::now();

        let mut qb = QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (", E::TABLE));
        qb.push(E::COLUMNS.join(", "))
            .push(", created_at, updated_at) VALUES (");
        {
            let mut values = qb.separated(", ");
            entity.bind_columns(&mut values);
            values.push_bind(now);
            values.push_bind(now);
        }
        qb.push(") RETURNING *");

        let created = ctx
            .run(async {
                qb.build_query_as::<E>()
                    .fetch_one(&self.pool)
                    .await
                    .map_err(storage_error("Failed to create record"))
            })
            .await?;

        debug!(table = E::TABLE, id = created.id(), "Record created");
        Ok(created)
    }

    /// Fetch a record by id with the default relations.
    pub async fn find_by_id(&self, ctx: &RequestContext, id: i64) -> AppResult<E> {
        self.find_by_id_with_relations(ctx, id, self.preloads.as_slice()).await
    }

    /// Fetch a record by id with an explicit relation list.
    pub async fn find_by_id_with_relations<R>(
        &self,
        ctx: &RequestContext,
        id: i64,
        relations: &[R],
    ) -> AppResult<E>
    where
        R: AsRef<str> + Sync,
    {
        let condition = Condition::eq("id", id);
        let mut records = self
            .select(ctx, &condition, &self.default_order, Some(PageRequest::new(1, 1)))
            .await?;
        if records.is_empty() {
            return Err(not_found::<E>(id));
        }
        self.load_relations(ctx, &mut records, relations).await?;
        records.pop().ok_or_else(|| not_found::<E>(id))
    }

    /// One page of all records plus the total count.
    pub async fn find_all(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
        order: &[SortField],
    ) -> AppResult<(Vec<E>, u64)> {
        self.find_page(ctx, page, order, &Condition::new(), self.preloads.as_slice())
            .await
    }

    /// One page of all records with an explicit relation list.
    pub async fn find_all_with_relations<R>(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
        order: &[SortField],
        relations: &[R],
    ) -> AppResult<(Vec<E>, u64)>
    where
        R: AsRef<str> + Sync,
    {
        self.find_page(ctx, page, order, &Condition::new(), relations)
            .await
    }

    /// One page of the records matching `condition` plus their total count.
    pub async fn find_all_where(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
        order: &[SortField],
        condition: &Condition,
    ) -> AppResult<(Vec<E>, u64)> {
        self.find_page(ctx, page, order, condition, self.preloads.as_slice())
            .await
    }

    /// The first record matching `condition` in default order.
    pub async fn find_one_where(
        &self,
        ctx: &RequestContext,
        condition: &Condition,
    ) -> AppResult<E> {
        let mut records = self
            .select(ctx, condition, &self.default_order, Some(PageRequest::new(1, 1)))
            .await?;
        if records.is_empty() {
            return Err(AppError::not_found(format!(
                "{} not found",
                E::RESOURCE_NAME
            )));
        }
        self.load_relations(ctx, &mut records, self.preloads.as_slice()).await?;
        records
            .pop()
            .ok_or_else(|| AppError::not_found(format!("{} not found", E::RESOURCE_NAME)))
    }

    /// Write every column of `entity` back by id, inserting the row if it
    /// no longer exists. `created_at` is kept and `updated_at` refreshed.
    pub async fn update(&self, ctx: &RequestContext, entity: &E) -> AppResult<E> {
        if !entity.is_persisted() {
            return Err(AppError::internal(format!(
                "Cannot update a {} that was never stored",
                E::RESOURCE_NAME
            )));
        }

        let updated_at = Utc::now().max(entity.updated_at());

        let mut qb = QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (id, ", E::TABLE));
        qb.push(E::COLUMNS.join(", "))
            .push(", created_at, updated_at) VALUES (");
        {
            let mut values = qb.separated(", ");
            values.push_bind(entity.id());
            entity.bind_columns(&mut values);
            values.push_bind(entity.created_at());
            values.push_bind(updated_at);
        }
        qb.push(") ON CONFLICT(id) DO UPDATE SET ");
        for column in E::COLUMNS {
            qb.push(format_args!("{column} = excluded.{column}, "));
        }
        qb.push("updated_at = excluded.updated_at RETURNING *");

        let updated = ctx
            .run(async {
                qb.build_query_as::<E>()
                    .fetch_one(&self.pool)
                    .await
                    .map_err(storage_error("Failed to update record"))
            })
            .await?;

        debug!(table = E::TABLE, id = updated.id(), "Record updated");
        Ok(updated)
    }

    /// Delete a record by id; an unknown id is `NotFound`.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = ctx
            .run(async {
                sqlx::query(&sql)
                    .bind(id)
                    .execute(&self.pool)
                    .await
                    .map_err(storage_error("Failed to delete record"))
            })
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found::<E>(id));
        }

        debug!(table = E::TABLE, id, "Record deleted");
        Ok(())
    }

    /// Whether a record with this id exists.
    pub async fn exists_by_id(&self, ctx: &RequestContext, id: i64) -> AppResult<bool> {
        self.exists_where(ctx, &Condition::eq("id", id)).await
    }

    /// Whether any record matches `condition`.
    pub async fn exists_where(&self, ctx: &RequestContext, condition: &Condition) -> AppResult<bool> {
        Ok(self.count_where(ctx, condition).await? > 0)
    }

    /// Whether any record other than `id` matches `condition`.
    pub async fn exists_where_excluding_id(
        &self,
        ctx: &RequestContext,
        id: i64,
        condition: &Condition,
    ) -> AppResult<bool> {
        let condition = condition.clone().and(FilterField::ne("id", id));
        self.exists_where(ctx, &condition).await
    }

    /// Number of records matching `condition`.
    pub async fn count_where(&self, ctx: &RequestContext, condition: &Condition) -> AppResult<u64> {
        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) FROM {}", E::TABLE));
        push_condition(&mut qb, condition)?;

        let count = ctx
            .run(async {
                qb.build_query_scalar::<i64>()
                    .fetch_one(&self.pool)
                    .await
                    .map_err(storage_error("Failed to count records"))
            })
            .await?;

        Ok(count.max(0) as u64)
    }

    /// Eager-load `relations` on already fetched records.
    pub async fn load_relations<R>(
        &self,
        ctx: &RequestContext,
        records: &mut [E],
        relations: &[R],
    ) -> AppResult<()>
    where
        R: AsRef<str> + Sync,
    {
        if records.is_empty() {
            return Ok(());
        }
        for relation in relations {
            ctx.run(E::load_relation(&self.pool, records, relation.as_ref()))
                .await?;
        }
        Ok(())
    }

    async fn find_page<R>(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
        order: &[SortField],
        condition: &Condition,
        relations: &[R],
    ) -> AppResult<(Vec<E>, u64)>
    where
        R: AsRef<str> + Sync,
    {
        let total = self.count_where(ctx, condition).await?;
        let order = if order.is_empty() {
            self.default_order.as_slice()
        } else {
            order
        };
        let mut records = self.select(ctx, condition, order, Some(*page)).await?;
        self.load_relations(ctx, &mut records, relations).await?;
        Ok((records, total))
    }

    async fn select(
        &self,
        ctx: &RequestContext,
        condition: &Condition,
        order: &[SortField],
        page: Option<PageRequest>,
    ) -> AppResult<Vec<E>> {
        ctx.run(select_where::<E>(&self.pool, condition, order, page))
            .await
    }
}

/// Fetch the records matching `condition` without loading relations.
pub(crate) async fn select_where<E: Record>(
    pool: &SqlitePool,
    condition: &Condition,
    order: &[SortField],
    page: Option<PageRequest>,
) -> AppResult<Vec<E>> {
    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {}", E::TABLE));
    push_condition(&mut qb, condition)?;
    push_order(&mut qb, order)?;
    if let Some(page) = page {
        qb.push(" LIMIT ")
            .push_bind(sql_int(page.limit()))
            .push(" OFFSET ")
            .push_bind(sql_int(page.offset()));
    }

    qb.build_query_as::<E>()
        .fetch_all(pool)
        .await
        .map_err(storage_error("Failed to query records"))
}

/// SQLite integers are signed; larger values clamp to `i64::MAX`.
fn sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn push_condition(qb: &mut QueryBuilder<'_, Sqlite>, condition: &Condition) -> AppResult<()> {
    for (index, filter) in condition.iter().enumerate() {
        check_identifier(&filter.field)?;
        qb.push(if index == 0 { " WHERE " } else { " AND " });
        qb.push(&filter.field);

        match (filter.op, &filter.value) {
            (FilterOp::IsNull | FilterOp::IsNotNull, _) => {
                qb.push(" ").push(filter.op.as_sql());
            }
            (FilterOp::In, FilterValue::IntegerList(values)) if values.is_empty() => {
                qb.push(" IN (NULL)");
            }
            (FilterOp::In, FilterValue::IntegerList(values)) => {
                qb.push(" IN (");
                let mut list = qb.separated(", ");
                for value in values {
                    list.push_bind(*value);
                }
                list.push_unseparated(")");
            }
            (FilterOp::In, _) => {
                return Err(AppError::internal(format!(
                    "IN filter on '{}' requires a list",
                    filter.field
                )));
            }
            (op, value) => {
                qb.push(" ").push(op.as_sql()).push(" ");
                match value {
                    FilterValue::Text(text) => qb.push_bind(text.clone()),
                    FilterValue::Integer(number) => qb.push_bind(*number),
                    FilterValue::Float(number) => qb.push_bind(*number),
                    FilterValue::Boolean(flag) => qb.push_bind(*flag),
                    FilterValue::IntegerList(_) | FilterValue::Null => {
                        return Err(AppError::internal(format!(
                            "Filter on '{}' has no comparable value",
                            filter.field
                        )));
                    }
                };
            }
        }
    }
    Ok(())
}

fn push_order(qb: &mut QueryBuilder<'_, Sqlite>, order: &[SortField]) -> AppResult<()> {
    qb.push(" ORDER BY ");
    for sort in order {
        check_identifier(&sort.field)?;
        qb.push(&sort.field)
            .push(" ")
            .push(sort.direction.as_sql())
            .push(", ");
    }
    // id breaks ties so consecutive pages never overlap
    qb.push("id ASC");
    Ok(())
}

fn check_identifier(name: &str) -> AppResult<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(AppError::internal(format!("Invalid column name '{name}'")))
    }
}

fn not_found<E: Record>(id: i64) -> AppError {
    AppError::not_found(format!("{} {id} not found", E::RESOURCE_NAME))
}
