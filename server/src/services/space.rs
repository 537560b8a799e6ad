//! Space service: listing CRUD and filtered, paginated search.
//!
//! DESIGN
//! ======
//! Handlers validate wire payloads into `listings` types before calling in
//! here, so this module only deals with typed values. Updates merge in Rust
//! under a row lock so the cross-field rules (one price, ordered window) are
//! checked against the full merged record before it is written back.

use listings::{ListFilter, NewSpace, Space, SpaceChanges, SpaceType, ValidationErrors, pagination};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use time::OffsetDateTime;
use tracing::{info, warn};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SpaceError {
    #[error("space not found: {0}")]
    NotFound(i64),
    #[error("invalid space: {0}")]
    Invalid(ValidationErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

const SPACE_COLUMNS: &str = "id, title, description, space_type, location, address, city, state, zip_code, country, \
     price_per_hour, price_per_day, price_per_week, price_per_month, area_sqft, max_capacity, amenities, \
     is_available, available_from, available_until, photos, created_at, updated_at";

/// Row shape of the `spaces` table.
#[derive(Debug, sqlx::FromRow)]
struct SpaceRow {
    id: i64,
    title: String,
    description: String,
    space_type: String,
    location: String,
    address: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
    price_per_hour: Option<f64>,
    price_per_day: Option<f64>,
    price_per_week: Option<f64>,
    price_per_month: Option<f64>,
    area_sqft: Option<i32>,
    max_capacity: Option<i32>,
    amenities: Json<Vec<String>>,
    is_available: bool,
    available_from: Option<OffsetDateTime>,
    available_until: Option<OffsetDateTime>,
    photos: Json<Vec<String>>,
    created_at: OffsetDateTime,
    updated_at: Option<OffsetDateTime>,
}

impl From<SpaceRow> for Space {
    fn from(row: SpaceRow) -> Self {
        let space_type = SpaceType::parse(&row.space_type).unwrap_or_else(|| {
            warn!(id = row.id, space_type = %row.space_type, "unknown space_type in database");
            SpaceType::Other
        });
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            space_type,
            location: row.location,
            address: row.address,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            country: row.country,
            price_per_hour: row.price_per_hour,
            price_per_day: row.price_per_day,
            price_per_week: row.price_per_week,
            price_per_month: row.price_per_month,
            area_sqft: row.area_sqft,
            max_capacity: row.max_capacity,
            amenities: row.amenities.0,
            is_available: row.is_available,
            available_from: row.available_from,
            available_until: row.available_until,
            photos: row.photos.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// =============================================================================
// CRUD
// =============================================================================

/// Insert a validated listing.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_space(pool: &PgPool, new: &NewSpace) -> Result<Space, SpaceError> {
    let row = sqlx::query_as::<_, SpaceRow>(&format!(
        "INSERT INTO spaces (title, description, space_type, location, address, city, state, zip_code, country, \
             price_per_hour, price_per_day, price_per_week, price_per_month, area_sqft, max_capacity, amenities, \
             is_available, available_from, available_until, photos) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20) \
         RETURNING {SPACE_COLUMNS}"
    ))
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.space_type.as_str())
    .bind(&new.location)
    .bind(&new.address)
    .bind(&new.city)
    .bind(&new.state)
    .bind(&new.zip_code)
    .bind(&new.country)
    .bind(new.price_per_hour)
    .bind(new.price_per_day)
    .bind(new.price_per_week)
    .bind(new.price_per_month)
    .bind(new.area_sqft)
    .bind(new.max_capacity)
    .bind(Json(&new.amenities))
    .bind(new.is_available)
    .bind(new.available_from)
    .bind(new.available_until)
    .bind(Json(&new.photos))
    .fetch_one(pool)
    .await?;

    info!(id = row.id, space_type = %row.space_type, city = %row.city, "space created");
    Ok(row.into())
}

/// Fetch one listing.
///
/// # Errors
///
/// Returns [`SpaceError::NotFound`] when no row has `id`.
pub async fn get_space(pool: &PgPool, id: i64) -> Result<Space, SpaceError> {
    sqlx::query_as::<_, SpaceRow>(&format!("SELECT {SPACE_COLUMNS} FROM spaces WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .map(Space::from)
        .ok_or(SpaceError::NotFound(id))
}

/// One page of listings matching `filter`, newest first, plus the total
/// number of matches across all pages.
///
/// # Errors
///
/// Returns a database error if either query fails.
pub async fn list_spaces(pool: &PgPool, filter: &ListFilter) -> Result<(Vec<Space>, u64), SpaceError> {
    let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM spaces");
    push_filters(&mut count, filter);
    let total: i64 = count.build_query_scalar::<i64>().fetch_one(pool).await?;

    let mut select = select_page_query(filter);
    let rows = select.build_query_as::<SpaceRow>().fetch_all(pool).await?;

    Ok((rows.into_iter().map(Space::from).collect(), u64::try_from(total).unwrap_or(0)))
}

/// Merge `changes` into the stored listing and write it back.
///
/// An empty change set writes nothing and returns the stored listing with
/// `updated_at` untouched.
///
/// # Errors
///
/// Returns [`SpaceError::NotFound`] for an unknown `id` and
/// [`SpaceError::Invalid`] when the merged record breaks a cross-field rule.
pub async fn update_space(pool: &PgPool, id: i64, changes: &SpaceChanges) -> Result<Space, SpaceError> {
    let mut tx = pool.begin().await?;

    let current = sqlx::query_as::<_, SpaceRow>(&format!("SELECT {SPACE_COLUMNS} FROM spaces WHERE id = $1 FOR UPDATE"))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(SpaceError::NotFound(id))?;

    if changes.is_empty() {
        return Ok(current.into());
    }

    let mut space = Space::from(current);
    changes.apply_to(&mut space);
    space.check_invariants().map_err(SpaceError::Invalid)?;

    let row = sqlx::query_as::<_, SpaceRow>(&format!(
        "UPDATE spaces SET title = $2, description = $3, space_type = $4, location = $5, address = $6, \
             city = $7, state = $8, zip_code = $9, country = $10, price_per_hour = $11, price_per_day = $12, \
             price_per_week = $13, price_per_month = $14, area_sqft = $15, max_capacity = $16, amenities = $17, \
             is_available = $18, available_from = $19, available_until = $20, photos = $21, updated_at = now() \
         WHERE id = $1 \
         RETURNING {SPACE_COLUMNS}"
    ))
    .bind(id)
    .bind(&space.title)
    .bind(&space.description)
    .bind(space.space_type.as_str())
    .bind(&space.location)
    .bind(&space.address)
    .bind(&space.city)
    .bind(&space.state)
    .bind(&space.zip_code)
    .bind(&space.country)
    .bind(space.price_per_hour)
    .bind(space.price_per_day)
    .bind(space.price_per_week)
    .bind(space.price_per_month)
    .bind(space.area_sqft)
    .bind(space.max_capacity)
    .bind(Json(&space.amenities))
    .bind(space.is_available)
    .bind(space.available_from)
    .bind(space.available_until)
    .bind(Json(&space.photos))
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    info!(id, "space updated");
    Ok(row.into())
}

/// Delete a listing.
///
/// # Errors
///
/// Returns [`SpaceError::NotFound`] when no row has `id`.
pub async fn delete_space(pool: &PgPool, id: i64) -> Result<(), SpaceError> {
    let result = sqlx::query("DELETE FROM spaces WHERE id = $1").bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(SpaceError::NotFound(id));
    }
    info!(id, "space deleted");
    Ok(())
}

/// Total number of stored listings.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn count_spaces(pool: &PgPool) -> Result<u64, SpaceError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM spaces").fetch_one(pool).await?;
    Ok(u64::try_from(total).unwrap_or(0))
}

// =============================================================================
// QUERY BUILDING
// =============================================================================

fn select_page_query(filter: &ListFilter) -> QueryBuilder<'static, Postgres> {
    let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {SPACE_COLUMNS} FROM spaces"));
    push_filters(&mut select, filter);

    let offset = i64::try_from(pagination::offset(filter.page, filter.per_page)).unwrap_or(i64::MAX);
    select.push(" ORDER BY created_at DESC, id DESC LIMIT ");
    select.push_bind(i64::from(filter.per_page));
    select.push(" OFFSET ");
    select.push_bind(offset);
    select
}

/// Append a `WHERE` clause for every active filter.
fn push_filters(builder: &mut QueryBuilder<'static, Postgres>, filter: &ListFilter) {
    let mut first = true;
    let mut next_clause = |builder: &mut QueryBuilder<'static, Postgres>| {
        builder.push(if first { " WHERE " } else { " AND " });
        first = false;
    };

    if let Some(space_type) = filter.space_type {
        next_clause(builder);
        builder.push("space_type = ").push_bind(space_type.as_str());
    }
    if let Some(city) = &filter.city {
        next_clause(builder);
        builder.push("city ILIKE ").push_bind(contains_pattern(city));
    }
    if let Some(state) = &filter.state {
        next_clause(builder);
        builder.push("state ILIKE ").push_bind(contains_pattern(state));
    }
    if let Some(min) = filter.min_price {
        next_clause(builder);
        builder.push("price_per_hour >= ").push_bind(min);
    }
    if let Some(max) = filter.max_price {
        next_clause(builder);
        builder.push("price_per_hour <= ").push_bind(max);
    }
    if let Some(available) = filter.is_available {
        next_clause(builder);
        builder.push("is_available = ").push_bind(available);
    }
    if let Some(search) = &filter.search {
        next_clause(builder);
        let pattern = contains_pattern(search);
        builder
            .push("(title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR location ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
}

/// `%needle%` with LIKE metacharacters in `needle` escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
#[path = "space_test.rs"]
mod tests;
