use crate::db::connection::Database;
use crate::domain::listing::{Listing, ListingSummary, ListingWithUser, NewListing};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        make: row.get(3)?,
        model: row.get(4)?,
        year: row.get(5)?,
        mileage_km: row.get(6)?,
        price: row.get(7)?,
        description: row.get(8)?,
        city: row.get(9)?,
        phone: row.get(10)?,
        whatsapp: row.get(11)?,
        views_count: row.get(12)?,
        likes_count: row.get(13)?,
        created_at: row.get(14)?,
    })
}

const LISTING_COLUMNS: &str = r#"
    l.id, l.user_id,
    l.title, l.make, l.model, l.year, l.mileage_km, l.price,
    l.description, l.city, l.phone, l.whatsapp,
    l.views_count, l.likes_count, l.created_at
"#;

pub fn create_listing(
    db: &Database,
    user_id: i64,
    new: &NewListing,
) -> Result<i64, ServerError> {
    let now = Utc::now().naive_utc();

    db.with_conn(|conn| {
        let tx = conn.transaction()?;

        tx.execute(
            r#"
            insert into listings (
                user_id, title, make, model, year, mileage_km, price,
                description, city, phone, whatsapp, created_at
            ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                user_id,
                new.title,
                new.make,
                new.model,
                new.year,
                new.mileage_km,
                new.price,
                new.description,
                new.city,
                new.phone,
                new.whatsapp,
                now,
            ],
        )?;

        let listing_id = tx.last_insert_rowid();

        for (position, url) in new.image_urls.iter().enumerate() {
            tx.execute(
                "insert into listing_images (listing_id, url, position) values (?, ?, ?)",
                params![listing_id, url, position as i64],
            )?;
        }

        tx.commit()?;
        Ok(listing_id)
    })
}

pub fn find_by_id_with_user(
    db: &Database,
    listing_id: i64,
) -> Result<Option<ListingWithUser>, ServerError> {
    db.with_conn(|conn| {
        let sql = format!(
            r#"
            select {LISTING_COLUMNS}, u.email, u.display_name
            from listings l
            join users u on u.id = l.user_id
            where l.id = ?
            "#
        );

        let found = conn
            .query_row(&sql, params![listing_id], |row| {
                Ok((listing_from_row(row)?, row.get(15)?, row.get(16)?))
            })
            .optional()?;

        let Some((listing, seller_email, seller_name)) = found else {
            return Ok(None);
        };

        let mut stmt = conn.prepare(
            "select url from listing_images where listing_id = ? order by position, id",
        )?;
        let rows = stmt.query_map(params![listing_id], |row| row.get::<_, String>(0))?;

        let mut image_urls = Vec::new();
        for url in rows {
            image_urls.push(url?);
        }

        Ok(Some(ListingWithUser {
            listing,
            seller_email,
            seller_name,
            image_urls,
        }))
    })
}

/// Bumps `views_count` by exactly one. The caller decides whether this
/// load counts (owners never do) and treats failures as best-effort.
pub fn increment_views(db: &Database, listing_id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute(
            "update listings set views_count = views_count + 1 where id = ?",
            params![listing_id],
        )?;
        Ok(())
    })
}

/// Same make first, newest first, never the listing itself.
pub fn find_similar(
    db: &Database,
    listing_id: i64,
    count: usize,
) -> Result<Vec<ListingSummary>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            select s.id, s.title, s.make, s.model, s.year, s.price, s.city,
                   s.views_count, s.likes_count
            from listings s
            join listings l on l.id = ?1
            where s.id != l.id and s.make = l.make
            order by s.created_at desc
            limit ?2
            "#,
        )?;

        let rows = stmt.query_map(params![listing_id, count as i64], summary_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

pub fn recent_listings(db: &Database, limit: usize) -> Result<Vec<ListingSummary>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            r#"
            select id, title, make, model, year, price, city, views_count, likes_count
            from listings
            order by created_at desc, id desc
            limit ?
            "#,
        )?;

        let rows = stmt.query_map(params![limit as i64], summary_from_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<ListingSummary> {
    Ok(ListingSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        make: row.get(2)?,
        model: row.get(3)?,
        year: row.get(4)?,
        price: row.get(5)?,
        city: row.get(6)?,
        views_count: row.get(7)?,
        likes_count: row.get(8)?,
    })
}

pub fn delete_listing(db: &Database, listing_id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        // Likes and images cascade, but only if the pragma is on; delete
        // explicitly so the schema does not depend on connection setup.
        tx.execute("delete from listing_likes where listing_id = ?", params![listing_id])?;
        tx.execute("delete from listing_images where listing_id = ?", params![listing_id])?;
        tx.execute("delete from listings where id = ?", params![listing_id])?;
        tx.commit()?;
        Ok(())
    })
}
