use crate::seed::{self, SeedTransaction};
use anyhow::Context;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub seed_batch_id: Uuid,
    pub inserted: u64,
}

/// Generates a fresh batch of synthetic records and stores it.
pub async fn seed_database(pool: &sqlx::PgPool) -> anyhow::Result<SeedReport> {
    let batch = seed::generate_batch(&mut rand::thread_rng());
    insert_seed_batch(pool, &batch).await
}

/// Writes the whole batch in one statement inside one transaction.
pub async fn insert_seed_batch(
    pool: &sqlx::PgPool,
    items: &[SeedTransaction],
) -> anyhow::Result<SeedReport> {
    anyhow::ensure!(!items.is_empty(), "seed batch must be non-empty");

    let seed_batch_id = Uuid::new_v4();
    let t0 = std::time::Instant::now();

    let mut tx = pool.begin().await.context("begin transaction failed")?;

    let mut qb = sqlx::QueryBuilder::new(
        "INSERT INTO transactions (id, title, description, price, category, date_of_sale, sold, seed_batch_id) ",
    );
    qb.push_values(items, |mut b, item| {
        b.push_bind(Uuid::new_v4())
            .push_bind(&item.title)
            .push_bind(&item.description)
            .push_bind(item.price)
            .push_bind(&item.category)
            .push_bind(item.date_of_sale)
            .push_bind(item.sold)
            .push_bind(seed_batch_id);
    });

    let res = qb
        .build()
        .persistent(false)
        .execute(&mut *tx)
        .await
        .context("batch insert transactions failed")?;

    // Dropping `tx` on a short write rolls the batch back.
    let inserted = res.rows_affected();
    anyhow::ensure!(
        inserted == items.len() as u64,
        "seed batch inserted {inserted} of {} rows",
        items.len()
    );

    tx.commit().await.context("commit transaction failed")?;

    tracing::debug!(
        %seed_batch_id,
        inserted,
        elapsed_ms = t0.elapsed().as_millis(),
        "transactions seed batch insert"
    );

    Ok(SeedReport {
        seed_batch_id,
        inserted,
    })
}

pub async fn count_seed_batch(pool: &sqlx::PgPool, seed_batch_id: Uuid) -> anyhow::Result<i64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions WHERE seed_batch_id = $1")
        .persistent(false)
        .bind(seed_batch_id)
        .fetch_one(pool)
        .await
        .context("count seeded transactions failed")?;
    Ok(n)
}
