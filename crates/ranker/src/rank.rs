use crate::types::{CorpusRecord, RankError, RankedResult, Ranking};

/// Dot product over the shared index range of two equal-length vectors.
#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Rank `corpus` against `query` and return the top `k` hits.
///
/// Every record whose vector length matches the query is scored with the raw
/// dot product, sorted descending (stable, so ties keep corpus fetch order),
/// and truncated to `k`. Records with a mismatched vector length are never
/// scored: they are skipped and counted in [`Ranking::skipped`], and the
/// request still succeeds.
///
/// An empty corpus is valid and yields an empty ranking. `k` larger than the
/// corpus returns all ranked records.
///
/// # Errors
///
/// [`RankError::EmptyQuery`] when the query vector has no elements.
pub fn rank(query: &[f32], corpus: Vec<CorpusRecord>, k: usize) -> Result<Ranking, RankError> {
    if query.is_empty() {
        return Err(RankError::EmptyQuery);
    }

    let mut skipped = 0usize;
    let mut hits: Vec<RankedResult> = Vec::with_capacity(corpus.len());

    for record in corpus {
        if record.vector.len() != query.len() {
            tracing::warn!(
                id = %record.id,
                record_dim = record.vector.len(),
                query_dim = query.len(),
                "skipping corpus record with mismatched vector length"
            );
            skipped += 1;
            continue;
        }

        let similarity = dot(query, &record.vector);
        hits.push(RankedResult {
            id: record.id,
            text: record.text,
            similarity,
        });
    }

    // Stable sort: equal scores keep their corpus fetch order. `total_cmp`
    // keeps the ordering total even when a score comes out NaN.
    hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    hits.truncate(k);

    Ok(Ranking { hits, skipped })
}
