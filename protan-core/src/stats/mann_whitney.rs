use crate::error::{BioError, BioResult};
use log::warn;
use vector_map::VecMap;

/// Critical value of U for two samples of 20 observations.
///
/// The value is only meaningful for that sample-size regime; it is not
/// derived from a significance level.
pub const U_CRITICAL: f64 = 127.0;

/// Sample size the critical value was tuned for.
pub const TUNED_SAMPLE_SIZE: usize = 20;

/// Pooled observations of two samples with their tie-corrected ranks.
#[derive(Debug, Clone)]
pub struct RankTable {
    // value -> (sum of 1-based positions, occurrences)
    groups: VecMap<u64, (f64, usize)>,
    len: usize,
}

impl RankTable {
    /// Sorts the pooled values and assigns every distinct value the mean of
    /// the 1-based positions it occupies.
    pub fn pooled(x: &[f64], y: &[f64]) -> Self {
        let mut pooled: Vec<f64> = Vec::with_capacity(x.len() + y.len());
        pooled.extend_from_slice(x);
        pooled.extend_from_slice(y);
        pooled.sort_by(|a, b| a.total_cmp(b));

        let mut groups: VecMap<u64, (f64, usize)> = VecMap::new();
        for (i, &v) in pooled.iter().enumerate() {
            let key = identity(v);
            let (sum, count) = groups.get(&key).copied().unwrap_or((0.0, 0));
            groups.insert(key, (sum + (i + 1) as f64, count + 1));
        }

        RankTable {
            groups,
            len: pooled.len(),
        }
    }

    pub fn rank_of(&self, value: f64) -> Option<f64> {
        self.groups
            .get(&identity(value))
            .map(|&(sum, count)| sum / count as f64)
    }

    /// Sum of ranks over `sample`; repeated values contribute once per occurrence.
    pub fn rank_sum(&self, sample: &[f64]) -> f64 {
        sample.iter().filter_map(|&v| self.rank_of(v)).sum()
    }

    /// Number of pooled observations.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct pooled values.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }
}

// Numeric identity of a value; `0.0` and `-0.0` share a group.
#[inline]
fn identity(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UStatistic {
    pub n1: usize,
    pub n2: usize,
    pub r1: f64,
    pub r2: f64,
    pub u1: f64,
    pub u2: f64,
}

impl UStatistic {
    /// The test statistic, `min(U1, U2)`.
    pub fn u(&self) -> f64 {
        self.u1.min(self.u2)
    }

    /// True when the samples cannot be told apart at the fixed critical value.
    pub fn indistinguishable(&self) -> bool {
        self.u() > U_CRITICAL
    }
}

fn check_sample(sample: &[f64], which: usize) -> BioResult<()> {
    if sample.is_empty() {
        return Err(BioError::EmptySample { which });
    }
    if let Some(pos) = sample.iter().position(|v| !v.is_finite()) {
        return Err(BioError::NonFiniteSample { which, pos });
    }
    Ok(())
}

/// Mann-Whitney U statistic of two samples with mid-rank tie correction.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> BioResult<UStatistic> {
    check_sample(x, 1)?;
    check_sample(y, 2)?;

    let table = RankTable::pooled(x, y);
    let r1 = table.rank_sum(x);
    let r2 = table.rank_sum(y);

    let n1 = x.len();
    let n2 = y.len();
    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let u1 = n1f * n2f + n1f * (n1f + 1.0) / 2.0 - r1;
    let u2 = n1f * n2f + n2f * (n2f + 1.0) / 2.0 - r2;

    Ok(UStatistic {
        n1,
        n2,
        r1,
        r2,
        u1,
        u2,
    })
}

/// Returns `false` when `min(U1, U2) <= 127`, i.e. the samples differ.
pub fn compare(x: &[f64], y: &[f64]) -> BioResult<bool> {
    if x.len() != TUNED_SAMPLE_SIZE || y.len() != TUNED_SAMPLE_SIZE {
        warn!(
            "critical U of {} assumes {} vs {} observations, got {} vs {}",
            U_CRITICAL,
            TUNED_SAMPLE_SIZE,
            TUNED_SAMPLE_SIZE,
            x.len(),
            y.len()
        );
    }
    Ok(mann_whitney_u(x, y)?.indistinguishable())
}
