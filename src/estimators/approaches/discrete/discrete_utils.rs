use ndarray::Array1;
use std::collections::HashMap;

/// Shared dataset for the histogram-based estimators.
///
/// Holds the raw series together with its frequency table and the empirical
/// distribution derived from it. States that never occur in the data are not
/// represented anywhere, so zero-probability states cannot contribute to any
/// downstream sum.
pub struct DiscreteDataset {
    /// Original integer data (1D)
    pub data: Array1<i32>,
    /// Counts per unique symbol
    pub counts: HashMap<i32, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols
    pub k: usize,
    /// Probability dictionary p(x) for each unique symbol
    pub dist: HashMap<i32, f64>,
}

impl DiscreteDataset {
    /// Build a DiscreteDataset from raw 1D integer data.
    pub fn from_data(data: Array1<i32>) -> Self {
        let n = data.len();
        let counts = count_frequencies(&data);
        let k = counts.len();
        let n_f = n as f64;
        let mut dist = HashMap::with_capacity(k);
        for (val, cnt) in counts.iter() {
            dist.insert(*val, *cnt as f64 / n_f);
        }
        Self {
            data,
            counts,
            n,
            k,
            dist,
        }
    }

    /// Map each sample to the probability of its own state.
    pub fn map_probs(&self) -> Array1<f64> {
        self.data.mapv(|v| self.dist[&v])
    }
}

/// Count the occurrences of each value in an array.
/// Uses a dense vector for small non-negative ranges, otherwise falls back to HashMap.
pub fn count_frequencies(data: &Array1<i32>) -> HashMap<i32, usize> {
    count_frequencies_slice(
        data.as_slice()
            .expect("owned Array1 data should be contiguous"),
    )
}

/// Count frequencies from a raw slice of i32 values with an optimized dense mode.
pub fn count_frequencies_slice(data: &[i32]) -> HashMap<i32, usize> {
    if data.is_empty() {
        return HashMap::new();
    }

    let mut min_v = i32::MAX;
    let mut max_v = i32::MIN;
    for &v in data.iter() {
        if v < min_v {
            min_v = v;
        }
        if v > max_v {
            max_v = v;
        }
    }

    // Dense counting only pays off when the alphabet fits a small table.
    const MAX_DENSE_RANGE: i32 = 4096;
    if min_v >= 0 && max_v - min_v <= MAX_DENSE_RANGE {
        let len = (max_v - min_v) as usize + 1;
        let mut dense = vec![0usize; len];
        for &v in data.iter() {
            dense[(v - min_v) as usize] += 1;
        }
        let mut map = HashMap::with_capacity(len);
        for (i, &cnt) in dense.iter().enumerate() {
            if cnt != 0 {
                map.insert(min_v + i as i32, cnt);
            }
        }
        return map;
    }

    let mut frequency_map = HashMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

/// Count the occurrences of each (x, y) pair in two aligned series.
///
/// Callers must have checked that the series are sample-aligned; the pair at
/// index i is the joint observation of sample i.
pub fn count_joint_pairs(x: &Array1<i32>, y: &Array1<i32>) -> HashMap<(i32, i32), usize> {
    debug_assert_eq!(x.len(), y.len());
    let mut pairs = HashMap::new();
    for (&a, &b) in x.iter().zip(y.iter()) {
        *pairs.entry((a, b)).or_insert(0) += 1;
    }
    pairs
}

/// Reduce multiple series (aligned by index) into a single compact joint code space.
///
/// Each position's tuple of values is mapped to a dense i32 ID, assigned in
/// first-occurrence order so the output is deterministic for a given input.
/// The IDs carry no structure beyond identity: two samples share an ID exactly
/// when they agree on every series. This keeps the joint alphabet as small as
/// the data itself, independent of how large the per-series alphabets are.
pub fn reduce_joint_space_compact(code_arrays: &[Array1<i32>]) -> Array1<i32> {
    if code_arrays.is_empty() {
        return Array1::zeros(0);
    }
    let len = code_arrays[0].len();
    for arr in code_arrays.iter() {
        assert_eq!(
            arr.len(),
            len,
            "all series must be sample-aligned for joint reduction"
        );
    }
    let mut map: HashMap<Vec<i32>, i32> = HashMap::new();
    let mut next_id: i32 = 0;
    let mut out: Vec<i32> = Vec::with_capacity(len);
    let k = code_arrays.len();
    for i in 0..len {
        let mut key: Vec<i32> = Vec::with_capacity(k);
        for arr in code_arrays.iter() {
            key.push(arr[i]);
        }
        let id = *map.entry(key).or_insert_with(|| {
            let v = next_id;
            next_id = next_id
                .checked_add(1)
                .expect("too many unique joint states to fit into i32");
            v
        });
        out.push(id);
    }
    Array1::from(out)
}
