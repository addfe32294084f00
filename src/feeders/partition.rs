use crate::errors::ScanError;

/// Splits `addresses` into `workers` contiguous chunks. Chunk `i` is
/// `[i * len / workers, (i + 1) * len / workers)`, so any remainder lands in
/// the later chunks and surplus workers get empty chunks.
pub fn partition<T: Clone>(addresses: &[T], workers: usize) -> Result<Vec<Vec<T>>, ScanError> {
    if workers < 1 {
        return Err(ScanError::InvalidConfig(
            "number of workers must be a positive integer".to_string(),
        ));
    }

    let len = addresses.len();
    let chunks = (0..workers)
        .map(|i| {
            let min = i * len / workers;
            let max = (i + 1) * len / workers;
            addresses[min..max].to_vec()
        })
        .collect();

    Ok(chunks)
}
