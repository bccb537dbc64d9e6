//! Combining results of independent operations.

/// Collect every success, or every failure.
///
/// Returns `Ok` with all values in input order when no item failed,
/// otherwise `Err` with all errors in input order. The whole iterator is
/// always consumed.
pub fn collect_all<T, E, I>(results: I) -> Result<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let (values, errors) = partition_results(results);

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Split results into successes and failures, keeping both.
pub fn partition_results<T, E, I>(results: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }

    (values, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ok() {
        let results: Vec<Result<i32, String>> = vec![Ok(1), Ok(2), Ok(3)];
        assert_eq!(collect_all(results), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_errors_collected_in_order() {
        let results: Vec<Result<i32, &str>> = vec![Ok(1), Err("a"), Ok(2), Err("b")];
        assert_eq!(collect_all(results), Err(vec!["a", "b"]));
    }

    #[test]
    fn test_empty_is_ok() {
        let results: Vec<Result<i32, &str>> = Vec::new();
        assert_eq!(collect_all(results), Ok(Vec::new()));
    }

    #[test]
    fn test_partition() {
        let results: Vec<Result<i32, &str>> = vec![Err("x"), Ok(4), Ok(5)];
        assert_eq!(partition_results(results), (vec![4, 5], vec!["x"]));
    }
}
