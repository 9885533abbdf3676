/// Selectable Top-K values for the given number of experiences plus projects.
/// Zero entries still offers a single `0` so the selector is never empty.
pub fn top_k_options(entry_count: usize) -> Vec<u32> {
    if entry_count == 0 {
        return vec![0];
    }
    let max = u32::try_from(entry_count).unwrap_or(u32::MAX);
    (1..=max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_is_zero() {
        assert_eq!(top_k_options(0), vec![0]);
    }

    #[test]
    fn test_range_covers_combined_count() {
        // 2 experiences + 3 projects
        assert_eq!(top_k_options(2 + 3), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_single_entry() {
        assert_eq!(top_k_options(1), vec![1]);
    }
}
