//! Derived capacity quantities.

use crate::domain::Domain;

/// Shannon entropy in bits of the distribution `p_i = size_i / Σ size_j`.
///
/// Zero for an empty or all-zero input; zero-size entries contribute
/// nothing.
pub fn entropy(sizes: &[u32]) -> f64 {
    let total: u64 = sizes.iter().map(|&s| u64::from(s)).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    sizes
        .iter()
        .filter(|&&s| s > 0)
        .map(|&s| {
            let p = f64::from(s) / total;
            -p * p.log2()
        })
        .sum()
}

/// Slice capacities of a domain's direct children, in child order.
pub fn child_slice_capacities(domain: &Domain) -> Vec<u32> {
    domain.children().iter().map(|c| c.slices).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;

    #[test]
    fn entropy_of_uniform_pair_is_one_bit() {
        assert_eq!(entropy(&[4, 4]), 1.0);
    }

    #[test]
    fn entropy_of_uniform_quad_is_two_bits() {
        assert_eq!(entropy(&[3, 3, 3, 3]), 2.0);
    }

    #[test]
    fn entropy_of_concentrated_distribution_is_zero() {
        assert_eq!(entropy(&[8, 0]), 0.0);
        assert_eq!(entropy(&[0, 0, 5]), 0.0);
    }

    #[test]
    fn entropy_of_empty_or_all_zero_is_zero() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(entropy(&[0, 0, 0]), 0.0);
    }

    #[test]
    fn entropy_skips_zero_sizes() {
        // Zeros must not poison the sum with NaN terms.
        assert_eq!(entropy(&[4, 0, 4]), 1.0);
    }

    #[test]
    fn skewed_distribution_is_between_zero_and_uniform() {
        let skewed = entropy(&[6, 2]);
        assert!(skewed > 0.0 && skewed < 1.0);
    }

    #[test]
    fn child_capacities_preserve_order() {
        let parent = Domain::leaf("r1", 1, 0, 0, 0).with_children(vec![
            Domain::leaf("h0", 2, 5, 5, 1),
            Domain::leaf("h1", 2, 0, 0, 0),
            Domain::leaf("h2", 2, 3, 2, 1),
        ]);
        assert_eq!(child_slice_capacities(&parent), vec![5, 0, 3]);
    }

    #[test]
    fn leaf_has_no_child_capacities() {
        let leaf = Domain::leaf("h0", 2, 5, 5, 1);
        assert!(child_slice_capacities(&leaf).is_empty());
    }
}
