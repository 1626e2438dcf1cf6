//! Page slicing with saturating bounds.

use folio_types::{ItemRange, PageSize};

/// Range of items shown on `page` (1-based; 0 is read as 1).
///
/// Never extends past `total_items`; a page beyond the end gives an empty
/// range anchored at `total_items`.
pub fn item_range(total_items: usize, page: usize, page_size: PageSize) -> ItemRange {
    let size = page_size.get();
    let start = page
        .saturating_sub(1)
        .saturating_mul(size)
        .min(total_items);
    let end = start.saturating_add(size).min(total_items);
    ItemRange::new(start, end)
}

/// Items visible on `page`
pub fn slice<T>(items: &[T], page: usize, page_size: PageSize) -> &[T] {
    &items[item_range(items.len(), page, page_size).as_range()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> PageSize {
        PageSize::new(n)
    }

    #[test]
    fn test_first_and_last_page() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(slice(&items, 1, size(10)), &items[0..10]);
        assert_eq!(slice(&items, 3, size(10)), &items[20..25]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(slice(&items, 4, size(10)).is_empty());
        assert!(slice(&items, usize::MAX, size(10)).is_empty());
        assert_eq!(item_range(25, usize::MAX, size(10)), ItemRange::new(25, 25));
    }

    #[test]
    fn test_page_zero_reads_as_first() {
        let items = ["a", "b", "c"];
        assert_eq!(slice(&items, 0, size(2)), &["a", "b"]);
    }

    #[test]
    fn test_empty_items() {
        let items: [u8; 0] = [];
        assert!(slice(&items, 1, size(10)).is_empty());
        assert_eq!(item_range(0, 1, size(10)), ItemRange::default());
    }

    #[test]
    fn test_huge_page_size_does_not_overflow() {
        let items = [1, 2, 3];
        assert_eq!(slice(&items, 2, size(usize::MAX)), &[] as &[i32]);
        assert_eq!(slice(&items, 1, size(usize::MAX)), &items);
    }
}
