use proptest::prelude::*;
use shelfmark_core::{progress_percent, validate_pages_read, ReadingStatus};

proptest! {
    #[test]
    fn progress_stays_within_bounds(total in 1u32..5000, read in 0u32..5000) {
        let read = read.min(total);
        let percent = progress_percent(read, total);
        prop_assert!(percent <= 100);
        prop_assert!(validate_pages_read(read, Some(total)).is_ok());
    }

    #[test]
    fn finished_books_are_read(total in 1u32..5000, extra in 0u32..100) {
        prop_assert_eq!(ReadingStatus::for_progress(total + extra, total), ReadingStatus::Read);
        prop_assert_eq!(progress_percent(total, total), 100);
    }

    #[test]
    fn partial_progress_is_reading(total in 2u32..5000, read in 1u32..5000) {
        let read = read % (total - 1) + 1;
        prop_assert_eq!(ReadingStatus::for_progress(read, total), ReadingStatus::Reading);
    }
}
