mod inmemory;

use chrono::NaiveDate;
pub use inmemory::InMemorySwingDateRepo;
use swingout_domain::SwingDate;

/// Pool of interned `SwingDate`s, one per calendar date.
///
/// Entries are never removed and may outlive every event referring to them,
/// for example when saving the event failed after its dates were interned.
/// Listings are built from the events only, so such entries are never shown.
pub trait ISwingDateRepo: Send + Sync {
    /// Returns the stored `SwingDate` for `date`, creating it if this is the
    /// first time the date is seen. Looking up and creating is atomic.
    fn find_or_create(&self, date: NaiveDate) -> SwingDate;
    fn find_by_date(&self, date: &NaiveDate) -> Option<SwingDate>;
    fn count(&self) -> usize;

    fn find_or_create_many(&self, dates: &[NaiveDate]) -> Vec<SwingDate> {
        dates.iter().map(|date| self.find_or_create(*date)).collect()
    }
}
