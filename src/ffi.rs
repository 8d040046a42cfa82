//! C ABI for the shared `DBOptions` handle.
//!
//! A handle owns one strong count of an `Arc<DBOptions>`. Hosts copy it with
//! `titan_db_options_retain` and give it back with `titan_db_options_release`;
//! the object is freed on the last release and must never be freed directly.

use std::mem::ManuallyDrop;
use std::ptr;
use std::sync::Arc;
use crate::{new_db_options, DBOptions};

#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DBOptionsHandle(*const DBOptions);

// A handle is a strong count of an `Arc<DBOptions>`, which is Send + Sync.
unsafe impl Send for DBOptionsHandle {}
unsafe impl Sync for DBOptionsHandle {}

impl DBOptionsHandle {
    pub fn null() -> Self {
        Self(ptr::null())
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn from_arc(options: Arc<DBOptions>) -> Self {
        Self(Arc::into_raw(options))
    }

    /// Takes back the strong count owned by this handle.
    ///
    /// # Safety
    /// The handle must be non-null, created by this module and not yet released.
    pub unsafe fn into_arc(self) -> Arc<DBOptions> {
        Arc::from_raw(self.0)
    }

    /// Borrows the options for as long as this handle value is borrowed.
    ///
    /// # Safety
    /// The handle must be null or live, and must stay live while the borrow is held.
    pub unsafe fn options(&self) -> Option<&DBOptions> {
        self.0.as_ref()
    }
}

#[no_mangle]
pub extern "C" fn titan_new_db_options() -> DBOptionsHandle {
    DBOptionsHandle::from_arc(new_db_options())
}

/// # Safety
/// `handle` must be null or a live handle from this module.
#[no_mangle]
pub unsafe extern "C" fn titan_db_options_retain(handle: DBOptionsHandle) -> DBOptionsHandle {
    if !handle.is_null() {
        Arc::increment_strong_count(handle.0);
    }
    handle
}

/// # Safety
/// `handle` must be null or a live handle from this module, and is dangling
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn titan_db_options_release(handle: DBOptionsHandle) {
    if !handle.is_null() {
        Arc::decrement_strong_count(handle.0);
    }
}

/// # Safety
/// `handle` must be null or a live handle from this module.
#[no_mangle]
pub unsafe extern "C" fn titan_db_options_ref_count(handle: DBOptionsHandle) -> usize {
    if handle.is_null() {
        return 0;
    }
    let options = ManuallyDrop::new(Arc::from_raw(handle.0));
    Arc::strong_count(&options)
}

#[no_mangle]
pub extern "C" fn titan_db_options_ptr_eq(a: DBOptionsHandle, b: DBOptionsHandle) -> bool {
    ptr::eq(a.0, b.0)
}
