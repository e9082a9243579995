use std::fs::File;
use std::io::{Error, Result};
use std::os::windows::io::AsRawHandle;

use winapi::shared::winerror::ERROR_LOCK_VIOLATION;
use winapi::um::fileapi::{LockFileEx, UnlockFileEx};
use winapi::um::minwinbase::{LOCKFILE_EXCLUSIVE_LOCK, LOCKFILE_FAIL_IMMEDIATELY, OVERLAPPED};

fn lock(file: &File, flags: u32) -> Result<()> {
    unsafe {
        let mut overlapped: OVERLAPPED = core::mem::zeroed();

        let rc = LockFileEx(
            file.as_raw_handle() as _,
            flags,
            0,
            u32::MAX,
            u32::MAX,
            &mut overlapped,
        );

        if rc == 0 {
            Err(Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

pub fn lock_exclusive(file: &File) -> Result<()> {
    lock(file, LOCKFILE_EXCLUSIVE_LOCK)
}

pub fn try_lock_exclusive(file: &File) -> Result<bool> {
    match lock(file, LOCKFILE_EXCLUSIVE_LOCK | LOCKFILE_FAIL_IMMEDIATELY) {
        Ok(()) => Ok(true),
        Err(e) if e.raw_os_error() == Some(ERROR_LOCK_VIOLATION as i32) => Ok(false),
        Err(e) => Err(e),
    }
}

pub fn unlock(file: &File) -> Result<()> {
    unsafe {
        let mut overlapped: OVERLAPPED = core::mem::zeroed();

        let rc = UnlockFileEx(file.as_raw_handle() as _, 0, u32::MAX, u32::MAX, &mut overlapped);

        if rc == 0 {
            Err(Error::last_os_error())
        } else {
            Ok(())
        }
    }
}
