use std::fs::File;
use std::io::{Error, Result};
use std::os::unix::io::AsRawFd;

fn flock(file: &File, operation: libc::c_int) -> Result<()> {
    loop {
        let rc = unsafe { libc::flock(file.as_raw_fd(), operation) };

        if rc == 0 {
            return Ok(());
        }

        let err = Error::last_os_error();

        if err.raw_os_error() != Some(libc::EINTR) {
            return Err(err);
        }
    }
}

pub fn lock_exclusive(file: &File) -> Result<()> {
    flock(file, libc::LOCK_EX)
}

pub fn try_lock_exclusive(file: &File) -> Result<bool> {
    match flock(file, libc::LOCK_EX | libc::LOCK_NB) {
        Ok(()) => Ok(true),
        Err(e) if e.raw_os_error() == Some(libc::EWOULDBLOCK) => Ok(false),
        Err(e) => Err(e),
    }
}

pub fn unlock(file: &File) -> Result<()> {
    flock(file, libc::LOCK_UN)
}
