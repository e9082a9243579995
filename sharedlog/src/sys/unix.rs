#[cfg(any(target_os = "macos", target_os = "ios"))]
pub fn thread_id() -> u64 {
    let mut tid: u64 = 0;

    unsafe {
        libc::pthread_threadid_np(std::ptr::null_mut(), &mut tid);
    }

    tid
}

#[cfg(not(any(target_os = "macos", target_os = "ios")))]
pub fn thread_id() -> u64 {
    unsafe { libc::syscall(libc::SYS_gettid) as u64 }
}
