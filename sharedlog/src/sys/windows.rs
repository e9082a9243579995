pub fn thread_id() -> u64 {
    unsafe { winapi::um::processthreadsapi::GetCurrentThreadId() as u64 }
}
