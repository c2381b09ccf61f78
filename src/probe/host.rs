use std::ffi::CStr;

/// the fallback identity used when the system cannot tell us.
pub(crate) const UNKNOWN: &str = "Unknown";

/// queries the system hostname.
pub(crate) fn hostname() -> Option<String> {
    let mut buffer = [0u8; 256];
    // SAFETY: the buffer is valid for writes of its own length.
    let rc = unsafe { libc::gethostname(buffer.as_mut_ptr().cast(), buffer.len()) };
    if rc != 0 {
        return None;
    }

    // gethostname may leave the name unterminated on truncation.
    buffer[255] = 0;
    CStr::from_bytes_until_nul(&buffer)
        .ok()
        .and_then(|name| name.to_str().ok())
        .map(str::to_owned)
}

/// looks up the name of the current user.
pub(crate) fn username() -> Option<String> {
    // SAFETY: getpwuid returns a pointer to static storage, or null.
    let passwd = unsafe { libc::getpwuid(libc::getuid()) };
    if passwd.is_null() {
        return None;
    }

    // SAFETY: a non-null passwd entry holds a valid nul-terminated name.
    let name = unsafe { CStr::from_ptr((*passwd).pw_name) };
    name.to_str().ok().map(str::to_owned)
}
