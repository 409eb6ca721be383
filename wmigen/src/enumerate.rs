//! Class enumeration.
//!
//! Lists every class exposed under `root\cimv2` by running the meta-class
//! query through the WMI automation interface. Listing is best effort: a
//! host without WMI, or a failed connection, lists nothing.

use crate::error::PlatformError;
use std::io::Write;

/// Namespace queried for classes.
pub const ROOT_NAMESPACE: &str = "root\\cimv2";

/// Query returning one record per class.
pub const META_CLASS_QUERY: &str = "SELECT * FROM meta_class";

/// Connection to the local WMI service.
///
/// Opening the session initializes COM for the calling thread and connects
/// to [`ROOT_NAMESPACE`]. Both are released when the session is dropped.
pub struct PlatformSession {
    #[cfg(windows)]
    connection: wmi::WMIConnection,
}

impl PlatformSession {
    /// Initializes COM and connects to the root namespace.
    ///
    /// # Errors
    /// Returns `PlatformError` if COM or the WMI connection fails.
    #[cfg(windows)]
    pub fn open() -> Result<Self, PlatformError> {
        let com = wmi::COMLibrary::new()?;
        let connection = wmi::WMIConnection::with_namespace_path(ROOT_NAMESPACE, com)?;
        tracing::debug!(namespace = ROOT_NAMESPACE, "connected to WMI");
        Ok(Self { connection })
    }

    /// Always fails: WMI only exists on Windows.
    ///
    /// # Errors
    /// Returns `PlatformError::Unsupported`.
    #[cfg(not(windows))]
    pub fn open() -> Result<Self, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    /// Runs the meta-class query and lazily yields class names.
    ///
    /// Records without a readable class name are skipped.
    ///
    /// # Errors
    /// Returns `PlatformError` if the query cannot be issued.
    #[cfg(windows)]
    pub fn class_names(&self) -> Result<impl Iterator<Item = String> + '_, PlatformError> {
        let records = self.connection.exec_query_native_wrapper(META_CLASS_QUERY)?;
        Ok(records.filter_map(|record| {
            match record.and_then(|object| object.get_property("__CLASS")) {
                Ok(wmi::Variant::String(name)) => Some(name),
                Ok(other) => {
                    tracing::debug!(value = ?other, "meta_class record without a class name");
                    None
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable meta_class record");
                    None
                }
            }
        }))
    }

    /// Yields nothing.
    ///
    /// # Errors
    /// Never fails.
    #[cfg(not(windows))]
    pub fn class_names(&self) -> Result<impl Iterator<Item = String> + '_, PlatformError> {
        Ok(std::iter::empty::<String>())
    }
}

/// Lazily yields the class names of an open session, or nothing if the
/// query fails.
pub fn enumerate(session: &PlatformSession) -> impl Iterator<Item = String> + '_ {
    let names = match session.class_names() {
        Ok(names) => Some(names),
        Err(e) => {
            tracing::warn!(error = %e, "meta_class query failed; listing nothing");
            None
        }
    };
    names.into_iter().flatten()
}

/// Writes one name per line.
///
/// # Errors
/// Returns any error raised by the writer.
pub fn write_names<W: Write>(
    names: impl IntoIterator<Item = String>,
    out: &mut W,
) -> std::io::Result<usize> {
    let mut count = 0;
    for name in names {
        writeln!(out, "{}", name)?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Lists every available class to `out`.
///
/// A connection failure is logged and yields an empty listing.
///
/// # Errors
/// Returns any error raised by the writer.
pub fn list_classes<W: Write>(out: &mut W) -> std::io::Result<usize> {
    let session = match PlatformSession::open() {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, "cannot connect to WMI; listing nothing");
            return Ok(0);
        }
    };
    write_names(enumerate(&session), out)
}
