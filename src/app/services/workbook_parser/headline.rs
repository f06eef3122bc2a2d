//! Headline extraction and equality policy
//!
//! The headline is the literal text of the first cell of the first row of
//! a sheet, used only as a schema fingerprint. A file must declare a
//! non-empty headline: an empty or missing local headline never compares
//! equal to anything, including another empty headline.

use calamine::{Data, Range};
use tracing::debug;

/// Read the headline from a sheet range, if present and non-empty
pub fn sheet_headline(range: &Range<Data>) -> Option<String> {
    match range.get_value((0, 0)) {
        Some(Data::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Compare a server headline against a local headline
///
/// Exact, case-sensitive, untrimmed equality. A `None` on either side is
/// a read/transport failure or an empty schema line, and fails closed.
pub fn headlines_equal(server: Option<&str>, local: Option<&str>) -> bool {
    let Some(local) = local else {
        debug!("Local file headline is missing or empty");
        return false;
    };
    if local.is_empty() {
        debug!("Local file headline is empty");
        return false;
    }
    match server {
        Some(server) if server == local => {
            debug!("Headlines are equal, same kind of data");
            true
        }
        Some(server) => {
            debug!("Headlines differ: server '{}' vs local '{}'", server, local);
            false
        }
        None => {
            debug!("Server file headline is missing or empty");
            false
        }
    }
}
