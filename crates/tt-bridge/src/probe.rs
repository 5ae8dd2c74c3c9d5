//! Engine library version check, run before any input is read.

use semver::Version;
use thiserror::Error;
use tt_core::EngineLibrary;

#[derive(Error, Debug, PartialEq, Eq)]
#[error(
    "ERROR: {library} {required}+ required for LLMLingua-2 support. Current version: {found}\n\
     Please upgrade: {library} >= {required}"
)]
pub struct VersionMismatch {
    pub library: String,
    pub required: String,
    pub found: String,
}

/// Fails only when both versions parse and the library is older.
/// Unparseable versions skip the check.
pub fn check_version(library: &dyn EngineLibrary, minimum: &str) -> Result<(), VersionMismatch> {
    let (Ok(found), Ok(required)) = (Version::parse(library.version()), Version::parse(minimum)) else {
        return Ok(());
    };
    if found < required {
        return Err(VersionMismatch {
            library: library.name().to_string(),
            required: required.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}
