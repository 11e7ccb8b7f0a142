use crate::Error;
use crate::os::sys_random;
use crate::rng::EntropySource;

/// Entropy drawn directly from the operating system.
///
/// The type holds no state: each call goes to the kernel (or the platform
/// crypto library), so no random material is cached between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        sys_random(dest).map_err(|err| {
            log::debug!("reading {} bytes from the system source failed: {err}", dest.len());
            Error::EntropySourceUnavailable(err)
        })?;

        log::debug!("read {} bytes from the system source", dest.len());
        Ok(())
    }
}
