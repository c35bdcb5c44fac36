//! Shared timeout settings for curl requests.

use std::time::Duration;

/// Connect/total timeouts applied to every HEAD probe and page fetch.
#[derive(Debug, Clone, Copy)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub total: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            total: Duration::from_secs(30),
        }
    }
}

impl HttpTimeouts {
    pub(crate) fn apply(&self, easy: &mut curl::easy::Easy) -> Result<(), curl::Error> {
        easy.connect_timeout(self.connect)?;
        easy.timeout(self.total)?;
        Ok(())
    }
}
