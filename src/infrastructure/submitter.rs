// SPDX-License-Identifier: MPL-2.0
//! Stand-in contact form delivery that waits and then succeeds.

use crate::application::port::{ContactMessage, FormSubmitter, SubmissionError};
use std::time::Duration;

/// How long a simulated delivery takes.
pub const SIMULATED_DELIVERY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay: SIMULATED_DELIVERY,
        }
    }
}

impl SimulatedSubmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl FormSubmitter for SimulatedSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(subject = %message.subject, "simulated delivery finished");
        Ok(())
    }
}
