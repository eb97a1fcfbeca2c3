use std::future::Future;

/// Fixed-delay retry budget for waiting on a startup asset.
///
/// Polls at a constant rate with no backoff and gives up for good once the budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay_ms: u32,
}

/// Every attempt failed; `last_error` is from the final one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryExhausted<E> {
    pub attempts: u32,
    pub last_error: E,
}

impl RetryPolicy {
    /// Budget used while waiting for the player database: one initial check
    /// plus 51 re-checks, 100 ms apart.
    pub const DATABASE: Self = Self {
        max_retries: 51,
        delay_ms: 100,
    };

    /// Whether another attempt may follow the `failed`-th consecutive failure (1-based).
    pub fn allows_retry(self, failed: u32) -> bool {
        failed <= self.max_retries
    }

    pub fn max_attempts(self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Longest time spent sleeping before the policy gives up.
    pub fn total_delay_ms(self) -> u64 {
        u64::from(self.max_retries) * u64::from(self.delay_ms)
    }

    /// Run `attempt` until it succeeds or the budget is spent, awaiting
    /// `sleep(delay_ms)` between failures.
    ///
    /// On success returns the value and how many attempts failed before it.
    pub async fn run<T, E, A, AFut, S, SFut>(
        self,
        mut attempt: A,
        mut sleep: S,
    ) -> Result<(T, u32), RetryExhausted<E>>
    where
        A: FnMut() -> AFut,
        AFut: Future<Output = Result<T, E>>,
        S: FnMut(u32) -> SFut,
        SFut: Future<Output = ()>,
    {
        let mut failed = 0u32;
        loop {
            match attempt().await {
                Ok(value) => return Ok((value, failed)),
                Err(last_error) => {
                    failed += 1;
                    if !self.allows_retry(failed) {
                        return Err(RetryExhausted {
                            attempts: failed,
                            last_error,
                        });
                    }
                    sleep(self.delay_ms).await;
                }
            }
        }
    }
}
