use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Picks a delay in `[min_delay, max_delay)` milliseconds, or `None` when the range is empty.
pub fn pick_random_delay(min_delay: u64, max_delay: u64) -> Option<Duration> {
    if max_delay <= min_delay {
        return None;
    }

    let mut rng = StdRng::from_entropy();
    Some(Duration::from_millis(rng.gen_range(min_delay..max_delay)))
}

/// Sleeps a random amount of time between two station fetches.
pub async fn generate_random_delay(min_delay: u64, max_delay: u64) {
    if let Some(delay) = pick_random_delay(min_delay, max_delay) {
        debug!(delay_ms = delay.as_millis() as u64, "Waiting before next request");
        sleep(delay).await;
    }
}
