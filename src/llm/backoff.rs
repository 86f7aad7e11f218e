use rand::Rng;
use std::time::Duration;

/// Exponential backoff with ±30% jitter: `base * 2^attempt`, exponent capped at 6.
pub fn calculate_backoff_delay(attempt: u32, base: Duration) -> Duration {
    let capped_attempt = attempt.min(6);
    let base_ms = base.as_millis() as u64;
    let delay_ms = base_ms.saturating_mul(2_u64.saturating_pow(capped_attempt));

    let jitter_factor = rand::thread_rng().gen_range(0.7..1.3);
    Duration::from_millis((delay_ms as f64 * jitter_factor).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_progression() {
        let base = Duration::from_millis(500);

        let delay0 = calculate_backoff_delay(0, base);
        let delay1 = calculate_backoff_delay(1, base);
        let delay2 = calculate_backoff_delay(2, base);

        assert!(delay0.as_millis() >= 350 && delay0.as_millis() <= 650);
        assert!(delay1.as_millis() >= 700 && delay1.as_millis() <= 1300);
        assert!(delay2.as_millis() >= 1400 && delay2.as_millis() <= 2600);
    }

    #[test]
    fn test_backoff_cap() {
        let base = Duration::from_millis(500);

        // 500ms * 2^6 = 32s, ±30%
        let delay = calculate_backoff_delay(30, base);
        assert!(delay.as_millis() >= 22_400 && delay.as_millis() <= 41_600);
    }

    #[test]
    fn test_zero_base_means_no_wait() {
        assert_eq!(calculate_backoff_delay(3, Duration::ZERO), Duration::ZERO);
    }
}
