use crate::{AuthError, RateLimitConfig, RequestRateLimiter};

#[test]
fn given_burst_within_limit_when_checked_then_allowed() {
    let limiter = RequestRateLimiter::new(RateLimitConfig {
        max_requests: 3,
        window_secs: 60,
    });

    for _ in 0..3 {
        assert!(limiter.check("10.0.0.1").is_ok());
    }
}

#[test]
fn given_burst_over_limit_when_checked_then_rate_limited() {
    let limiter = RequestRateLimiter::new(RateLimitConfig {
        max_requests: 2,
        window_secs: 60,
    });

    assert!(limiter.check("10.0.0.1").is_ok());
    assert!(limiter.check("10.0.0.1").is_ok());
    let result = limiter.check("10.0.0.1");

    assert!(matches!(
        result,
        Err(AuthError::RateLimitExceeded {
            limit: 2,
            window_secs: 60,
            ..
        })
    ));
}

#[test]
fn given_exhausted_key_when_other_key_checked_then_allowed() {
    let limiter = RequestRateLimiter::new(RateLimitConfig {
        max_requests: 1,
        window_secs: 60,
    });

    assert!(limiter.check("10.0.0.1").is_ok());
    assert!(limiter.check("10.0.0.1").is_err());
    assert!(limiter.check("10.0.0.2").is_ok());
}

#[test]
fn given_recently_used_key_when_pruned_then_still_tracked() {
    let limiter = RequestRateLimiter::default();

    limiter.check("10.0.0.9").unwrap();
    limiter.prune();

    assert_eq!(limiter.tracked_keys(), 1);
    assert_eq!(limiter.config().max_requests, 20);
}
