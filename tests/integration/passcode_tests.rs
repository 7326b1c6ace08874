//! Passcode engine integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixed_now;
    use chrono::{Duration, TimeZone, Utc};
    use rafiq_auth::auth::totp::{self, MODULUS};
    use rafiq_auth::{Passcode, TimeStep};

    const SEED20: &[u8] = b"12345678901234567890";

    /// HMAC-SHA256 HOTP values for the RFC 4226 seed, counters 0 to 5
    #[test]
    fn test_hotp_counter_vectors() {
        let expected = [875740, 247374, 254785, 496144, 480556, 697997];
        for (counter, want) in expected.into_iter().enumerate() {
            assert_eq!(
                totp::hotp(SEED20, counter as u64).value(),
                want,
                "counter {}",
                counter
            );
        }
    }

    #[test]
    fn test_generate_at_fixed_time() {
        let step30 = TimeStep::from_secs(30).unwrap();
        let step300 = TimeStep::from_secs(300).unwrap();
        assert_eq!(totp::generate(SEED20, fixed_now(), step30).value(), 413092);
        assert_eq!(totp::generate(SEED20, fixed_now(), step300).to_string(), "707516");
    }

    #[test]
    fn test_window_boundaries() {
        let step = TimeStep::from_secs(300).unwrap();
        // fixed_now() is aligned to a 300s boundary
        let code = totp::generate(SEED20, fixed_now(), step);
        let last_instant = fixed_now() + Duration::milliseconds(299_999);
        assert!(totp::validate(SEED20, last_instant, step, code.value()));
        assert!(!totp::validate(
            SEED20,
            fixed_now() - Duration::seconds(1),
            step,
            code.value()
        ));
    }

    #[test]
    fn test_pre_epoch_times_share_counter_zero() {
        let step = TimeStep::default();
        let before = Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(totp::counter(before, step), 0);
        assert_eq!(
            totp::generate(SEED20, before, step),
            totp::hotp(SEED20, 0)
        );
    }

    #[test]
    fn test_all_codes_fit_six_digits() {
        let secret = totp::generate_secret();
        for counter in 0..2_000u64 {
            let code = totp::hotp(&secret, counter);
            assert!(code.value() < MODULUS);
            assert_eq!(code.to_string().len(), 6);
            assert_eq!(Passcode::parse(&code.to_string()).unwrap(), code);
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_candidates() {
        let step = TimeStep::default();
        let code = totp::generate(SEED20, fixed_now(), step).value();
        assert!(!totp::validate(SEED20, fixed_now(), step, code + MODULUS));
    }

    #[test]
    fn test_format_examples() {
        assert_eq!(totp::format(5), "000005");
        assert_eq!(totp::format(123456), "123456");
    }
}
