use primelens::core::numbers::{
    calculate_lcm, factorial, format_scientific, gcd, is_perfect_square, is_perfect_square_exact,
    prime_factorization, sum_of_digits, FactorMap,
};
use primelens::core::NumberError;

#[test]
fn factorization_reconstructs_every_input() {
    for n in 1..=5_000u64 {
        let factors = prime_factorization(n).unwrap();
        let product: u64 = factors.iter().map(|(p, e)| p.pow(e)).product();
        assert_eq!(product, n, "factors of {n}: {factors}");
        assert_eq!(calculate_lcm(&factors).unwrap(), n);
    }
}

#[test]
fn factorization_keys_are_increasing_primes() {
    let factors = prime_factorization(2 * 2 * 3 * 7 * 7 * 7 * 101).unwrap();
    let primes: Vec<u64> = factors.iter().map(|(p, _)| p).collect();
    assert_eq!(primes, vec![2, 3, 7, 101]);
    assert_eq!(factors.exponent(7), Some(3));
    for p in primes {
        assert!((2..p).all(|d| p % d != 0), "{p} is not prime");
    }
}

#[test]
fn factorization_of_one_is_empty() {
    let factors = prime_factorization(1).unwrap();
    assert!(factors.is_empty());
    assert_eq!(calculate_lcm(&factors).unwrap(), 1);
}

#[test]
fn factorization_rejects_zero() {
    assert!(matches!(prime_factorization(0), Err(NumberError::InvalidInput(_))));
}

#[test]
fn factorization_near_the_input_ceiling() {
    // 2^53 - 1 = 6361 × 69431 × 20394401
    let factors = prime_factorization((1 << 53) - 1).unwrap();
    assert_eq!(factors.to_string(), "{6361: 1, 69431: 1, 20394401: 1}");
}

#[test]
fn lcm_of_hand_built_map() {
    let factors: FactorMap = [(2, 3), (5, 2)].into_iter().collect();
    assert_eq!(calculate_lcm(&factors).unwrap(), 200);
}

#[test]
fn factorial_contract() {
    assert_eq!(factorial(0).unwrap(), 1.0);
    assert_eq!(factorial(5).unwrap(), 120.0);
    assert!(matches!(factorial(-1), Err(NumberError::Domain(_))));
}

#[test]
fn digit_sums() {
    assert_eq!(sum_of_digits(12345), 15);
    assert_eq!(sum_of_digits(0), 0);
    assert_eq!(sum_of_digits(-987i64), 24);
    assert_eq!(sum_of_digits(9_007_199_254_740_991u64), 76);
}

#[test]
fn perfect_squares() {
    assert!(is_perfect_square(16.0));
    assert!(!is_perfect_square(15.0));
    assert!(is_perfect_square(0.0));
    assert!(is_perfect_square(1.0));
    for k in 1..=1_000u64 {
        assert!(is_perfect_square((k * k) as f64));
        assert!(!is_perfect_square((k * k + 1) as f64));
        assert!(is_perfect_square_exact(k * k));
        assert!(!is_perfect_square_exact(k * k + 1));
    }
}

#[test]
fn float_square_test_has_a_known_blind_spot() {
    let k: u64 = 94_906_265;
    let n = k * k + 1;
    assert!(is_perfect_square(n as f64));
    assert!(!is_perfect_square_exact(n));
}

#[test]
fn gcd_contract() {
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(0, 7), 7);
    assert_eq!(gcd(0, 0), 0);
    assert_eq!(gcd(17, 13), 1);
    assert_eq!(gcd(u64::MAX, u64::MAX - 1), 1);
}

#[test]
fn scientific_format() {
    assert!(format_scientific(1e150).unwrap().starts_with("1.00 × 10^150"));
}
