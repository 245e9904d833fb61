use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::{OsRng, StdRng};
use rand::seq::{index, SliceRandom};
use rand::SeedableRng;

use shamir_split::primes::{MERSENNE_127, MODP_2048, SECP256K1_ORDER};
use shamir_split::{join, join_shares, split, split_shares, Parameters, ShamirError, Share};

#[test]
fn every_window_of_threshold_shares_recovers_secret() {
    const K: usize = 10;
    const N: usize = 100;

    let secret = BigUint::from(42u32);
    let shares = split(&secret, &MODP_2048, K, N, &mut OsRng).unwrap();
    assert_eq!(shares.len(), N);

    let share_numbers = (0..N as i64).collect::<Vec<_>>();
    for i in 0..=N - K {
        let result = join(&shares[i..i + K], &share_numbers[i..i + K], &MODP_2048).unwrap();
        assert_eq!(result, secret, "window starting at share {}", i);
    }
}

#[test]
fn random_subsets_recover_secret() {
    let mut rng = StdRng::seed_from_u64(2024);
    let modulus = MERSENNE_127.clone();

    for (k, n) in [(1, 1), (1, 4), (2, 2), (2, 3), (3, 5), (5, 8), (7, 10), (12, 12)] {
        for _ in 0..5 {
            let secret = BigUint::from(0x5eed_u32) * BigUint::from(k as u32 * 31 + n as u32);
            let shares = split(&secret, &modulus, k, n, &mut rng).unwrap();

            let picked = index::sample(&mut rng, n, k).into_vec();
            let values = picked.iter().map(|&i| shares[i].clone()).collect::<Vec<_>>();
            let numbers = picked.iter().map(|&i| i as i64).collect::<Vec<_>>();

            assert_eq!(join(&values, &numbers, &modulus).unwrap(), secret, "k={} n={}", k, n);
        }
    }
}

#[test]
fn extreme_secrets_survive() {
    let mut rng = StdRng::seed_from_u64(1);
    let modulus = SECP256K1_ORDER.clone();
    let largest = &modulus - 1u32;

    for secret in [BigUint::zero(), largest] {
        let shares = split(&secret, &modulus, 4, 6, &mut rng).unwrap();
        assert_eq!(join(&shares[2..6], &[2, 3, 4, 5], &modulus).unwrap(), secret);
    }
}

#[test]
fn presentation_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(77);
    let modulus = MERSENNE_127.clone();
    let secret = BigUint::from(987_654_321u64);
    let shares = split(&secret, &modulus, 6, 15, &mut rng).unwrap();

    let mut picked = vec![0usize, 3, 4, 9, 11, 14];
    let expected = {
        let values = picked.iter().map(|&i| shares[i].clone()).collect::<Vec<_>>();
        let numbers = picked.iter().map(|&i| i as i64).collect::<Vec<_>>();
        join(&values, &numbers, &modulus).unwrap()
    };

    for _ in 0..10 {
        picked.shuffle(&mut rng);
        let values = picked.iter().map(|&i| shares[i].clone()).collect::<Vec<_>>();
        let numbers = picked.iter().map(|&i| i as i64).collect::<Vec<_>>();
        assert_eq!(join(&values, &numbers, &modulus).unwrap(), expected);
    }
    assert_eq!(expected, secret);
}

#[test]
fn more_than_threshold_shares_still_recover_secret() {
    let mut rng = StdRng::seed_from_u64(5);
    let modulus = MERSENNE_127.clone();
    let secret = BigUint::from(31337u32);
    let shares = split(&secret, &modulus, 3, 7, &mut rng).unwrap();

    let numbers = (0..7).collect::<Vec<i64>>();
    assert_eq!(join(&shares, &numbers, &modulus).unwrap(), secret);
}

#[test]
fn fewer_than_threshold_shares_are_not_required_to_recover_secret() {
    // Nothing is guaranteed below the threshold and no error is raised. With
    // a 127-bit modulus a coincidental match has probability about 2^-127, so
    // this representative case is expected to differ.
    let mut rng = StdRng::seed_from_u64(8);
    let modulus = MERSENNE_127.clone();
    let secret = BigUint::from(42u32);
    let shares = split(&secret, &modulus, 5, 8, &mut rng).unwrap();

    let result = join(&shares[..4], &[0, 1, 2, 3], &modulus).unwrap();
    assert!(result < modulus);
    assert_ne!(result, secret);
}

#[test]
fn split_validation_produces_no_shares() {
    let mut rng = StdRng::seed_from_u64(0);
    let modulus = BigUint::from(1613u32);

    assert!(matches!(
        split(&BigUint::from(1u32), &modulus, 0, 3, &mut rng),
        Err(ShamirError::InvalidParameters { threshold: 0, share_count: 3 })
    ));
    assert!(matches!(
        split(&BigUint::from(1u32), &modulus, 4, 3, &mut rng),
        Err(ShamirError::InvalidParameters { .. })
    ));
    assert!(matches!(
        split(&modulus, &modulus, 2, 3, &mut rng),
        Err(ShamirError::SecretTooLarge)
    ));
}

#[test]
fn join_validation() {
    let modulus = BigUint::from(1613u32);
    let values = vec![BigUint::from(1u32), BigUint::from(2u32)];

    assert!(matches!(
        join(&values, &[0], &modulus),
        Err(ShamirError::LengthMismatch { .. })
    ));
    assert!(matches!(
        join(&values, &[0, -1], &modulus),
        Err(ShamirError::NegativeShareNumber(-1))
    ));
}

#[test]
fn explicit_shares_survive_storage() {
    let params = Parameters::from_json(&format!(
        r#"{{ "modulus": "{:#x}", "threshold": 3, "share_count": 5 }}"#,
        *SECP256K1_ORDER
    ))
    .unwrap();

    let secret = BigUint::from(0xc0ffee_u32);
    let shares = params.split_shares(&secret, &mut OsRng).unwrap();

    let stored = serde_json::to_string(&shares[1..4]).unwrap();
    let loaded: Vec<Share> = serde_json::from_str(&stored).unwrap();
    assert_eq!(params.join_shares(&loaded).unwrap(), secret);
}

#[test]
fn explicit_and_positional_apis_interoperate() {
    let mut rng = StdRng::seed_from_u64(3);
    let modulus = MERSENNE_127.clone();
    let secret = BigUint::from(555u32);

    let values = split(&secret, &modulus, 3, 6, &mut rng).unwrap();
    let shares = [5u64, 0, 2]
        .iter()
        .filter_map(|&i| Share::from_index(i, values[i as usize].clone()))
        .collect::<Vec<_>>();
    assert_eq!(shares.len(), 3);
    assert_eq!(join_shares(&shares, &modulus).unwrap(), secret);

    let shares = split_shares(&secret, &modulus, 3, 6, &mut rng).unwrap();
    let values = shares[3..].iter().map(|s| s.value.clone()).collect::<Vec<_>>();
    let numbers = shares[3..].iter().filter_map(Share::index).collect::<Vec<_>>();
    assert_eq!(join(&values, &numbers, &modulus).unwrap(), secret);
}
