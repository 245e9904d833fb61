//! Well-known public prime moduli.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::One;

use crate::params::parse_modulus;

// 2^2048 - 2^1984 - 1 + 2^64 * { [2^1918 pi] + 124476 }, RFC 3526 group 14
const MODP_2048_HEX: &str = "
    FFFFFFFF FFFFFFFF C90FDAA2 2168C234 C4C6628B 80DC1CD1
    29024E08 8A67CC74 020BBEA6 3B139B22 514A0879 8E3404DD
    EF9519B3 CD3A431B 302B0A6D F25F1437 4FE1356D 6D51C245
    E485B576 625E7EC6 F44C42E9 A637ED6B 0BFF5CB6 F406B7ED
    EE386BFB 5A899FA5 AE9F2411 7C4B1FE6 49286651 ECE45B3D
    C2007CB8 A163BF05 98DA4836 1C55D39A 69163FA8 FD24CF5F
    83655D23 DCA3AD96 1C62F356 208552BB 9ED52907 7096966D
    670C354E 4ABC9804 F1746C08 CA18217C 32905E46 2E36CE3B
    E39E772C 180E8603 9B2783A2 EC07A28F B5C55DF0 6F4C52C9
    DE2BCBF6 95581718 3995497C EA956AE5 15D22618 98FA0510
    15728E5A 8AACAA68 FFFFFFFF FFFFFFFF";

// order of the secp256k1 base point
const SECP256K1_ORDER_HEX: &str = "
    FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141";

lazy_static! {
    pub static ref MODP_2048: BigUint =
        parse_modulus(MODP_2048_HEX).expect("RFC 3526 group 14 prime is valid hex");
    pub static ref SECP256K1_ORDER: BigUint =
        parse_modulus(SECP256K1_ORDER_HEX).expect("secp256k1 group order is valid hex");
    /// 2^127 - 1
    pub static ref MERSENNE_127: BigUint = (BigUint::one() << 127u32) - 1u32;
}
