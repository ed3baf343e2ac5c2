//! Square-root extraction in 𝔽ₚ.

use crate::scalar::Int;

use super::Field;

impl Field {
    /// Returns the square roots of `value` in 𝔽ₚ.
    ///
    /// The result is either empty (the reduced value is a quadratic
    /// non-residue) or the pair `[r, p − r]` ordered smaller root first.
    /// The value zero is its own single root and yields `[0]`.
    ///
    /// For `p ≡ 3 (mod 4)` the candidate `value^((p+1)/4)` is computed and
    /// verified by squaring. All other primes go through Tonelli–Shanks,
    /// which first applies the Euler criterion and then walks the 2-Sylow
    /// subgroup down to a root.
    pub fn sqrt(&self, value: &Int) -> Vec<Int> {
        let x = self.reduce(value);

        if x.is_zero() {
            return vec![Int::zero()];
        }

        let p = self.modulus();
        let one = Int::one();

        let root = if p.bit(0) && p.bit(1) {
            // p ≡ 3 (mod 4): single exponentiation, verified below.
            let exponent = &(p + &one) >> 2;
            let candidate = self.pow(&x, &exponent);

            if self.sq(&candidate) != x {
                return Vec::new();
            }

            candidate
        } else {
            match self.tonelli_shanks(&x) {
                Some(root) => root,
                None => return Vec::new(),
            }
        };

        let other = self.sub(p, &root);

        if root <= other {
            vec![root, other]
        } else {
            vec![other, root]
        }
    }

    /// Tonelli–Shanks for `p ≡ 1 (mod 4)`.
    ///
    /// Returns `None` when `x` fails the Euler criterion.
    fn tonelli_shanks(&self, x: &Int) -> Option<Int> {
        let p = self.modulus().clone();
        let one = Int::one();
        let legendre_exponent = &(&p - &one) >> 1;

        if self.pow(x, &legendre_exponent) != one {
            return None;
        }

        // p − 1 = q · 2^s with q odd.
        let mut q = &p - &one;
        let mut s = 0u32;

        while !q.bit(0) {
            q = &q >> 1;
            s += 1;
        }

        // Smallest quadratic non-residue; its existence is guaranteed and
        // the scan touches only small public constants.
        let mut z = Int::from(2u32);

        while self.pow(&z, &legendre_exponent) == one {
            z = &z + &one;
        }

        let mut m = s;
        let mut c = self.pow(&z, &q);
        let mut t = self.pow(x, &q);
        let mut r = self.pow(x, &(&(&q + &one) >> 1));

        while t != one {
            let mut i = 0u32;
            let mut probe = t.clone();

            while probe != one {
                probe = self.sq(&probe);
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = self.sq(&b);
            }

            m = i;
            c = self.sq(&b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        Some(r)
    }
}
