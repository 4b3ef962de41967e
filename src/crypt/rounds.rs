use sha2::Digest;
use sha2::digest::Output;

/// Runs the rounds loop seeded with digest A and returns digest C.
///
/// Every round hashes the previous round's digest, so the loop is strictly
/// sequential.
pub fn digest_c<D: Digest>(digest_a: &Output<D>, p: &[u8], s: &[u8], rounds: u32) -> Output<D> {
    let mut current = digest_a.clone();

    for round in 0..rounds {
        let mut hasher = D::new();

        if round % 2 == 0 {
            hasher.update(&current[..]);
        } else {
            hasher.update(p);
        }

        if round % 3 != 0 {
            hasher.update(s);
        }

        if round % 7 != 0 {
            hasher.update(p);
        }

        if round % 2 == 0 {
            hasher.update(p);
        } else {
            hasher.update(&current[..]);
        }

        hasher.finalize_into(&mut current);
    }

    current
}
