use core::{
    borrow::Borrow,
    hash::{Hash, Hasher},
};

use crate::propagate::PropagateConst;

// Hashes exactly as the bare handle does, never by the pointee's address.
impl<P: Hash> Hash for PropagateConst<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

// `Eq`, `Ord` and `Hash` all forward to `P`, so maps keyed by wrappers can be queried with a bare
// handle.
impl<P> Borrow<P> for PropagateConst<P> {
    fn borrow(&self) -> &P {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

    use crate::propagate::PropagateConst;

    #[derive(Default)]
    struct Fnv(u64);

    impl Hasher for Fnv {
        fn finish(&self) -> u64 {
            self.0
        }

        fn write(&mut self, bytes: &[u8]) {
            for byte in bytes {
                self.0 = (self.0 ^ u64::from(*byte)).wrapping_mul(0x100_0000_01b3);
            }
        }
    }

    fn hash_one<T: Hash>(value: &T) -> u64 {
        let mut state = BuildHasherDefault::<Fnv>::default().build_hasher();
        value.hash(&mut state);
        state.finish()
    }

    #[test]
    fn test_hash_matches_underlying() {
        let value = 3u32;
        let address = &value as *const u32;

        assert_eq!(hash_one(&PropagateConst::wrap(address)), hash_one(&address));
    }

    #[test]
    fn test_hash_ignores_pointee() {
        let a = 3u32;
        let b = 3u32;

        assert_ne!(
            hash_one(&PropagateConst::wrap(&a as *const u32)),
            hash_one(&PropagateConst::wrap(&b as *const u32)),
        );
    }
}
