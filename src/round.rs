//! The ARX mixing rounds at the heart of the cipher.
//!
//! The cipher state is four independent 8-bit lanes. Every addition and
//! subtraction wraps within its lane, and every rotation is an 8-bit
//! circular rotation; nothing ever carries or shifts across a lane
//! boundary. `bwd` is the exact algebraic inverse of `fwd`.

/// The 4-lane working state. Lane `i` is byte `i` of the block.
pub(crate) type State = [u8; 4];

/// Lane-wise xor of the state with one key word (whitening).
pub(crate) fn whiten(s: &mut State, word: [u8; 4]) {
    for (lane, k) in s.iter_mut().zip(word) {
        *lane ^= k;
    }
}

/// One forward mixing round.
pub(crate) fn fwd(s: &mut State) {
    let [mut b0, mut b1, mut b2, mut b3] = *s;

    b0 = b0.wrapping_add(b1);
    b2 = b2.wrapping_add(b3);
    b1 = b1.rotate_left(2);
    b3 = b3.rotate_left(5);
    b1 ^= b0;
    b3 ^= b2;
    b0 = b0.rotate_left(4);
    b0 = b0.wrapping_add(b3);
    b2 = b2.wrapping_add(b1);
    b1 = b1.rotate_left(3);
    b3 = b3.rotate_left(7);
    b1 ^= b2;
    b3 ^= b0;
    b2 = b2.rotate_left(4);

    *s = [b0, b1, b2, b3];
}

/// One inverse mixing round: the steps of `fwd` undone in reverse order.
pub(crate) fn bwd(s: &mut State) {
    let [mut b0, mut b1, mut b2, mut b3] = *s;

    b2 = b2.rotate_left(4);
    b1 ^= b2;
    b3 ^= b0;
    b1 = b1.rotate_left(5);
    b3 = b3.rotate_left(1);
    b0 = b0.wrapping_sub(b3);
    b2 = b2.wrapping_sub(b1);
    b0 = b0.rotate_left(4);
    b1 ^= b0;
    b3 ^= b2;
    b1 = b1.rotate_left(6);
    b3 = b3.rotate_left(3);
    b0 = b0.wrapping_sub(b1);
    b2 = b2.wrapping_sub(b3);

    *s = [b0, b1, b2, b3];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bwd_inverts_fwd() {
        for _ in 0..10_000 {
            let state: State = rand::random();
            let mut s = state;
            fwd(&mut s);
            bwd(&mut s);
            assert_eq!(s, state);
        }
    }

    #[test]
    fn test_fwd_inverts_bwd() {
        for _ in 0..10_000 {
            let state: State = rand::random();
            let mut s = state;
            bwd(&mut s);
            fwd(&mut s);
            assert_eq!(s, state);
        }
    }

    #[test]
    fn test_rotations_compose_to_identity() {
        for r in 1..8 {
            for _ in 0..256 {
                let lane: u8 = rand::random();
                assert_eq!(lane.rotate_left(r).rotate_left(8 - r), lane);
            }
        }
    }

    #[test]
    fn test_whiten_is_involutive() {
        for _ in 0..1_000 {
            let state: State = rand::random();
            let word: [u8; 4] = rand::random();
            let mut s = state;
            whiten(&mut s, word);
            whiten(&mut s, word);
            assert_eq!(s, state);
        }
    }
}
