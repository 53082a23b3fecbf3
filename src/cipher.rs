use std::net::Ipv4Addr;

use crate::round::{bwd, fwd, whiten};

/// A structure representing the IPCrypt context for 4-byte blocks.
///
/// The 16-byte key is held as four 4-byte words. Encryption runs four
/// mixing rounds interleaved with key whitening; decryption applies the
/// words in reverse order with the inverse rounds. Both directions are
/// total functions: any 4-byte block maps to another 4-byte block, and
/// the mapping is a bijection for every key.
pub struct Ipcrypt32 {
    key: [[u8; 4]; 4],
}

impl Ipcrypt32 {
    /// The number of bytes required for the encryption key.
    pub const KEY_BYTES: usize = 16;

    /// The number of bytes in a block (one IPv4 address).
    pub const BLOCK_BYTES: usize = 4;

    /// Generates a new random key for encryption.
    pub fn generate_key() -> [u8; Self::KEY_BYTES] {
        rand::random()
    }

    /// Creates a new Ipcrypt32 instance with the given key.
    ///
    /// # Arguments
    ///
    /// * `key` - A 16-byte array containing the encryption key.
    pub fn new(key: [u8; Self::KEY_BYTES]) -> Self {
        let mut words = [[0u8; 4]; 4];
        for (i, word) in words.iter_mut().enumerate() {
            word.copy_from_slice(&key[i * 4..(i + 1) * 4]);
        }
        Self { key: words }
    }

    /// Creates a new Ipcrypt32 instance from key material of any length.
    ///
    /// Only the first 16 bytes are used; anything beyond is silently
    /// ignored. Shorter input is zero-padded on the right, so an empty
    /// slice yields the all-zero key. This never fails.
    pub fn new_from_slice(key: &[u8]) -> Self {
        let mut padded = [0u8; Self::KEY_BYTES];
        let used = key.len().min(Self::KEY_BYTES);
        padded[..used].copy_from_slice(&key[..used]);
        Self::new(padded)
    }

    /// Creates a new Ipcrypt32 instance with a random key.
    pub fn new_random() -> Self {
        Self::new(Self::generate_key())
    }

    /// Encrypts a 4-byte block in place.
    pub fn encrypt_ip4(&self, ip: &mut [u8; 4]) {
        whiten(ip, self.key[0]);
        fwd(ip);
        whiten(ip, self.key[1]);
        fwd(ip);
        whiten(ip, self.key[2]);
        fwd(ip);
        whiten(ip, self.key[3]);
    }

    /// Decrypts a 4-byte block in place.
    pub fn decrypt_ip4(&self, ip: &mut [u8; 4]) {
        whiten(ip, self.key[3]);
        bwd(ip);
        whiten(ip, self.key[2]);
        bwd(ip);
        whiten(ip, self.key[1]);
        bwd(ip);
        whiten(ip, self.key[0]);
    }

    /// Encrypts an IPv4 address.
    ///
    /// # Arguments
    ///
    /// * `ip` - The IPv4 address to encrypt
    ///
    /// # Returns
    /// The encrypted IPv4 address
    pub fn encrypt_ipaddr(&self, ip: Ipv4Addr) -> Ipv4Addr {
        let mut bytes = ip.octets();
        self.encrypt_ip4(&mut bytes);
        Ipv4Addr::from(bytes)
    }

    /// Decrypts an IPv4 address.
    ///
    /// # Arguments
    ///
    /// * `encrypted` - The encrypted IPv4 address
    ///
    /// # Returns
    /// The decrypted IPv4 address
    pub fn decrypt_ipaddr(&self, encrypted: Ipv4Addr) -> Ipv4Addr {
        let mut bytes = encrypted.octets();
        self.decrypt_ip4(&mut bytes);
        Ipv4Addr::from(bytes)
    }
}
