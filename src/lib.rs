//! Format-preserving encryption for IPv4 addresses.
//!
//! This crate implements ipcrypt, a tiny ARX block cipher with a 32-bit
//! block and a 128-bit key. An IPv4 address encrypts to another IPv4
//! address, and decryption recovers the original exactly: for every key,
//! encryption is a bijection on the full 32-bit block space.
//!
//! The cipher is deterministic and its block is small, so identical
//! inputs always produce identical outputs and an attacker who can query
//! the cipher can eventually build a codebook. It is meant for
//! obfuscating addresses in logs and datasets, not for protecting data
//! against a determined adversary.
//!
//! # Examples
//!
//! ```rust
//! use ipcrypt32::Ipcrypt32;
//! use std::net::Ipv4Addr;
//! use std::str::FromStr;
//!
//! let key = Ipcrypt32::generate_key();
//! let cipher = Ipcrypt32::new(key);
//!
//! let ip = Ipv4Addr::from_str("192.168.1.1").unwrap();
//! let encrypted = cipher.encrypt_ipaddr(ip);
//! let decrypted = cipher.decrypt_ipaddr(encrypted);
//! assert_eq!(ip, decrypted);
//! ```
//!
//! Raw 4-byte blocks can be processed in place:
//!
//! ```rust
//! use ipcrypt32::Ipcrypt32;
//!
//! let cipher = Ipcrypt32::new_random();
//! let mut block = [192, 0, 2, 1];
//! cipher.encrypt_ip4(&mut block);
//! cipher.decrypt_ip4(&mut block);
//! assert_eq!(block, [192, 0, 2, 1]);
//! ```
//!
//! Key material of any length is accepted through
//! [`Ipcrypt32::new_from_slice`]: the first 16 bytes are used, shorter
//! input is zero-padded.

pub(crate) mod cipher;
pub(crate) mod round;

pub use cipher::Ipcrypt32;

pub mod reexports {
    pub use rand;
}
