//! Platform Crate - Technical Infrastructure
//!
//! Technical building blocks shared by the domain crates. Today this is the
//! password primitive: Argon2id hashing with a fresh salt per hash, optional
//! pepper, zeroized plaintext and a policy for newly chosen passwords.

pub mod password;
