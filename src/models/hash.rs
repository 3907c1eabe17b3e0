//! # Hashes
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::CdxError;
use crate::bind::macros::{entity, wire_enum};
use crate::schema::FieldDescriptor as Field;

wire_enum! {
    /// Hash Algorithm
    pub enum HashAlgorithm {
        /// MD5
        Md5 => "MD5",
        /// SHA-1
        Sha1 => "SHA-1",
        /// SHA-256
        Sha256 => "SHA-256",
        /// SHA-384
        Sha384 => "SHA-384",
        /// SHA-512
        Sha512 => "SHA-512",
        /// SHA3-256
        Sha3_256 => "SHA3-256",
        /// SHA3-384
        Sha3_384 => "SHA3-384",
        /// SHA3-512
        Sha3_512 => "SHA3-512",
        /// BLAKE2b-256
        Blake2b256 => "BLAKE2b-256",
        /// BLAKE2b-384
        Blake2b384 => "BLAKE2b-384",
        /// BLAKE2b-512
        Blake2b512 => "BLAKE2b-512",
        /// BLAKE3
        Blake3 => "BLAKE3",
    }
}

entity! {
    /// Hash of a component or a referenced resource
    pub struct Hash {
        /// Algorithm
        alg: Option<HashAlgorithm> => 0, Field::new("alg").attribute(),
        /// Lowercase hex digest
        content: Option<String> => 1, Field::new("content").text(),
    }
}

impl Hash {
    /// Hash with a known digest
    pub fn new(alg: HashAlgorithm, content: impl Into<String>) -> Self {
        Self {
            alg: Some(alg),
            content: Some(content.into()),
        }
    }

    /// Compute the digest of `data`
    ///
    /// Only the SHA-2 family is supported.
    pub fn compute(alg: HashAlgorithm, data: impl AsRef<[u8]>) -> Result<Self, CdxError> {
        let data = data.as_ref();
        let content = match alg {
            HashAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(data);
                format!("{:x}", hasher.finalize())
            }
            HashAlgorithm::Sha384 => {
                let mut hasher = Sha384::new();
                hasher.update(data);
                format!("{:x}", hasher.finalize())
            }
            HashAlgorithm::Sha512 => {
                let mut hasher = Sha512::new();
                hasher.update(data);
                format!("{:x}", hasher.finalize())
            }
            other => {
                return Err(CdxError::InvalidValue(format!(
                    "computing {other} hashes is not supported"
                )));
            }
        };
        Ok(Self::new(alg, content))
    }

    /// Does the digest match `data`
    pub fn verify(&self, data: impl AsRef<[u8]>) -> Result<bool, CdxError> {
        let alg = self
            .alg
            .ok_or_else(|| CdxError::InvalidValue("hash has no algorithm".to_string()))?;
        let computed = Self::compute(alg, data)?;
        Ok(self
            .content
            .as_deref()
            .is_some_and(|content| Some(content.to_lowercase()) == computed.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        let hash = Hash::compute(HashAlgorithm::Sha256, b"cdxkit").unwrap();
        assert_eq!(hash.alg, Some(HashAlgorithm::Sha256));
        assert_eq!(hash.content.as_ref().map(String::len), Some(64));
        assert!(hash.verify(b"cdxkit").unwrap());
        assert!(!hash.verify(b"other").unwrap());

        let hash = Hash::compute(HashAlgorithm::Sha512, "").unwrap();
        assert!(hash.content.unwrap().starts_with("cf83e1357eefb8bd"));

        let hash = Hash::compute(HashAlgorithm::Sha256, "abc").unwrap();
        assert_eq!(
            hash.content.as_deref(),
            Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );

        assert!(Hash::compute(HashAlgorithm::Md5, b"cdxkit").is_err());
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("SHA3-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_256);
        assert_eq!(HashAlgorithm::Blake2b512.to_string(), "BLAKE2b-512");
        assert!("sha256".parse::<HashAlgorithm>().is_err());
    }
}
