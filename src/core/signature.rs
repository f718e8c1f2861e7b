use crate::error::{BotError, BotResult};
use ed25519_dalek::{Signature, Verifier, VerifyingKey, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Checks that interactions were signed by Discord with the application key.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    public_key: VerifyingKey,
}

impl SignatureVerifier {
    pub fn from_hex(public_key: &str) -> BotResult<Self> {
        let bytes = decode_hex::<PUBLIC_KEY_LENGTH>(public_key, "public key")?;
        let public_key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| BotError::Signature(format!("Invalid public key. {e}")))?;
        Ok(Self { public_key })
    }

    /// Discord signs the timestamp header followed by the raw request body.
    pub fn verify(&self, signature: &str, timestamp: &str, body: &[u8]) -> BotResult<()> {
        let signature = Signature::from_bytes(&decode_hex::<SIGNATURE_LENGTH>(signature, "signature")?);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.public_key
            .verify(&message, &signature)
            .map_err(|e| BotError::Signature(format!("Signature mismatch. {e}")))
    }
}

fn decode_hex<const N: usize>(input: &str, what: &str) -> BotResult<[u8; N]> {
    let bytes = hex::decode(input.trim())
        .map_err(|e| BotError::Signature(format!("Could not decode {what}. {e}")))?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        BotError::Signature(format!("Expected {N} bytes for {what}, got {}", bytes.len()))
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    pub(crate) fn signing_key() -> SigningKey {
        SigningKey::from_bytes(&[7u8; 32])
    }

    pub(crate) fn public_key_hex() -> String {
        hex::encode(signing_key().verifying_key().to_bytes())
    }

    pub(crate) fn sign(timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(signing_key().sign(&message).to_bytes())
    }

    #[test]
    fn genuine_signature_is_accepted() {
        let verifier = SignatureVerifier::from_hex(&public_key_hex()).unwrap();
        let body = br#"{"type":1}"#;

        assert!(verifier.verify(&sign("1700000000", body), "1700000000", body).is_ok());
    }

    #[test]
    fn tampered_body_or_timestamp_is_rejected() {
        let verifier = SignatureVerifier::from_hex(&public_key_hex()).unwrap();
        let body = br#"{"type":1}"#;
        let signature = sign("1700000000", body);

        assert!(verifier.verify(&signature, "1700000000", br#"{"type":2}"#).is_err());
        assert!(verifier.verify(&signature, "1700000001", body).is_err());
    }

    #[test]
    fn signature_from_another_key_is_rejected() {
        let other = SigningKey::from_bytes(&[9u8; 32]);
        let verifier = SignatureVerifier::from_hex(&hex::encode(other.verifying_key().to_bytes())).unwrap();
        let body = br#"{"type":1}"#;

        assert!(verifier.verify(&sign("1", body), "1", body).is_err());
    }

    #[test]
    fn malformed_inputs_are_signature_errors() {
        assert!(matches!(
            SignatureVerifier::from_hex("not hex"),
            Err(BotError::Signature(_))
        ));
        assert!(matches!(
            SignatureVerifier::from_hex("abcd"),
            Err(BotError::Signature(_))
        ));

        let verifier = SignatureVerifier::from_hex(&public_key_hex()).unwrap();
        assert!(matches!(verifier.verify("zz", "1", b"{}"), Err(BotError::Signature(_))));
        assert!(matches!(verifier.verify("", "1", b"{}"), Err(BotError::Signature(_))));
    }
}
