//! Deterministic key derivation.

use uuid::Uuid;

/// Namespace under which template names are hashed into keys.
const TEMPLATE_KEY_NAMESPACE: Uuid = Uuid::from_u128(0x8f4c_2a1d_6b3e_4f70_9a5c_d81e_02b7_c634);

/// Derives a stable key from a template name. The same name always yields
/// the same key.
pub fn derive_key(name: &str) -> Uuid {
    Uuid::new_v5(&TEMPLATE_KEY_NAMESPACE, name.as_bytes())
}
