//! Head-noun extraction used as a cheap coreference proxy.

use crate::{error::PairingError, nlp::syntax::ParseCache};

/// Root-governed noun of `text`, or an empty string when there is none.
///
/// Fails with [`PairingError::ParseAssumptionViolated`] when the parser splits
/// `text` into several sentences.
pub fn head_noun(cache: &mut ParseCache<'_>, text: &str) -> Result<String, PairingError> {
    let parsed = cache.parse_single(text)?;
    Ok(parsed.head_noun().to_string())
}
