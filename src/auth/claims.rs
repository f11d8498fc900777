//! Unverified JWT claim extraction used for client-side expiry checks.
//!
//! The client never trusts these claims for authorization; the server re-validates every
//! token. Decoding only answers "should this token be refreshed before it is sent?".

// crates.io
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
// self
use crate::{
	_prelude::*,
	obs::{self, OpKind},
};

/// Subset of JWT claims the client reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
	/// Subject, usually the username.
	#[serde(default)]
	pub sub: Option<String>,
	/// Expiry as seconds since the Unix epoch.
	pub exp: f64,
	/// Role claim issued by the server.
	#[serde(default)]
	pub role: Option<String>,
}
impl JwtClaims {
	/// Returns `true` when `exp` lies strictly before `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		let now_secs = instant.unix_timestamp_nanos() as f64 / 1_000_000_000.0;

		self.exp < now_secs
	}
}

/// Reasons a token could not be decoded.
#[derive(Debug, ThisError)]
pub enum ClaimsError {
	/// The token does not have the `header.payload.signature` shape.
	#[error("Token is not a three-segment JWT.")]
	Format,
	/// The payload segment is not base64url.
	#[error("Token payload is not valid base64url.")]
	Base64(#[from] base64::DecodeError),
	/// The payload is not a JSON claims object with a numeric `exp`.
	#[error("Token payload is not a valid claims object.")]
	Json(#[from] serde_json::Error),
}

/// Decodes the payload segment of `token` **without verifying the signature**.
pub fn decode_claims_unverified(token: &str) -> Result<JwtClaims, ClaimsError> {
	let mut segments = token.split('.');
	let (Some(_header), Some(payload), Some(_signature), None) =
		(segments.next(), segments.next(), segments.next(), segments.next())
	else {
		return Err(ClaimsError::Format);
	};
	let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;

	Ok(serde_json::from_slice(&bytes)?)
}

/// Checks whether `token` is expired at `instant`; undecodable tokens count as expired.
pub fn is_token_expired_at(token: &str, instant: OffsetDateTime) -> bool {
	match decode_claims_unverified(token) {
		Ok(claims) => claims.is_expired_at(instant),
		Err(e) => {
			obs::debug(OpKind::Refresh, format_args!("Invalid token format: {e}"));

			true
		},
	}
}

/// Checks whether `token` is expired right now.
pub fn is_token_expired(token: &str) -> bool {
	is_token_expired_at(token, OffsetDateTime::now_utc())
}
