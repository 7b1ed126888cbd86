#![forbid(unsafe_code)]

//! Algorithm identifiers of the fixed legacy profile.
//!
//! The producer names its algorithms the JCA way; the matching W3C URIs are
//! kept alongside for display.

// ── Canonicalization ─────────────────────────────────────────────────

pub const C14N: &str = "http://www.w3.org/TR/2001/REC-xml-c14n-20010315";

// ── Digest ───────────────────────────────────────────────────────────

pub const SHA512: &str = "http://www.w3.org/2001/04/xmlenc#sha512";

// ── Signature ────────────────────────────────────────────────────────

pub const RSA_SHA512: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha512";

/// JCA name of the only signature algorithm the profile uses.
pub const SHA512_WITH_RSA: &str = "SHA512withRSA";
