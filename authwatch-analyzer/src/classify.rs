//! Line classification.
//!
//! Maps one raw journal line to a security category plus the fields that
//! category guarantees. Rules are checked in a fixed order and the first
//! match wins; anything that matches a rule but fails field extraction is
//! downgraded to `Unclassified` rather than surfaced as an error.

use regex::Regex;

/// Classification of a single journal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A rejected password attempt from a known source address.
    FailedPassword { address: String },
    /// A successful password login for a user from a source address.
    AcceptedPassword { user: String, address: String },
    /// A generic error or kernel warning, carrying the trimmed line.
    SystemError { message: String },
    /// Anything else; silently dropped by the aggregator.
    Unclassified,
}

/// Compiled extraction patterns.
///
/// Construct once and reuse; `classify` is called per line.
#[derive(Debug)]
pub struct Classifier {
    address: Regex,
    user: Regex,
}

impl Classifier {
    pub fn new() -> Self {
        // Dotted-quad IPv4 or a colon/hex IPv6 token, immediately after
        // the literal "from ". Extracted verbatim, no normalization.
        let address = Regex::new(r"from ((?:\d{1,3}\.){3}\d{1,3}|(?:[a-fA-F0-9:]+))")
            .expect("valid address pattern");
        let user = Regex::new(r"for (\w+)").expect("valid user pattern");
        Self { address, user }
    }

    /// Classify one raw line.
    ///
    /// Category matching is case-insensitive; field extraction runs against
    /// the original line.
    pub fn classify(&self, line: &str) -> LineClass {
        let lower = line.to_lowercase();

        if lower.contains("failed password") {
            // No extractable address means no aggregation key; drop the line.
            match self.extract_address(line) {
                Some(address) => LineClass::FailedPassword { address },
                None => LineClass::Unclassified,
            }
        } else if lower.contains("accepted password") {
            match (self.extract_user(line), self.extract_address(line)) {
                (Some(user), Some(address)) => LineClass::AcceptedPassword { user, address },
                _ => LineClass::Unclassified,
            }
        } else if lower.contains("error") || lower.contains("kernel:") {
            LineClass::SystemError {
                message: line.trim().to_string(),
            }
        } else {
            LineClass::Unclassified
        }
    }

    fn extract_address(&self, line: &str) -> Option<String> {
        self.address
            .captures(line)
            .map(|caps| caps[1].to_string())
    }

    fn extract_user(&self, line: &str) -> Option<String> {
        self.user.captures(line).map(|caps| caps[1].to_string())
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
