use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::errors::ArnError;

pub const ARN_PREFIX: &str = "arn:";

const SECTION_COUNT: usize = 6;

/// A decomposed Amazon Resource Name.
///
/// Follows the standard grammar `arn:partition:service:region:account-id:resource`.
/// Region and account may be empty (IAM ARNs carry no region) and the
/// resource section keeps any further colons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    pub resource: String,
}

impl Arn {
    pub fn parse(input: &str) -> Result<Self, ArnError> {
        if !input.starts_with(ARN_PREFIX) {
            return Err(ArnError::MissingPrefix);
        }

        let sections: Vec<&str> = input.splitn(SECTION_COUNT, ':').collect();
        if sections.len() != SECTION_COUNT {
            return Err(ArnError::NotEnoughSections(sections.len()));
        }

        Ok(Arn {
            partition: sections[1].to_string(),
            service: sections[2].to_string(),
            region: sections[3].to_string(),
            account_id: sections[4].to_string(),
            resource: sections[5].to_string(),
        })
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

impl FromStr for Arn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arn::parse(s)
    }
}
