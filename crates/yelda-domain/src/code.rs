//! Constant code registry: authority tiers, job states and image states.
//!
//! Wire format: bare `i32`. Each family owns one hundred-block
//! (1xx authority, 2xx job state, 3xx image state).

use serde::{Deserialize, Serialize};

/// Returned when an integer is not a registered member of a code family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {family} code {code}")]
pub struct UnknownCode {
    pub family: &'static str,
    pub code: i32,
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal {
            $($variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $($variant = $value,)+
        }

        impl $name {
            /// Every registered member, in code order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Convert from the integer wire value. Returns `None` for unregistered codes.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Convert to the integer wire value.
            pub fn code(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = UnknownCode;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or(UnknownCode {
                    family: $family,
                    code,
                })
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.code()
            }
        }
    };
}

code_enum! {
    /// Account permission tier.
    Authority, "authority" {
        Empty = 100,
        Admin = 101,
        Doctor = 102,
        Guest = 103,
        Expert = 104,
    }
}

code_enum! {
    /// Labeling progress of a job.
    JobState, "job state" {
        Unlabeled = 200,
        Labeling = 201,
        Finished = 202,
    }
}

code_enum! {
    /// Review progress of a single image.
    ImageState, "image state" {
        Unassigned = 300,
        Running = 301,
        Different = 302,
        DifferentII = 303,
        Done = 304,
    }
}

impl Authority {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The family a registered code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeFamily {
    Authority,
    JobState,
    ImageState,
}

impl CodeFamily {
    /// Classify a code by membership, not by its leading digit.
    pub fn of(code: i32) -> Option<Self> {
        if Authority::from_code(code).is_some() {
            Some(Self::Authority)
        } else if JobState::from_code(code).is_some() {
            Some(Self::JobState)
        } else if ImageState::from_code(code).is_some() {
            Some(Self::ImageState)
        } else {
            None
        }
    }

    /// Whether `code` is a registered member of this family.
    pub fn contains(self, code: i32) -> bool {
        Self::of(code) == Some(self)
    }
}
